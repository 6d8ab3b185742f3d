//! Per-resource access gate
//!
//! Wrap a resource or scope with `AccessGate::new(module, action)`. Every
//! request is checked from scratch: identity first, then the role's privilege
//! on the module. The wrapped service only runs for granted requests, and
//! sees the caller as [`UserInfo`] and the decision as [`ScopeInfo`] in the
//! request extensions.

use crate::auth::rbac::ScopeInfo;
use crate::auth::{AuthMethod, UserInfo};
use crate::server::middleware::helpers::extract_auth_method;
use crate::server::state::AppState;
use crate::utils::error::{AccessError, Result as AccessResult};
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, HttpMessage, HttpRequest, ResponseError};
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Access gate middleware for one `(module, action)` pair
#[derive(Debug, Clone)]
pub struct AccessGate {
    module: Arc<str>,
    action: Arc<str>,
}

impl AccessGate {
    pub fn new(module: &str, action: &str) -> Self {
        Self {
            module: Arc::from(module),
            action: Arc::from(action),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Decide a request carrying `method`
    ///
    /// Returns the caller and the granted scope, or the error the request is
    /// rejected with: `Unauthorized` when there is no usable identity,
    /// `Forbidden` when the role lacks the privilege and `PolicyLookup` when a
    /// lookup failed or timed out.
    pub async fn authorize(
        &self,
        state: &AppState,
        method: &AuthMethod,
    ) -> AccessResult<(UserInfo, ScopeInfo)> {
        if method.is_none() {
            debug!(module = %self.module, "Request without credentials");
            return Err(AccessError::unauthorized("Unauthorized"));
        }

        let limit = state.config.auth().lookup_timeout();

        let user = bounded(limit, "identity", state.identity.resolve(method))
            .await?
            .ok_or_else(|| AccessError::unauthorized("Unauthorized"))?;

        if !user.has_role() {
            warn!(user_id = %user.id, "Identity without a role");
            return Err(AccessError::unauthorized("No Access"));
        }

        let decision = bounded(
            limit,
            "policy",
            state.resolver.resolve(&user.role, &self.module, &self.action),
        )
        .await?;

        if !decision.is_granted() {
            warn!(
                user_id = %user.id,
                role = %user.role,
                module = %self.module,
                action = %self.action,
                "Access denied"
            );
            return Err(AccessError::forbidden("Access denied"));
        }

        debug!(
            user_id = %user.id,
            module = %self.module,
            action = %self.action,
            scope = %decision.scope_name,
            "Access granted"
        );
        Ok((user, decision))
    }
}

/// Run a lookup, turning an overrun of `limit` into a `PolicyLookup` error
pub(crate) async fn bounded<T, F>(limit: Duration, lookup: &str, fut: F) -> AccessResult<T>
where
    F: Future<Output = AccessResult<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(AccessError::policy_lookup(format!(
            "{} lookup timed out after {}ms",
            lookup,
            limit.as_millis()
        ))),
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AccessGateService<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateService {
            service: Rc::new(service),
            gate: self.clone(),
        }))
    }
}

/// Service implementation for the access gate
pub struct AccessGateService<S> {
    service: Rc<S>,
    gate: AccessGate,
}

impl<S, B> Service<ServiceRequest> for AccessGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = std::result::Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let gate = self.gate.clone();

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                let err = AccessError::internal("Application state not configured");
                return Ok(req.error_response(err).map_into_right_body());
            };

            let method = extract_auth_method(req.headers(), &state.config.auth().session_cookie_name);

            match gate.authorize(&state, &method).await {
                Ok((user, scope)) => {
                    req.extensions_mut().insert(user);
                    req.extensions_mut().insert(scope);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    let response = err.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Caller attached by [`AccessGate`]
pub fn get_user_info(req: &HttpRequest) -> AccessResult<UserInfo> {
    req.extensions()
        .get::<UserInfo>()
        .cloned()
        .ok_or_else(|| AccessError::internal("Missing user info; route is not gated"))
}

/// Decision attached by [`AccessGate`]
pub fn get_scope_info(req: &HttpRequest) -> AccessResult<ScopeInfo> {
    req.extensions()
        .get::<ScopeInfo>()
        .cloned()
        .ok_or_else(|| AccessError::internal("Missing scope info; route is not gated"))
}
