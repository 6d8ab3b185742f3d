//! Turning a request credential into a caller identity

use super::jwt::JwtHandler;
use super::session::SessionStore;
use super::types::{AuthMethod, UserInfo};
use crate::config::AuthConfig;
use crate::utils::error::{AccessError, Result};
use std::sync::Arc;
use tracing::debug;

/// Resolves session cookies and bearer tokens into [`UserInfo`]
#[derive(Clone)]
pub struct IdentityResolver {
    jwt: Arc<JwtHandler>,
    sessions: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityResolver")
            .field("jwt", &self.jwt)
            .finish_non_exhaustive()
    }
}

impl IdentityResolver {
    pub fn new(config: &AuthConfig, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            jwt: Arc::new(JwtHandler::new(config)),
            sessions,
        }
    }

    pub fn jwt(&self) -> &JwtHandler {
        &self.jwt
    }

    /// Identity behind `method`
    ///
    /// Bad, expired or unknown credentials yield `Ok(None)`, as does a valid
    /// token whose user has since been deleted. A bearer token resolves to the
    /// user's stored record, not to its claims. Only a failing store read is
    /// an error.
    pub async fn resolve(&self, method: &AuthMethod) -> Result<Option<UserInfo>> {
        match method {
            AuthMethod::None => Ok(None),
            AuthMethod::Session(token) => self
                .sessions
                .find_session_user(token)
                .await
                .map_err(|e| AccessError::policy_lookup(format!("Session lookup failed: {}", e))),
            AuthMethod::Jwt(token) => {
                let claims = match self.jwt.verify_token(token) {
                    Ok(claims) => claims,
                    Err(e) => {
                        debug!("Rejecting bearer token: {}", e);
                        return Ok(None);
                    }
                };

                let user = self
                    .sessions
                    .find_active_user(claims.sub)
                    .await
                    .map_err(|e| AccessError::policy_lookup(format!("User lookup failed: {}", e)))?;
                if user.is_none() {
                    debug!(user_id = %claims.sub, "Bearer token for a missing or deleted user");
                }
                Ok(user)
            }
        }
    }
}
