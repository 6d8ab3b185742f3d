//! Helper functions for middleware

use crate::auth::AuthMethod;
use actix_web::http::header::HeaderMap;

/// Extract the request credential from headers
///
/// A session cookie named `cookie_name` wins over an `Authorization: Bearer`
/// header. Empty values count as absent.
pub fn extract_auth_method(headers: &HeaderMap, cookie_name: &str) -> AuthMethod {
    let cookie_prefix = format!("{}=", cookie_name);

    for cookie_header in headers.get_all("cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            for cookie in cookie_str.split(';') {
                let cookie = cookie.trim();
                if let Some(stripped) = cookie.strip_prefix(&cookie_prefix) {
                    if !stripped.is_empty() {
                        return AuthMethod::Session(stripped.to_string());
                    }
                }
            }
        }
    }

    if let Some(auth_header) = headers.get("authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(stripped) = auth_str.strip_prefix("Bearer ") {
                let token = stripped.trim();
                if !token.is_empty() {
                    return AuthMethod::Jwt(token.to_string());
                }
            }
        }
    }

    AuthMethod::None
}
