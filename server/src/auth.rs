//! Per-request admin session.
//!
//! The session is resolved from the `Authorization` header on every request,
//! so there is no client-writable flag to fall out of sync.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use serde::Serialize;

use crate::state::AppState;
use crate::utils::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Credentials {
    Missing,
    Malformed,
    Bearer(String),
}

fn credentials(parts: &Parts) -> Credentials {
    let Some(value) = parts.headers.get(header::AUTHORIZATION) else {
        return Credentials::Missing;
    };
    let Ok(value) = value.to_str() else {
        return Credentials::Malformed;
    };
    match value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Credentials::Bearer(token.trim().to_string()),
        _ => Credentials::Malformed,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub is_admin: bool,
}

impl Session {
    pub fn resolve(parts: &Parts, admin_token: Option<&str>) -> Self {
        let is_admin = match (credentials(parts), admin_token) {
            (Credentials::Bearer(token), Some(expected)) => token == expected,
            _ => false,
        };
        Self { is_admin }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Session::resolve(parts, state.config.admin_token.as_deref()))
    }
}

/// Extractor for routes that only admins may reach.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match credentials(parts) {
            Credentials::Missing => Err(AppError::AuthError(
                "Admin credentials are required".to_string(),
            )),
            Credentials::Malformed => Err(AppError::AuthError(
                "Authorization must be a Bearer token".to_string(),
            )),
            Credentials::Bearer(_) => {
                if Session::resolve(parts, state.config.admin_token.as_deref()).is_admin {
                    Ok(AdminSession)
                } else {
                    tracing::warn!(path = %parts.uri.path(), "Rejected non-admin review request");
                    Err(AppError::Forbidden(
                        "Only admins can review events".to_string(),
                    ))
                }
            }
        }
    }
}
