//! JWT authentication middleware for protecting API endpoints.
//!
//! The guard extracts the bearer token from the `Authorization` header,
//! verifies it against the access secret, and injects the decoded identity
//! into the request extensions. It is the only authentication path:
//! every protected route goes through this one transform, so the failure
//! semantics cannot diverge between endpoints.
//!
//! Failure contract: a missing credential is 401 Unauthorized; a credential
//! that is present but invalid or expired is 403 Forbidden. The guard never
//! reads the refresh cookie.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use ct_core::domain::entities::token::Claims;
use ct_core::errors::{DomainError, TokenError};
use ct_core::services::token::TokenService;
use ct_shared::types::ErrorResponse;

/// Authenticated identity injected into guarded requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the JWT claims
    pub user_id: Uuid,
    /// Email carried by the claims
    pub email: String,
}

impl AuthContext {
    /// Creates an authentication context from verified claims
    pub fn from_claims(claims: &Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        Ok(Self {
            user_id,
            email: claims.email.clone(),
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    tokens: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates the guard around a shared token service
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = Arc::clone(&self.tokens);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(missing_credential_error()),
            };

            let claims = match tokens.verify_access_token(&token) {
                Ok(claims) => claims,
                Err(err) => return Err(invalid_credential_error(&err)),
            };

            let context = match AuthContext::from_claims(&claims) {
                Ok(context) => context,
                Err(err) => return Err(invalid_credential_error(&err)),
            };

            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// 401: no credential was supplied at all
fn missing_credential_error() -> Error {
    InternalError::from_response(
        "missing bearer token",
        HttpResponse::Unauthorized().json(ErrorResponse::new(
            "unauthorized",
            "Missing or invalid Authorization header",
        )),
    )
    .into()
}

/// 403: a credential was supplied but failed verification
fn invalid_credential_error(err: &DomainError) -> Error {
    let (code, message) = match err {
        DomainError::Token(TokenError::TokenExpired) => ("token_expired", "Token has expired"),
        _ => ("invalid_token", "Invalid token"),
    };
    InternalError::from_response(
        "token verification failed",
        HttpResponse::Forbidden().json(ErrorResponse::new(code, message)),
    )
    .into()
}

/// Extractor for the identity a guarded route runs as
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(missing_credential_error);
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_auth_context_rejects_malformed_subject() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            email: "user@campus.edu".to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        assert!(AuthContext::from_claims(&claims).is_err());
    }
}
