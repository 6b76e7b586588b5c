//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::errors::ErrorKind;
use rebook_core::error::CoreError;
use rebook_core::types::EntityId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The literal scheme prefix the `Authorization` header must carry.
/// Case-sensitive, exactly one space.
const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated member extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthMember) -> AppResult<Json<()>> {
///     tracing::info!(member_id = %auth.member_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// A missing header or one without the `Bearer ` prefix rejects with 400
/// before any token decoding; a present-but-invalid token rejects with 401,
/// with a kind-specific message for expired and unsupported-format tokens.
#[derive(Debug, Clone)]
pub struct AuthMember {
    /// The member's id (from `claims.sub`).
    pub member_id: EntityId,
}

impl FromRequestParts<AppState> for AuthMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::BadRequest("Missing or malformed Authorization header".into())
            })?;

        let token = auth_header.strip_prefix(BEARER_PREFIX).ok_or_else(|| {
            AppError::BadRequest(
                "Authorization header must be of the form: Bearer <token>".into(),
            )
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(classify_token_error)?;

        Ok(AuthMember {
            member_id: claims.sub,
        })
    }
}

/// Re-classify a token validation failure into the response message the
/// client sees: expired and structurally-unsupported tokens get specific
/// messages, everything else a generic one.
fn classify_token_error(err: jsonwebtoken::errors::Error) -> AppError {
    let message = match err.kind() {
        ErrorKind::ExpiredSignature => "Token expired",
        ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => "Unsupported token format",
        _ => "Invalid or expired token",
    };
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}
