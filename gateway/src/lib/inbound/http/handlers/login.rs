use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::authentication::errors::AuthenticatorClientError;
use crate::authentication::ports::AuthenticatorPort;
use crate::inbound::http::router::AppState;

pub async fn login<A>(
    State(state): State<AppState<A>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError>
where
    A: AuthenticatorPort,
{
    let token = state
        .authenticator
        .authenticate_password(&body.username, &body.password)
        .await
        .map_err(|e| match e {
            AuthenticatorClientError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthenticatorClientError::Unavailable(err) => {
                tracing::error!(error = %err, "Authenticator unreachable");
                ApiError::BadGateway("Authentication service unavailable".to_string())
            }
            AuthenticatorClientError::Internal(err) => {
                tracing::error!(error = %err, "Authenticator call failed");
                ApiError::InternalServerError("Authentication failed".to_string())
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData { token },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
