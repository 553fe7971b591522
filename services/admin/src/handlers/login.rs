use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::AdminApiError;
use crate::state::AppState;
use crate::usecase::password::{VerifyPasswordInput, VerifyPasswordUseCase};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

pub async fn verify_password(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AdminApiError> {
    let usecase = VerifyPasswordUseCase {
        settings: state.settings_store(),
    };
    usecase
        .execute(VerifyPasswordInput {
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse { success: true }))
}
