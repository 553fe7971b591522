use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::AdminApiError;
use crate::state::AppState;
use crate::usecase::login_code::IssueLoginCodeUseCase;

#[derive(Serialize)]
pub struct SendCodeResponse {
    pub success: bool,
    /// Masked admin address ("ad***@example.com"), never the raw one.
    pub email: String,
}

pub async fn send_login_code(
    State(state): State<AppState>,
) -> Result<Json<SendCodeResponse>, AdminApiError> {
    let usecase = IssueLoginCodeUseCase {
        settings: state.settings_store(),
        login_codes: state.login_codes(),
        mailer: state.mailer(),
    };
    let out = usecase.execute().await?;
    Ok(Json(SendCodeResponse {
        success: true,
        email: out.masked_email,
    }))
}
