use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::services::selection::selection_controller::SelectionError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

impl From<SelectionError> for AppError {
    fn from(e: SelectionError) -> Self {
        let code = match e {
            SelectionError::UnknownAgency(_) | SelectionError::UnknownRoute(_) => {
                StatusCode::NOT_FOUND
            }
            SelectionError::NoAgencySelected => StatusCode::CONFLICT,
        };

        AppError::new(code, &e.to_string())
    }
}

#[derive(Serialize)]
struct ResponseJson {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
