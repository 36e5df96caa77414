//! API request handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::server::AppState;
use crate::error::ConvertError;
use crate::excel::ensure_xlsx;

/// Name of the multipart field carrying the spreadsheet
pub const UPLOAD_FIELD: &str = "file";

/// File name of the returned report
pub const DOWNLOAD_NAME: &str = "uitslagen_output.txt";

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// A failed request: status plus the single message shown to the user
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::err(self.message))).into_response()
    }
}

impl From<ConvertError> for ApiError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::UnsupportedFile(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, "Only .xlsx files are accepted.")
            }
            ConvertError::NoData => ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Could not find any data in the Excel file.",
            ),
            other => ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Something went wrong: {}", other),
            ),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::new(err.status(), err.body_text())
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

impl EndpointInfo {
    fn new(path: &str, method: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(RootResponse {
        name: "Uitslagen Server".to_string(),
        version: state.version.clone(),
        description: "Converts football results spreadsheets into a tagged text report"
            .to_string(),
        endpoints: vec![
            EndpointInfo::new("/health", "GET", "Health check endpoint"),
            EndpointInfo::new("/version", "GET", "Get server version"),
            EndpointInfo::new(
                "/api/v1/convert",
                "POST",
                "Upload an .xlsx file (multipart field 'file'), receive the text report",
            ),
        ],
    }))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
    }))
}

/// An uploaded spreadsheet
struct Upload {
    file_name: String,
    bytes: Bytes,
}

/// Pull the `file` field out of the multipart body
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            break;
        }
        let bytes = field.bytes().await?;
        return Ok(Upload { file_name, bytes });
    }
    Err(ApiError::new(
        StatusCode::BAD_REQUEST,
        "Choose an Excel file (.xlsx).",
    ))
}

/// POST /api/v1/convert - Convert an uploaded workbook
pub async fn convert_upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let upload = read_upload(&mut multipart).await?;
    ensure_xlsx(&upload.file_name)?;

    let file_name = upload.file_name.clone();
    let result = tokio::task::spawn_blocking(move || {
        crate::core::convert(&upload.bytes, &state.converter)
    })
    .await
    .map_err(|e| {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", e),
        )
    })?;

    let conversion = result.map_err(|e| {
        warn!(file = %file_name, error = %e, "conversion failed");
        ApiError::from(e)
    })?;

    info!(
        file = %file_name,
        matches = conversion.match_count(),
        "upload converted"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_NAME),
            ),
        ],
        conversion.into_bytes(),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_ok_creates_success_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test data".to_string());

        assert!(response.success);
        assert_eq!(response.data, Some("test data".to_string()));
        assert!(response.error.is_none());
        // UUID format (8-4-4-4-12)
        assert_eq!(response.request_id.len(), 36);
    }

    #[test]
    fn test_api_response_error_serializes_without_data() {
        let response: ApiResponse<String> = ApiResponse::err("error message");
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("\"data\""));
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"error\":\"error message\""));
    }

    #[test]
    fn test_convert_error_status_mapping() {
        let no_data = ApiError::from(ConvertError::NoData);
        assert_eq!(no_data.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(no_data.message, "Could not find any data in the Excel file.");

        let unsupported = ApiError::from(ConvertError::UnsupportedFile("a.csv".to_string()));
        assert_eq!(unsupported.status, StatusCode::BAD_REQUEST);

        let broken = ApiError::from(ConvertError::Workbook("zip".to_string()));
        assert_eq!(broken.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(broken.message.starts_with("Something went wrong:"));
    }

    #[test]
    fn test_endpoint_info_serialize() {
        let info = EndpointInfo::new("/api/v1/convert", "POST", "Convert");
        let json = serde_json::to_string(&info).unwrap();

        assert!(json.contains("\"path\":\"/api/v1/convert\""));
        assert!(json.contains("\"method\":\"POST\""));
    }
}
