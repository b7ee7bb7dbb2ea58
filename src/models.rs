use serde::{Deserialize, Serialize};

/// Response type for single-key lookups
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DataResponse {
    pub id: String,
    pub data: String,
}

/// Response type for the diagnostic key scans
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct KeyScanResponse {
    pub user_keys: Vec<String>,
    pub location_keys: Vec<String>,
}

/// Request body for the blob write endpoint; both fields optional,
/// and the body itself may be absent entirely
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BlobWriteRequest {
    pub file_name: Option<String>,
    pub file_content: Option<String>,
}

/// Response type for successful blob writes
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BlobWriteResponse {
    pub message: String,
    pub file_name: String,
    pub file_content: String,
}
