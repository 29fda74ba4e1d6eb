use serde::{Deserialize, Serialize};

/// Body of a `POST /add` call.
#[derive(Debug, Clone, Serialize)]
pub struct AdditionRequest {
    pub number1: f64,
    pub number2: f64,
}

/// Body of a successful `POST /add` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AdditionResponse {
    pub result: f64,
    #[serde(default)]
    pub operation: Option<String>,
}

/// Body of the collaborator's `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}
