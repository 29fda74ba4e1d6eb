/// API client — the single point of entry for all calls to the collaborator service.
///
/// No other module talks HTTP to the collaborator. Every user action maps to
/// exactly one request here: no retries, no backoff, no client-side timeout.
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::errors::ActionError;
use crate::input::SelectedFile;
use crate::models::calculator::{AdditionRequest, AdditionResponse, HealthStatus};
use crate::models::resume::{ParseResumeResponse, ResumeData};

const PARSE_RESUME_PATH: &str = "/parse-resume";
const ADD_PATH: &str = "/add";
const HEALTH_PATH: &str = "/health";
const FILE_FIELD: &str = "file";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// The collaborator as seen by the UI controller.
///
/// Carried in `UiController` as `Arc<dyn Backend>` so tests can stand in a stub.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Uploads a resume and returns the parsed data.
    async fn parse_resume(&self, file: &SelectedFile) -> Result<ResumeData, ActionError>;

    /// Adds two numbers remotely.
    async fn add(&self, number1: f64, number2: f64) -> Result<f64, ActionError>;

    /// Probes the collaborator's health endpoint.
    async fn health(&self) -> Result<HealthStatus, ActionError>;
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn parse_resume(&self, file: &SelectedFile) -> Result<ResumeData, ActionError> {
        let part = Part::bytes(file.contents().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.mime_type())
            .map_err(TransportError::Http)?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .client
            .post(self.url(PARSE_RESUME_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(TransportError::Http)?;

        let body: ParseResumeResponse = read_json(response).await?;

        if !body.success {
            return Err(ActionError::Application(body.message.or(body.error)));
        }

        let data = body.resume_data.ok_or_else(|| {
            TransportError::Malformed("success response without resume_data".to_string())
        })?;

        debug!(
            "parse-resume succeeded: {} work entries, {} education entries",
            data.work_experience.len(),
            data.education.len()
        );

        Ok(data)
    }

    async fn add(&self, number1: f64, number2: f64) -> Result<f64, ActionError> {
        let response = self
            .client
            .post(self.url(ADD_PATH))
            .header("content-type", "application/json")
            .json(&AdditionRequest { number1, number2 })
            .send()
            .await
            .map_err(TransportError::Http)?;

        let body: AdditionResponse = read_json(response).await?;

        debug!(
            "add succeeded: result={} operation={}",
            body.result,
            body.operation.as_deref().unwrap_or("addition")
        );

        Ok(body.result)
    }

    async fn health(&self) -> Result<HealthStatus, ActionError> {
        let response = self
            .client
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(TransportError::Http)?;

        Ok(read_json(response).await?)
    }
}

/// Rejects non-2xx statuses, then decodes the body as `T`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status(status.as_u16()));
    }

    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| TransportError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{FileCandidate, FileSource};
    use bytes::Bytes;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn sample_file() -> SelectedFile {
        SelectedFile::try_from(FileCandidate {
            name: "cv.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            contents: Bytes::from_static(b"%PDF-1.4 fake"),
            source: FileSource::Picker,
        })
        .unwrap()
    }

    async fn assert_add(server: &mut Server, a: f64, b: f64, reply: &str, expected: f64) {
        let mock = server
            .mock("POST", "/add")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "number1": a, "number2": b })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply)
            .expect(1)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let result = client.add(a, b).await.unwrap();
        assert_eq!(result, expected);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_posts_json_pair_and_reads_result() {
        let mut server = Server::new_async().await;
        assert_add(&mut server, 5.0, 3.0, r#"{"result": 8, "operation": "addition"}"#, 8.0).await;
    }

    #[tokio::test]
    async fn test_add_handles_negative_and_fractional_results() {
        let mut server = Server::new_async().await;
        assert_add(&mut server, -5.0, 3.0, r#"{"result": -2}"#, -2.0).await;
        assert_add(&mut server, 3.5, 2.1, r#"{"result": 5.6}"#, 5.6).await;
    }

    #[tokio::test]
    async fn test_add_maps_non_2xx_to_transport_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/add")
            .with_status(500)
            .with_body(r#"{"detail": "boom"}"#)
            .expect(1)
            .create_async()
            .await;

        let err = ApiClient::new(server.url()).add(1.0, 2.0).await.unwrap_err();
        assert!(matches!(
            err,
            ActionError::Transport(TransportError::Status(500))
        ));
        // One attempt only.
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_maps_malformed_body_to_transport_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/add")
            .with_status(200)
            .with_body(r#"{"sum": 3}"#)
            .create_async()
            .await;

        let err = ApiClient::new(server.url()).add(1.0, 2.0).await.unwrap_err();
        assert!(matches!(
            err,
            ActionError::Transport(TransportError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Nothing listens on port 1.
        let err = ApiClient::new("http://127.0.0.1:1").add(1.0, 2.0).await.unwrap_err();
        assert!(matches!(err, ActionError::Transport(TransportError::Http(_))));
    }

    #[tokio::test]
    async fn test_parse_resume_uploads_file_field() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/parse-resume")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="file""#.to_string()),
                Matcher::Regex(r#"filename="cv.pdf""#.to_string()),
                Matcher::Regex("application/pdf".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "success": true,
                    "message": "Resume parsed successfully",
                    "resume_data": {
                        "full_name": "Ada Lovelace",
                        "work_experience": [{"company": "Acme", "position": "Eng"}]
                    }
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let data = ApiClient::new(server.url())
            .parse_resume(&sample_file())
            .await
            .unwrap();
        assert_eq!(data.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(data.work_experience[0].company, "Acme");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_parse_resume_surfaces_application_message() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/parse-resume")
            .with_status(200)
            .with_body(r#"{"success": false, "message": "Only PDF files are supported"}"#)
            .create_async()
            .await;

        let err = ApiClient::new(server.url())
            .parse_resume(&sample_file())
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Only PDF files are supported");
    }

    #[tokio::test]
    async fn test_parse_resume_falls_back_to_error_field() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/parse-resume")
            .with_status(200)
            .with_body(r#"{"success": false, "error": "pdf is encrypted"}"#)
            .create_async()
            .await;

        let err = ApiClient::new(server.url())
            .parse_resume(&sample_file())
            .await
            .unwrap_err();
        assert!(matches!(err, ActionError::Application(Some(ref m)) if m == "pdf is encrypted"));
    }

    #[tokio::test]
    async fn test_parse_resume_success_without_data_is_malformed() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/parse-resume")
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let err = ApiClient::new(server.url())
            .parse_resume(&sample_file())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ActionError::Transport(TransportError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_health_reads_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/health")
            .with_status(200)
            .with_body(r#"{"status": "healthy", "service": "number-calculator"}"#)
            .create_async()
            .await;

        let status = ApiClient::new(server.url()).health().await.unwrap();
        assert_eq!(status.status, "healthy");
        assert_eq!(status.service.as_deref(), Some("number-calculator"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url(ADD_PATH), "http://localhost:8000/add");
    }
}
