use crate::api::models::EventPayload;
use crate::config::SenderConfig;
use crate::error::SendError;
use crate::utils::normalize_url;
use log::*;
use reqwest::Client as HttpClient;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use url::Url;

/// Result of a completed exchange with the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Status 200 with a JSON body.
    Success(Value),
    /// Any other status, with the body left as raw text.
    Failure { status: u16, body: String },
}

pub struct ApiClient {
    pub http: HttpClient,
    pub endpoint: Url,
}

impl ApiClient {
    pub fn new(config: &SenderConfig) -> Result<Self, SendError> {
        let endpoint = Url::parse(&normalize_url(&config.endpoint))?;
        let http = HttpClient::builder().use_rustls_tls().build()?;
        Ok(Self { http, endpoint })
    }

    /// POST the payload once. Non-200 statuses are an `Outcome`, not an error;
    /// transport failures and a non-JSON 200 body are errors.
    pub async fn send_event(&self, payload: &EventPayload) -> Result<Outcome, SendError> {
        debug!("POST {} - {} event(s)", self.endpoint, payload.data.len());

        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if status == StatusCode::OK {
            let json = serde_json::from_str::<Value>(&body).map_err(|source| SendError::InvalidJson {
                status: status.as_u16(),
                body: body.clone(),
                source,
            })?;
            info!("POST {} - accepted", self.endpoint);
            Ok(Outcome::Success(json))
        } else {
            warn!("POST {} - HTTP {}: {}", self.endpoint, status, body);
            Ok(Outcome::Failure {
                status: status.as_u16(),
                body,
            })
        }
    }
}
