//! API client for communicating with the DeQCode backend

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::forms::RegistrationForm;
use crate::types::*;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

/// Calls the UI makes against the backend
///
/// The browser implementation is [`HttpBackend`]; tests substitute their own.
#[async_trait(?Send)]
pub trait Backend {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;

    async fn register(&self, form: &RegistrationForm) -> Result<AuthResponse>;

    /// Returns the body as sent; an `error` field inside a 2xx body is left
    /// for the caller to inspect.
    async fn design_circuit(&self, request: &DesignRequest) -> Result<GenerationResult>;

    async fn view_circuits(&self, request: &CircuitsRequest) -> Result<Vec<HistoryEntry>>;
}

/// POST a JSON body, optionally with a bearer token
async fn post_json<T>(url: &str, body: &T, token: Option<&str>) -> Result<Response>
where
    T: serde::Serialize,
{
    let req = Request::post(url).header("Content-Type", "application/json");

    let req = if let Some(t) = token {
        req.header("Authorization", &format!("Bearer {}", t))
    } else {
        req
    };

    let req = req
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        tracing::warn!("POST {} failed with status {}", url, resp.status());
        return Err(ApiError::Status(resp.status()));
    }

    Ok(resp)
}

async fn decode<R: serde::de::DeserializeOwned>(resp: Response) -> Result<R> {
    resp.json::<R>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `fetch`-backed client
#[derive(Debug, Clone)]
pub struct HttpBackend {
    api: ApiConfig,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(api: ApiConfig, token: Option<String>) -> Self {
        Self { api, token }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        let url = self.api.url(&self.api.login_path);
        let resp = post_json(&url, request, None).await?;
        decode(resp).await
    }

    async fn register(&self, form: &RegistrationForm) -> Result<AuthResponse> {
        let url = self.api.url(&self.api.register_path);
        let resp = post_json(&url, form, None).await?;
        // The register endpoint may answer with an empty or non-JSON body.
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }

    async fn design_circuit(&self, request: &DesignRequest) -> Result<GenerationResult> {
        let url = self.api.url(&self.api.design_path);
        let resp = post_json(&url, request, self.token.as_deref()).await?;
        decode(resp).await
    }

    async fn view_circuits(&self, request: &CircuitsRequest) -> Result<Vec<HistoryEntry>> {
        let url = self.api.url(&self.api.circuits_path);
        let resp = post_json(&url, request, self.token.as_deref()).await?;
        let body: CircuitsResponse = decode(resp).await?;
        Ok(body.circuits)
    }
}
