//! Async HTTP client for the Pixela API, wrapping reqwest.
//!
//! Every call sends exactly one request and hands back the status and raw
//! body text. Nothing is retried and no status is treated as an error.

use crate::date::PixelDate;
use crate::request::{ApiRequest, Operation, DEFAULT_ENDPOINT};
use crate::types::{ApiResponse, Credentials, GraphDefinition, Pixel, PixelaResult, Quantity};

#[derive(Clone)]
pub struct PixelaClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl PixelaClient {
    /// Client for the public service at [`DEFAULT_ENDPOINT`].
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, credentials)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, credentials: Credentials) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pixela/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            http,
            endpoint: endpoint.into(),
            credentials,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub async fn create_user(&self) -> PixelaResult<ApiResponse> {
        self.execute(&Operation::CreateUser).await
    }

    pub async fn create_graph(&self, graph: &GraphDefinition) -> PixelaResult<ApiResponse> {
        self.execute(&Operation::CreateGraph(graph.clone())).await
    }

    pub async fn create_pixel(&self, graph_id: &str, pixel: &Pixel) -> PixelaResult<ApiResponse> {
        self.execute(&Operation::CreatePixel {
            graph_id: graph_id.to_string(),
            pixel: pixel.clone(),
        })
        .await
    }

    pub async fn update_pixel(
        &self,
        graph_id: &str,
        date: PixelDate,
        quantity: &Quantity,
    ) -> PixelaResult<ApiResponse> {
        self.execute(&Operation::UpdatePixel {
            graph_id: graph_id.to_string(),
            date,
            quantity: quantity.clone(),
        })
        .await
    }

    pub async fn delete_pixel(&self, graph_id: &str, date: PixelDate) -> PixelaResult<ApiResponse> {
        self.execute(&Operation::DeletePixel {
            graph_id: graph_id.to_string(),
            date,
        })
        .await
    }

    /// Build and send a single operation.
    pub async fn execute(&self, operation: &Operation) -> PixelaResult<ApiResponse> {
        let request = operation.build(&self.endpoint, &self.credentials)?;
        tracing::debug!(operation = operation.name(), "Built request");
        self.send(&request).await
    }

    /// Send a prepared request and return the raw response.
    pub async fn send(&self, request: &ApiRequest) -> PixelaResult<ApiResponse> {
        let mut builder = self.http.request(request.method.clone(), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::info!(method = %request.method, url = %request.url, "Sending request");
        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        tracing::info!(status, "Received response");

        Ok(ApiResponse { status, body })
    }
}
