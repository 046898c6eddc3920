//! Turns an operation into the method, URL, body, and headers of one call.

use reqwest::Method;
use serde_json::Value;

use crate::date::PixelDate;
use crate::types::{Credentials, GraphDefinition, Pixel, PixelaResult, Quantity, UserRegistration};

/// Service root; every resource lives under `{endpoint}/users`.
pub const DEFAULT_ENDPOINT: &str = "https://pixe.la/v1";

/// Header carrying the user token on every call except user creation.
pub const USER_TOKEN_HEADER: &str = "X-USER-TOKEN";

/// The five calls the service is used for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateUser,
    CreateGraph(GraphDefinition),
    CreatePixel {
        graph_id: String,
        pixel: Pixel,
    },
    UpdatePixel {
        graph_id: String,
        date: PixelDate,
        quantity: Quantity,
    },
    DeletePixel {
        graph_id: String,
        date: PixelDate,
    },
}

/// A fully built call, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateUser => "create-user",
            Operation::CreateGraph(_) => "create-graph",
            Operation::CreatePixel { .. } => "create-pixel",
            Operation::UpdatePixel { .. } => "update-pixel",
            Operation::DeletePixel { .. } => "delete-pixel",
        }
    }

    pub fn build(&self, endpoint: &str, credentials: &Credentials) -> PixelaResult<ApiRequest> {
        let users = users_url(endpoint);
        let graphs = format!("{users}/{}/graphs", credentials.username);
        let auth = vec![(USER_TOKEN_HEADER.to_string(), credentials.token.clone())];

        let request = match self {
            Operation::CreateUser => ApiRequest {
                method: Method::POST,
                url: users,
                body: Some(serde_json::to_value(UserRegistration::agreeing(credentials))?),
                headers: Vec::new(),
            },
            Operation::CreateGraph(graph) => ApiRequest {
                method: Method::POST,
                url: graphs,
                body: Some(serde_json::to_value(graph)?),
                headers: auth,
            },
            Operation::CreatePixel { graph_id, pixel } => ApiRequest {
                method: Method::POST,
                url: format!("{graphs}/{graph_id}"),
                body: Some(serde_json::to_value(pixel)?),
                headers: auth,
            },
            Operation::UpdatePixel {
                graph_id,
                date,
                quantity,
            } => ApiRequest {
                method: Method::PUT,
                url: format!("{graphs}/{graph_id}/{date}"),
                body: Some(serde_json::json!({ "quantity": quantity })),
                headers: auth,
            },
            Operation::DeletePixel { graph_id, date } => ApiRequest {
                method: Method::DELETE,
                url: format!("{graphs}/{graph_id}/{date}"),
                body: None,
                headers: auth,
            },
        };

        Ok(request)
    }
}

fn users_url(endpoint: &str) -> String {
    format!("{}/users", endpoint.trim_end_matches('/'))
}

/// Browser page showing a graph.
pub fn graph_page_url(endpoint: &str, username: &str, graph_id: &str) -> String {
    format!("{}/{username}/graphs/{graph_id}.html", users_url(endpoint))
}
