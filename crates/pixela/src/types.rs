//! Core data types for users, graphs, and pixels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::PixelDate;

/// The user token and username every request is made with.
///
/// Values missing from the environment are carried as empty strings; the
/// remote service is the one that rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub username: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }

    /// True when either value is empty.
    pub fn is_incomplete(&self) -> bool {
        self.token.is_empty() || self.username.is_empty()
    }
}

/// Body of the create-user call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub token: String,
    pub username: String,
    pub agree_terms_of_service: String,
    pub not_minor: String,
}

impl UserRegistration {
    /// Registration that agrees to the terms and confirms the user is not a minor.
    pub fn agreeing(credentials: &Credentials) -> Self {
        Self {
            token: credentials.token.clone(),
            username: credentials.username.clone(),
            agree_terms_of_service: "yes".to_string(),
            not_minor: "yes".to_string(),
        }
    }
}

/// Value type of a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    Int,
    #[default]
    Float,
}

impl GraphType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphType::Int => "int",
            GraphType::Float => "float",
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(GraphType::Int),
            "float" => Ok(GraphType::Float),
            other => Err(format!("unknown graph type '{other}' (expected int or float)")),
        }
    }
}

/// Graph configuration sent once when the graph is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphDefinition {
    pub id: String,
    pub name: String,
    pub unit: String,
    #[serde(rename = "type")]
    pub kind: GraphType,
    pub color: String,
}

impl Default for GraphDefinition {
    fn default() -> Self {
        Self {
            id: DEFAULT_GRAPH_ID.to_string(),
            name: "Coding Graph".to_string(),
            unit: "hours".to_string(),
            kind: GraphType::Float,
            color: "ajisai".to_string(),
        }
    }
}

/// Graph id used when none is given.
pub const DEFAULT_GRAPH_ID: &str = "graph1";

/// Quantity as it goes on the wire: a decimal rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(String);

impl Quantity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the value is a plain non-negative decimal such as `3` or `3.8`.
    ///
    /// Nothing is rejected on this basis; the service decides.
    pub fn looks_numeric(&self) -> bool {
        let mut parts = self.0.splitn(2, '.');
        let whole = parts.next().unwrap_or_default();
        let frac = parts.next();

        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        match frac {
            None => digits(whole),
            Some(frac) => digits(whole) && digits(frac),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Quantity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for Quantity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// One dated data point. The date is the pixel's key within its graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    pub date: PixelDate,
    pub quantity: Quantity,
}

impl Pixel {
    pub fn new(date: PixelDate, quantity: impl Into<Quantity>) -> Self {
        Self {
            date,
            quantity: quantity.into(),
        }
    }
}

/// Raw outcome of a call: status and body text, unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors that can occur in the client library.
#[derive(thiserror::Error, Debug)]
pub enum PixelaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {0} (expected YYYYMMDD)")]
    InvalidDate(String),
}

/// Convenience result type.
pub type PixelaResult<T> = Result<T, PixelaError>;
