//! Pixela — client for the Pixela graph-tracking service: users, graphs, and dated pixels.

pub mod client;
pub mod date;
pub mod request;
pub mod types;

pub use client::PixelaClient;
pub use date::PixelDate;
pub use request::{
    graph_page_url, ApiRequest, Operation, DEFAULT_ENDPOINT, USER_TOKEN_HEADER,
};
pub use types::*;
