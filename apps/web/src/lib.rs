//! Presentation layer for the hackathon recommender: a single-page form and
//! a server-side relay that keeps the service address out of the browser.

pub mod client;
pub mod config;
pub mod error;
pub mod server;

pub use crate::client::RecommenderClient;
pub use crate::config::WebSettings;
pub use crate::error::ProxyError;
