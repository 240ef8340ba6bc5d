//! HTTP client module for the arachne crawler

pub mod client;
pub use client::HttpClient;
