//! Arachne - fuzzable-URL discovery crawler
//!
//! A depth-bounded, single-host web crawler that discovers URLs carrying
//! query parameters (seed input for downstream parameter-testing tools)
//! and harvests email addresses found in page bodies.

pub mod config;
pub mod crawler;
pub mod error;
pub mod http;
pub mod models;
pub mod report;
