//! HTTP client module
//!
//! Provides the JSON transport shared by the session manager and the
//! catalog/detail fetchers.
//!
//! # Features
//!
//! - **JSON Requests**: default `Content-Type`/`Accept` headers, typed decoding
//! - **Rate Limiting**: optional token bucket rate limiter using governor
//! - **Strict Status Handling**: any status of 300 or above fails the call

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
