//! Resilient outbound HTTP for drydock tooling.
//!
//! [`RetryingFetcher`] performs a GET with bounded
//! exponential-backoff-with-jitter retry ([`backoff`]), treating connect
//! errors, timeouts, and non-2xx statuses as transient.

pub mod backoff;
pub mod error;
pub mod fetch;

pub use backoff::backoff;
pub use error::FetchError;
pub use fetch::{
    DEFAULT_RETRIES, DEFAULT_TIMEOUT, FetchResponse, HttpTransport, ReqwestTransport,
    RetryingFetcher,
};
