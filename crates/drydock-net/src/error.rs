#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection failure, timeout, or another transport-level error.
    #[error("GET {url} failed")]
    Request { url: String, source: reqwest::Error },

    /// The server answered, but not with a success status.
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}
