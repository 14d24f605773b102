use std::time::Duration;

use crate::backoff::backoff;
use crate::error::FetchError;

/// Per-attempt timeout used when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);

/// Retry budget used when the caller does not pick one.
pub const DEFAULT_RETRIES: u32 = 3;

/// Body and status of a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

/// One GET attempt.
///
/// Production code uses [`ReqwestTransport`], tests use mockall-generated
/// mocks.
#[allow(async_fn_in_trait)]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, timeout: Duration) -> Result<FetchResponse, FetchError>;
}

/// reqwest-backed transport. A non-2xx status is a failure.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, timeout: Duration) -> Result<FetchResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_owned(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Request {
            url: url.to_owned(),
            source: e,
        })?;

        Ok(FetchResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// GET with bounded exponential-backoff retry.
///
/// Every transport failure (connect error, timeout, non-2xx status) is
/// treated as transient: while waits remain on the [`backoff`] schedule the
/// fetcher sleeps and tries again, otherwise the last error propagates
/// unmodified. A success short-circuits the rest of the schedule, so total
/// attempts never exceed `retries + 1`. Invocations share no state;
/// concurrent fetches back off independently.
pub struct RetryingFetcher<T: HttpTransport = ReqwestTransport> {
    transport: T,
}

impl RetryingFetcher<ReqwestTransport> {
    pub fn new() -> Self {
        Self {
            transport: ReqwestTransport::new(),
        }
    }
}

impl Default for RetryingFetcher<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> RetryingFetcher<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch `url`, retrying up to `retries` times on transient failure.
    pub async fn get(
        &self,
        url: &str,
        timeout: Duration,
        retries: u32,
    ) -> Result<FetchResponse, FetchError> {
        let mut result = self.transport.get(url, timeout).await;

        for wait in backoff(retries) {
            match &result {
                Ok(_) => break,
                // A zero wait is the "no retries" schedule: give up now.
                Err(_) if wait.is_zero() => break,
                Err(error) => {
                    tracing::warn!(
                        url,
                        %error,
                        wait_secs = wait.as_secs_f64(),
                        "fetch failed, will retry"
                    );
                    tokio::time::sleep(wait).await;
                    result = self.transport.get(url, timeout).await;
                }
            }
        }

        result
    }
}
