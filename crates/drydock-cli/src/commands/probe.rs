use std::time::Duration;

use drydock_net::RetryingFetcher;

pub async fn probe(url: &str, timeout: u64, retries: u32) -> anyhow::Result<()> {
    let fetcher = RetryingFetcher::new();
    let response = fetcher
        .get(url, Duration::from_secs(timeout), retries)
        .await?;

    tracing::info!(url, status = response.status, "probe succeeded");
    print!("{}", response.body);

    Ok(())
}
