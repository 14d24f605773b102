use std::time::Duration;

/// Waits inserted before each retry: the n-th (1-indexed) falls in
/// `[2^n, 2^n + 1)` seconds, exponential growth plus sub-second jitter.
///
/// `backoff(0)` is a single zero wait, which the retry loop reads as "one
/// attempt, give up immediately". The schedule is finite and fully
/// materialized; nothing about it changes between building it and walking
/// it.
pub fn backoff(retries: u32) -> Vec<Duration> {
    if retries == 0 {
        return vec![Duration::ZERO];
    }
    (1..=retries)
        .map(|n| Duration::from_secs_f64(2f64.powi(n as i32) + rand::random::<f64>()))
        .collect()
}
