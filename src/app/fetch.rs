//! Endpoint fetch logic

use super::App;
use crate::constants::*;
use crate::types::{DashboardState, GeoLocation, Quote, WorldTime};
use eframe::egui;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Temp-data key used to hand fetch failures to the UI thread for toasts.
pub const TOAST_KEY: &str = "fetch_toast";

/// Errors from the dashboard endpoints
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),
}

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_millis(REQUEST_TIMEOUT_MS))
        .build()
        .expect("Failed to create HTTP client")
}

async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, FetchError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.json::<T>().await?)
}

/// Run `op` up to `attempts` times, returning the first success or the
/// last error. Fixed attempt count, no delay between attempts.
async fn with_retries<T, E, F, Fut>(attempts: u32, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                warn!(attempt, error = %e, "Attempt failed, retrying");
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

fn push_toast(ctx: &egui::Context, message: &str) {
    let message = message.to_string();
    ctx.memory_mut(|mem| mem.data.insert_temp(TOAST_KEY.into(), message));
}

async fn fetch_quote(
    client: &reqwest::Client,
    tags: &str,
    state: &Arc<Mutex<DashboardState>>,
    ctx: &egui::Context,
) {
    let url = format!("{}?tags={}", QUOTE_URL, tags);
    match get_json::<Quote>(client, &url).await {
        Ok(quote) => {
            debug!(author = %quote.author, "Quote received");
            state.lock().unwrap().quote.resolve(quote);
        }
        Err(e) => {
            warn!(url = %url, error = %e, "Failed to retrieve quote");
            state.lock().unwrap().quote.fail(e.to_string());
            push_toast(ctx, "Couldn't fetch a new quote");
        }
    }
    ctx.request_repaint();
}

async fn fetch_location(
    client: &reqwest::Client,
    state: &Arc<Mutex<DashboardState>>,
    ctx: &egui::Context,
) {
    match get_json::<GeoLocation>(client, GEOLOCATION_URL).await {
        Ok(location) => {
            debug!(city = %location.city, country = %location.country_code, "Location received");
            state.lock().unwrap().location.resolve(location);
        }
        Err(e) => {
            // Ad-blockers and strict resolvers commonly kill this endpoint
            warn!(url = GEOLOCATION_URL, error = %e, "Failed to retrieve location");
            state.lock().unwrap().location.fail(e.to_string());
            push_toast(ctx, "Couldn't determine your location");
        }
    }
    ctx.request_repaint();
}

async fn fetch_time(
    client: &reqwest::Client,
    state: &Arc<Mutex<DashboardState>>,
    ctx: &egui::Context,
) {
    let result = with_retries(TIME_FETCH_ATTEMPTS, |_| {
        get_json::<WorldTime>(client, WORLD_TIME_URL)
    })
    .await;

    match result {
        Ok(time) => {
            debug!(timezone = %time.timezone, abbreviation = %time.abbreviation, "Time received");
            let mut s = state.lock().unwrap();
            s.time.resolve(time);
            s.time_received = Some(Instant::now());
        }
        Err(e) => {
            warn!(url = WORLD_TIME_URL, error = %e, "Failed to retrieve time data");
            state.lock().unwrap().time.fail(e.to_string());
            push_toast(ctx, "Couldn't fetch time data");
        }
    }
    ctx.request_repaint();
}

impl App {
    /// Kick off all three endpoint fetches. The calls are independent and
    /// run concurrently; each slot resolves on its own.
    pub fn start_initial_fetch(&mut self, ctx: &egui::Context) {
        let state = self.dashboard.clone();
        let ctx = ctx.clone();
        let tags = self.quote_tags.clone();

        info!("Starting dashboard fetch");
        {
            let mut s = state.lock().unwrap();
            s.quote.begin();
            s.location.begin();
            s.time.begin();
        }

        self.runtime.spawn(async move {
            let client = http_client();
            futures::future::join3(
                fetch_quote(&client, &tags, &state, &ctx),
                fetch_location(&client, &state, &ctx),
                fetch_time(&client, &state, &ctx),
            )
            .await;
            info!("Dashboard fetch complete");
        });
    }

    /// Re-fetch only the quote. Wired to the refresh button.
    pub fn refresh_quote(&mut self, ctx: &egui::Context) {
        let state = self.dashboard.clone();
        let ctx = ctx.clone();
        let tags = self.quote_tags.clone();

        state.lock().unwrap().quote.begin();
        ctx.request_repaint();

        self.runtime.spawn(async move {
            let client = http_client();
            fetch_quote(&client, &tags, &state, &ctx).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn first_success_uses_one_attempt() {
        let calls = AtomicU32::new(0);
        let result: Result<&str, String> = with_retries(3, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok("ok") }
        })
        .await;
        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> = with_retries(3, |attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt < 3 {
                    Err("transient".to_string())
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausted_attempts_return_last_error() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = with_retries(3, |attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Err(format!("failure {}", attempt)) }
        })
        .await;
        assert_eq!(result.unwrap_err(), "failure 3");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
