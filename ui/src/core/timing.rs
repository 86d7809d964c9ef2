//! Timer helpers shared by the auto-advancing widgets.

/// Sleep without blocking the UI thread.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Sleep without blocking the UI thread.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Current calendar year (UTC), for the footer copyright line.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
