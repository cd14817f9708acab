//! Scroll-proximity detection for infinite paging.
//!
//! The detector watches a scroll position signal and asks for the next page
//! when the consumer is near the end of rendered content. Evaluation is
//! rate-limited by a timestamp guard rather than a timer, so fast scrolling
//! costs at most one check per interval.

use std::time::{Duration, Instant};

use super::state::ListState;

/// Snapshot of the consumer's scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Height of the visible viewport
    pub viewport_height: f64,
    /// Distance scrolled from the top
    pub scroll_top: f64,
    /// Total height of the rendered content
    pub content_height: f64,
}

impl ScrollMetrics {
    /// Whether the viewport bottom is within `threshold` of the content end.
    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.viewport_height + self.scroll_top >= self.content_height - threshold
    }
}

/// Throttled detector deciding when to request the next page.
///
/// Owned by the consumer view alongside its controller; dropping it with the
/// view detaches the signal.
#[derive(Debug)]
pub struct ScrollTrigger {
    threshold: f64,
    interval: Duration,
    last_eval: Option<Instant>,
}

impl ScrollTrigger {
    /// Distance from the content end, in scroll units, that counts as "near".
    pub const DEFAULT_THRESHOLD: f64 = 100.0;
    /// Minimum time between evaluations.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self::with(Self::DEFAULT_THRESHOLD, Self::DEFAULT_INTERVAL)
    }

    pub fn with(threshold: f64, interval: Duration) -> Self {
        Self {
            threshold,
            interval,
            last_eval: None,
        }
    }

    /// Evaluate the scroll signal against the controller state.
    ///
    /// Returns true when the next page should be fetched. Never fires while a
    /// fetch is in flight or after the last page was reached, and evaluates
    /// at most once per interval.
    pub fn should_fetch<T>(&mut self, metrics: ScrollMetrics, state: &ListState<T>) -> bool {
        self.should_fetch_at(Instant::now(), metrics, state)
    }

    pub(crate) fn should_fetch_at<T>(
        &mut self,
        now: Instant,
        metrics: ScrollMetrics,
        state: &ListState<T>,
    ) -> bool {
        if let Some(last) = self.last_eval
            && now.duration_since(last) < self.interval
        {
            return false;
        }
        self.last_eval = Some(now);

        if state.is_loading || state.is_last_page {
            return false;
        }
        metrics.near_bottom(self.threshold)
    }
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new()
    }
}
