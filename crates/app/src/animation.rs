//! Stat counter animation.

/// Interval between counter frames.
pub const FRAME_MS: u64 = 16;

/// Counts from zero up to `target` in equal steps, one per frame, finishing
/// after roughly `duration_ms`.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: u64) -> Self {
        let frames = (duration_ms as f64 / FRAME_MS as f64).max(1.0);
        Self {
            target,
            step: target / frames,
            current: 0.0,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    /// Move one frame forward and return the new value, clamped to the
    /// target.
    pub fn advance(&mut self) -> f64 {
        self.current += self.step;
        if self.current >= self.target || self.step <= 0.0 {
            self.current = self.target;
        }
        self.current
    }
}

/// Counter text: one decimal for fractional stats, floored otherwise.
pub fn format_counter(value: f64, decimal: bool) -> String {
    if decimal {
        format!("{:.1}", value)
    } else {
        format!("{}", value.floor() as i64)
    }
}

/// Sleep for `ms` in the browser. Other targets have no frame timer; there
/// the counters render their final value and this returns at once.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ms;
}
