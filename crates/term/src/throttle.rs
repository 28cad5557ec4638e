//! Frame throttle: skip redraws when nothing visible changed.

/// Default interval between forced refreshes of an unchanged frame.
pub const DEFAULT_REFRESH_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct FrameThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl FrameThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders on the first call, whenever `fingerprint` changes, and otherwise at
    /// most once per refresh interval.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms;
        if !changed && !stale {
            return false;
        }

        self.last_render_ms = now_ms;
        self.last_fingerprint = Some(fingerprint);
        true
    }

    /// Force the next call to render (e.g. after a resize).
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_MS)
    }
}
