//! Per-frame context handed from the host loop to the screen.
//!
//! The screen never reads window or timing state on its own; the loop in
//! `main.rs` builds a [`FrameContext`] once per tick and passes it down.

use std::time::Duration;

/// Logical window dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        WindowSize { width, height }
    }
}

/// Everything a single tick needs to know about the host
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Number of frames rendered before this one
    pub frame_index: u64,
    pub window: WindowSize,
    /// Wall time since the previous tick
    pub elapsed: Duration,
}

impl FrameContext {
    pub fn new(frame_index: u64, window: WindowSize, elapsed: Duration) -> Self {
        FrameContext {
            frame_index,
            window,
            elapsed,
        }
    }

    pub fn is_even(&self) -> bool {
        self.frame_index % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_parity() {
        let window = WindowSize::new(800, 600);
        assert!(FrameContext::new(0, window, Duration::ZERO).is_even());
        assert!(!FrameContext::new(1, window, Duration::ZERO).is_even());
        assert!(FrameContext::new(42, window, Duration::ZERO).is_even());
    }
}
