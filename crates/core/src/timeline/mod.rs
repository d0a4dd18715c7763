//! Display-synced frame scheduling.
//!
//! A frame callback is expressed as a handle: whoever requested it runs its
//! tick when the handle comes due and requests a new one to keep going.
//! Cancelling the stored handle stops the loop.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Opaque token for one pending frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Host frame scheduler (`requestAnimationFrame` in a browser).
pub trait FrameScheduler {
    /// Schedules a callback for the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Drops a pending callback. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Frame scheduler ticking at a fixed refresh rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval_seconds: f32,
    now_seconds: f32,
    frame_index: u64,
    next_id: u64,
    pending: BTreeSet<FrameHandle>,
}

/// Result of one [`FrameClock::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTick {
    pub index: u64,
    pub time_seconds: f32,
    /// Callbacks that were pending when the frame began, in request order.
    pub due: Vec<FrameHandle>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60.0)
    }
}

impl FrameClock {
    pub fn new(refresh_rate_hz: f32) -> Self {
        Self {
            interval_seconds: 1.0 / refresh_rate_hz.max(1.0),
            now_seconds: 0.0,
            frame_index: 0,
            next_id: 1,
            pending: BTreeSet::new(),
        }
    }

    pub fn interval_seconds(&self) -> f32 {
        self.interval_seconds
    }

    pub fn now_seconds(&self) -> f32 {
        self.now_seconds
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Moves to the next refresh and hands back every callback that was due.
    /// Requests made while handling these belong to the following frame.
    pub fn advance(&mut self) -> FrameTick {
        self.frame_index += 1;
        self.now_seconds = self.frame_index as f32 * self.interval_seconds;
        let due = std::mem::take(&mut self.pending).into_iter().collect();
        FrameTick {
            index: self.frame_index,
            time_seconds: self.now_seconds,
            due,
        }
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.remove(&handle);
    }
}
