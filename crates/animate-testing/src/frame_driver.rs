use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use animate_core::{Runtime, RuntimeHandle, RuntimeScheduler};

const NANOS_PER_MILLI: u64 = 1_000_000;
pub const DEFAULT_FRAME_INTERVAL_MILLIS: u64 = 16;

#[derive(Default)]
struct RecordingScheduler {
    requests: AtomicUsize,
}

impl RuntimeScheduler for RecordingScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

/// Runtime plus a manual clock.
///
/// Time only moves when the test asks it to. Every `advance_*` call drains
/// the frame callbacks at the new time, so animations observe exactly the
/// timestamps the test chose.
pub struct FrameDriver {
    runtime: Runtime,
    scheduler: Arc<RecordingScheduler>,
    now_nanos: u64,
    frame_interval_nanos: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_frame_interval_millis(DEFAULT_FRAME_INTERVAL_MILLIS)
    }

    pub fn with_frame_interval_millis(interval_millis: u64) -> Self {
        let scheduler = Arc::new(RecordingScheduler::default());
        Self {
            runtime: Runtime::new(scheduler.clone()),
            scheduler,
            now_nanos: 0,
            frame_interval_nanos: interval_millis.max(1) * NANOS_PER_MILLI,
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn now_millis(&self) -> u64 {
        self.now_nanos / NANOS_PER_MILLI
    }

    /// Drains pending frame callbacks at the current time.
    pub fn frame(&mut self) {
        self.runtime.drain_frame_callbacks(self.now_nanos);
    }

    /// Moves the clock forward one frame interval and drains.
    pub fn advance_frame(&mut self) {
        self.now_nanos += self.frame_interval_nanos;
        self.frame();
    }

    /// Steps frame by frame through `millis`. The final frame lands exactly
    /// on the requested time even when it is not a whole number of intervals.
    pub fn advance_by_millis(&mut self, millis: u64) {
        let end = self.now_nanos + millis * NANOS_PER_MILLI;
        while self.now_nanos < end {
            self.now_nanos = (self.now_nanos + self.frame_interval_nanos).min(end);
            self.frame();
        }
    }

    /// Advances frames until nothing is waiting for one, up to `max_frames`.
    /// Returns the number of frames run.
    pub fn run_until_idle(&mut self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.has_pending_frames() {
            self.advance_frame();
            frames += 1;
        }
        frames
    }

    /// Whether any frame callback is registered.
    pub fn has_pending_frames(&self) -> bool {
        self.runtime.has_frame_callbacks()
    }

    /// How many times the runtime asked for a frame.
    pub fn frame_requests(&self) -> usize {
        self.scheduler.requests.load(Ordering::SeqCst)
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn advance_by_millis_lands_on_exact_time() {
        let mut driver = FrameDriver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        fn keep_listening(handle: RuntimeHandle, seen: Rc<RefCell<Vec<u64>>>) {
            let again = handle.clone();
            handle.register_frame_callback(move |time| {
                seen.borrow_mut().push(time / NANOS_PER_MILLI);
                keep_listening(again, seen);
            });
        }
        keep_listening(driver.handle(), seen.clone());

        driver.advance_by_millis(40);
        assert_eq!(*seen.borrow(), vec![16, 32, 40]);
        assert_eq!(driver.now_millis(), 40);
    }

    #[test]
    fn run_until_idle_stops_when_no_callbacks_remain() {
        let mut driver = FrameDriver::new();
        driver.handle().register_frame_callback(|_| {});
        assert!(driver.has_pending_frames());
        assert!(driver.frame_requests() >= 1);
        assert_eq!(driver.run_until_idle(10), 1);
        assert!(!driver.has_pending_frames());
        assert_eq!(driver.run_until_idle(10), 0);
    }
}
