use std::cell::Cell;
use std::rc::Rc;

use super::viewport::{FrameHandle, FrameScheduler};

/// Folds bursts of events into at most one frame callback. An event that
/// arrives while a callback is pending is dropped, not queued.
#[derive(Clone, Default)]
pub struct FrameCoalescer {
    pending: Rc<Cell<Option<FrameHandle>>>,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Schedules `work` for the next frame unless one is already queued.
    /// Returns whether this call scheduled anything.
    pub fn schedule<S, F>(&self, frames: &S, work: F) -> bool
    where
        S: FrameScheduler + ?Sized,
        F: FnOnce(f64) + 'static,
    {
        if self.pending.get().is_some() {
            return false;
        }

        let pending = self.pending.clone();
        let Some(handle) = frames.request_frame(Box::new(move |now| {
            pending.set(None);
            work(now);
        })) else {
            return false;
        };

        self.pending.set(Some(handle));
        true
    }

    /// Drops the queued callback, if any. The next `schedule` arms again.
    pub fn cancel<S: FrameScheduler + ?Sized>(&self, frames: &S) {
        if let Some(handle) = self.pending.take() {
            frames.cancel_frame(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::testing::ManualFrames;
    use std::cell::RefCell;

    #[test]
    fn burst_runs_once_per_frame() {
        let frames = ManualFrames::default();
        let gate = FrameCoalescer::new();
        let runs = Rc::new(RefCell::new(Vec::new()));

        for _ in 0..10 {
            let runs = runs.clone();
            gate.schedule(&frames, move |now| runs.borrow_mut().push(now));
        }
        assert_eq!(frames.pending(), 1);
        assert!(gate.is_pending());

        frames.tick(16.0);
        assert_eq!(*runs.borrow(), vec![16.0]);
        assert!(!gate.is_pending());
    }

    #[test]
    fn rearms_after_frame() {
        let frames = ManualFrames::default();
        let gate = FrameCoalescer::new();
        let count = Rc::new(Cell::new(0));

        for now in [16.0, 32.0, 48.0] {
            let first = count.clone();
            let second = count.clone();
            assert!(gate.schedule(&frames, move |_| first.set(first.get() + 1)));
            assert!(!gate.schedule(&frames, move |_| second.set(second.get() + 1)));
            frames.tick(now);
        }
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn cancel_drops_queued_work_and_rearms() {
        let frames = ManualFrames::default();
        let gate = FrameCoalescer::new();
        let count = Rc::new(Cell::new(0));

        let first = count.clone();
        gate.schedule(&frames, move |_| first.set(first.get() + 1));
        gate.cancel(&frames);
        assert!(!gate.is_pending());
        assert_eq!(frames.pending(), 0);

        frames.tick(16.0);
        assert_eq!(count.get(), 0);

        let second = count.clone();
        assert!(gate.schedule(&frames, move |_| second.set(second.get() + 1)));
        frames.tick(32.0);
        assert_eq!(count.get(), 1);

        // Nothing queued: a no-op.
        gate.cancel(&frames);
        assert_eq!(frames.pending(), 0);
    }
}
