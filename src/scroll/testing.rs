//! In-memory stand-ins for the browser window and its frame clock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::viewport::{
    FrameCallback, FrameHandle, FrameScheduler, ScrollEvents, SectionRect, Viewport,
};

#[derive(Default)]
struct ViewportState {
    scroll: Cell<f64>,
    height: f64,
    document_height: f64,
    sections: RefCell<Vec<(String, f64, f64)>>,
    writes: RefCell<Vec<f64>>,
}

/// A window over a document of fixed height, with sections placed in
/// document coordinates. Clones share state.
#[derive(Clone, Default)]
pub struct FakeViewport {
    state: Rc<ViewportState>,
}

impl FakeViewport {
    pub fn new(height: f64, document_height: f64) -> Self {
        Self {
            state: Rc::new(ViewportState {
                height,
                document_height,
                ..Default::default()
            }),
        }
    }

    /// Stacks one section per id, each `section_height` tall, from the origin.
    pub fn stacked(ids: &[&str], section_height: f64, height: f64) -> Self {
        let viewport = Self::new(height, section_height * ids.len() as f64);
        for (i, id) in ids.iter().enumerate() {
            viewport.place(id, i as f64 * section_height, section_height);
        }
        viewport
    }

    pub fn place(&self, id: &str, document_top: f64, section_height: f64) {
        self.state
            .sections
            .borrow_mut()
            .push((id.to_string(), document_top, section_height));
    }

    pub fn remove(&self, id: &str) {
        self.state.sections.borrow_mut().retain(|(name, _, _)| name != id);
    }

    /// Jumps without recording a write, like a user dragging the scrollbar.
    pub fn set_scroll(&self, y: f64) {
        self.state.scroll.set(y);
    }

    pub fn writes(&self) -> Vec<f64> {
        self.state.writes.borrow().clone()
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.state.scroll.get()
    }

    fn scroll_to(&self, y: f64) {
        let clamped = y.clamp(0.0, self.max_scroll());
        self.state.writes.borrow_mut().push(clamped);
        self.state.scroll.set(clamped);
    }

    fn height(&self) -> f64 {
        self.state.height
    }

    fn max_scroll(&self) -> f64 {
        (self.state.document_height - self.state.height).max(0.0)
    }

    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        let scroll = self.scroll_y();
        self.state
            .sections
            .borrow()
            .iter()
            .find(|(name, _, _)| name == id)
            .map(|(_, top, height)| SectionRect {
                top: top - scroll,
                bottom: top + height - scroll,
            })
    }
}

#[derive(Default)]
struct FrameQueue {
    next_id: Cell<i32>,
    pending: RefCell<Vec<(i32, FrameCallback)>>,
    requested: Cell<usize>,
}

/// A frame clock that only advances when a test calls [`ManualFrames::tick`].
#[derive(Clone, Default)]
pub struct ManualFrames {
    queue: Rc<FrameQueue>,
}

impl ManualFrames {
    /// Runs every callback queued before this call with `timestamp`.
    pub fn tick(&self, timestamp: f64) {
        let due = std::mem::take(&mut *self.queue.pending.borrow_mut());
        for (_, callback) in due {
            callback(timestamp);
        }
    }

    /// Ticks from `start` to `end` inclusive in `step` increments.
    pub fn run(&self, start: f64, end: f64, step: f64) {
        let mut now = start;
        while now <= end {
            self.tick(now);
            now += step;
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.pending.borrow().len()
    }

    pub fn requested(&self) -> usize {
        self.queue.requested.get()
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let id = self.queue.next_id.get() + 1;
        self.queue.next_id.set(id);
        self.queue.requested.set(self.queue.requested.get() + 1);
        self.queue.pending.borrow_mut().push((id, callback));
        Some(FrameHandle(id))
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.queue
            .pending
            .borrow_mut()
            .retain(|(id, _)| *id != handle.0);
    }
}

type Handlers = RefCell<Vec<(usize, Rc<dyn Fn()>)>>;

/// Scroll event source fired by hand.
#[derive(Clone, Default)]
pub struct FakeEvents {
    next_id: Rc<Cell<usize>>,
    handlers: Rc<Handlers>,
}

pub struct FakeListener {
    id: usize,
    handlers: Rc<Handlers>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        self.handlers.borrow_mut().retain(|(id, _)| *id != self.id);
    }
}

impl FakeEvents {
    pub fn emit(&self) {
        let handlers: Vec<_> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler();
        }
    }

    pub fn listeners(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl ScrollEvents for FakeEvents {
    type Guard = FakeListener;

    fn listen(&self, handler: Rc<dyn Fn()>) -> FakeListener {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.handlers.borrow_mut().push((id, handler));
        FakeListener {
            id,
            handlers: self.handlers.clone(),
        }
    }
}
