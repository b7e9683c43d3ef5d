use std::rc::Rc;

/// Vertical extent of a section in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// The window the scroll core reads geometry from and writes offsets to.
pub trait Viewport {
    fn scroll_y(&self) -> f64;

    fn scroll_to(&self, y: f64);

    fn height(&self) -> f64;

    /// Largest reachable scroll offset; zero when the page fits the window.
    fn max_scroll(&self) -> f64;

    /// Resolves a section id. `None` when nothing with that id is mounted.
    fn section_rect(&self, id: &str) -> Option<SectionRect>;

    /// Offset of a section's top edge from the document origin.
    fn document_top(&self, id: &str) -> Option<f64> {
        self.section_rect(id).map(|rect| rect.top + self.scroll_y())
    }
}

/// Opaque id of a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// One-shot "run this on the next rendered frame" primitive.
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle>;

    fn cancel_frame(&self, handle: FrameHandle);
}

/// Source of scroll and resize notifications. Listening lasts as long as the
/// returned guard.
pub trait ScrollEvents {
    type Guard;

    fn listen(&self, handler: Rc<dyn Fn()>) -> Self::Guard;
}

/// Whether an element overlaps the viewport once `margin` is shaved off
/// both edges.
pub fn in_view(rect: SectionRect, viewport_height: f64, margin: f64) -> bool {
    rect.top < viewport_height - margin && rect.bottom > margin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_both_edges() {
        let rect = SectionRect { top: 100.0, bottom: 300.0 };
        assert!(rect.contains(100.0));
        assert!(rect.contains(300.0));
        assert!(!rect.contains(99.9));
        assert!(!rect.contains(300.1));
    }

    #[test]
    fn in_view_respects_margin() {
        let height = 800.0;
        // Top edge just entered the window but not past the margin.
        assert!(!in_view(SectionRect { top: 750.0, bottom: 1500.0 }, height, 100.0));
        assert!(in_view(SectionRect { top: 650.0, bottom: 1500.0 }, height, 100.0));
        // Almost scrolled past.
        assert!(!in_view(SectionRect { top: -900.0, bottom: 80.0 }, height, 100.0));
        assert!(in_view(SectionRect { top: -900.0, bottom: 120.0 }, height, 100.0));
    }
}
