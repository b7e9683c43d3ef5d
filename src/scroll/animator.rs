use std::cell::Cell;
use std::rc::{Rc, Weak};

use log::debug;

use super::easing::Easing;
use super::viewport::{FrameHandle, FrameScheduler, Viewport};

/// Identifies one started animation. Later animations carry larger tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationToken(u64);

/// Where one frame of an animation puts the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStep {
    pub offset: f64,
    pub finished: bool,
}

/// Interpolation from a start offset to a target over a fixed duration.
/// The clock starts at the first frame it is stepped with.
#[derive(Clone, Copy)]
pub struct ScrollAnimation {
    start_offset: f64,
    target_offset: f64,
    start_timestamp: Option<f64>,
    duration_ms: f64,
    easing: Easing,
}

impl ScrollAnimation {
    pub fn new(start_offset: f64, target_offset: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            start_offset,
            target_offset,
            start_timestamp: None,
            duration_ms,
            easing,
        }
    }

    fn progress(&self, elapsed: f64) -> f64 {
        // Zero, negative, NaN or infinite durations jump straight to the end.
        if !(self.duration_ms > 0.0 && self.duration_ms.is_finite()) {
            return 1.0;
        }
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn step(&mut self, now: f64) -> FrameStep {
        let started = *self.start_timestamp.get_or_insert(now);
        let progress = self.progress(now - started);

        if progress >= 1.0 {
            return FrameStep {
                offset: self.target_offset,
                finished: true,
            };
        }

        let eased = (self.easing)(progress);
        FrameStep {
            offset: self.start_offset + (self.target_offset - self.start_offset) * eased,
            finished: false,
        }
    }
}

struct AnimatorInner<V, S> {
    viewport: V,
    frames: S,
    generation: Cell<u64>,
    pending: Cell<Option<FrameHandle>>,
}

/// Drives the viewport's scroll offset one frame at a time. Only the most
/// recently started animation ever writes; older loops see a newer
/// generation and stop.
pub struct ScrollAnimator<V, S> {
    inner: Rc<AnimatorInner<V, S>>,
}

impl<V, S> ScrollAnimator<V, S>
where
    V: Viewport + 'static,
    S: FrameScheduler + 'static,
{
    pub fn new(viewport: V, frames: S) -> Self {
        Self {
            inner: Rc::new(AnimatorInner {
                viewport,
                frames,
                generation: Cell::new(0),
                pending: Cell::new(None),
            }),
        }
    }

    pub fn viewport(&self) -> &V {
        &self.inner.viewport
    }

    pub fn frames(&self) -> &S {
        &self.inner.frames
    }

    pub fn animate_scroll_to(
        &self,
        target_offset: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> AnimationToken {
        let generation = self.invalidate();
        let start = self.inner.viewport.scroll_y();
        debug!(
            "scroll animation {} from {} to {} over {}ms",
            generation, start, target_offset, duration_ms
        );

        let animation = ScrollAnimation::new(start, target_offset, duration_ms, easing);
        Self::schedule(&self.inner, generation, animation);
        AnimationToken(generation)
    }

    /// Scrolls so the section's top sits `offset` pixels below the window
    /// top. Unknown ids leave everything, including a running animation,
    /// untouched.
    pub fn animate_scroll_to_element_id(
        &self,
        id: &str,
        duration_ms: f64,
        offset: f64,
        easing: Easing,
    ) -> Option<AnimationToken> {
        let Some(document_top) = self.inner.viewport.document_top(id) else {
            debug!("no section with id '{}', not scrolling", id);
            return None;
        };
        Some(self.animate_scroll_to(document_top - offset, duration_ms, easing))
    }

    pub fn animate_scroll_to_top(&self, duration_ms: f64, easing: Easing) -> AnimationToken {
        self.animate_scroll_to(0.0, duration_ms, easing)
    }

    /// Stops whatever animation is running, leaving the offset where it is.
    pub fn cancel(&self) {
        self.invalidate();
    }

    pub fn is_animating(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    pub fn is_current(&self, token: AnimationToken) -> bool {
        self.inner.generation.get() == token.0
    }

    fn invalidate(&self) -> u64 {
        if let Some(handle) = self.inner.pending.take() {
            self.inner.frames.cancel_frame(handle);
        }
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        generation
    }

    fn schedule(inner: &Rc<AnimatorInner<V, S>>, generation: u64, mut animation: ScrollAnimation) {
        let weak: Weak<AnimatorInner<V, S>> = Rc::downgrade(inner);
        let handle = inner.frames.request_frame(Box::new(move |now| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.generation.get() != generation {
                return;
            }

            let step = animation.step(now);
            inner.viewport.scroll_to(step.offset);

            if step.finished {
                inner.pending.set(None);
                debug!("scroll animation {} landed on {}", generation, step.offset);
            } else {
                Self::schedule(&inner, generation, animation);
            }
        }));
        inner.pending.set(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::easing::{ease_in_out_cubic, ease_out_quart, linear};
    use crate::scroll::testing::{FakeViewport, ManualFrames};

    fn animator(viewport: &FakeViewport, frames: &ManualFrames) -> ScrollAnimator<FakeViewport, ManualFrames> {
        ScrollAnimator::new(viewport.clone(), frames.clone())
    }

    #[test]
    fn step_clock_starts_on_first_frame() {
        let mut animation = ScrollAnimation::new(0.0, 100.0, 1000.0, linear);
        assert_eq!(animation.step(5_000.0).offset, 0.0);
        let half = animation.step(5_500.0);
        assert!((half.offset - 50.0).abs() < 1e-9);
        assert!(!half.finished);
        assert_eq!(animation.step(6_000.0), FrameStep { offset: 100.0, finished: true });
    }

    #[test]
    fn degenerate_durations_jump_on_first_frame() {
        for duration in [0.0, -250.0, f64::NAN, f64::INFINITY] {
            let mut animation = ScrollAnimation::new(40.0, 900.0, duration, ease_in_out_cubic);
            assert_eq!(
                animation.step(12.0),
                FrameStep { offset: 900.0, finished: true },
                "duration {duration}"
            );
        }
    }

    #[test]
    fn lands_exactly_on_target_without_overshoot() {
        let viewport = FakeViewport::new(800.0, 5_000.0);
        let frames = ManualFrames::default();
        let animator = animator(&viewport, &frames);

        animator.animate_scroll_to(500.0, 1000.0, ease_in_out_cubic);
        assert!(animator.is_animating());

        frames.tick(0.0);
        assert!(viewport.scroll_y().abs() < 1e-9);

        frames.run(10.0, 1_000.0, 10.0);
        assert_eq!(viewport.scroll_y(), 500.0);
        assert!(!animator.is_animating());
        assert_eq!(frames.pending(), 0);

        let writes = viewport.writes();
        assert!(writes.iter().all(|y| (0.0..=500.0).contains(y)));
        assert!(writes.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn newer_animation_wins() {
        let viewport = FakeViewport::new(800.0, 5_000.0);
        let frames = ManualFrames::default();
        let animator = animator(&viewport, &frames);

        let first = animator.animate_scroll_to(300.0, 1000.0, ease_in_out_cubic);
        frames.run(0.0, 400.0, 16.0);
        let second = animator.animate_scroll_to(800.0, 1000.0, ease_in_out_cubic);

        assert!(second > first);
        assert!(animator.is_current(second));
        assert!(!animator.is_current(first));
        assert_eq!(frames.pending(), 1);

        frames.run(416.0, 2_500.0, 16.0);
        assert_eq!(viewport.scroll_y(), 800.0);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn stale_frame_already_dequeued_stays_inert() {
        let viewport = FakeViewport::new(800.0, 5_000.0);
        let frames = ManualFrames::default();
        let animator = animator(&viewport, &frames);

        animator.animate_scroll_to(300.0, 0.0, linear);
        // Bump the generation without letting the animator cancel the frame.
        animator.inner.pending.set(None);
        animator.animate_scroll_to(700.0, 0.0, linear);

        frames.tick(0.0);
        assert_eq!(viewport.writes(), vec![700.0]);
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let viewport = FakeViewport::stacked(&["top", "about"], 900.0, 800.0);
        viewport.set_scroll(120.0);
        let frames = ManualFrames::default();
        let animator = animator(&viewport, &frames);

        let token = animator.animate_scroll_to_element_id("missing-id", 1000.0, 80.0, ease_in_out_cubic);
        assert!(token.is_none());

        frames.tick(0.0);
        assert_eq!(viewport.scroll_y(), 120.0);
        assert_eq!(frames.requested(), 0);
        assert_eq!(frames.pending(), 0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn missing_section_does_not_interrupt_running_animation() {
        let viewport = FakeViewport::new(800.0, 5_000.0);
        let frames = ManualFrames::default();
        let animator = animator(&viewport, &frames);

        let token = animator.animate_scroll_to(600.0, 500.0, linear);
        animator.animate_scroll_to_element_id("nowhere", 500.0, 80.0, linear);
        assert!(animator.is_current(token));

        frames.run(0.0, 500.0, 50.0);
        assert_eq!(viewport.scroll_y(), 600.0);
    }

    #[test]
    fn section_target_subtracts_nav_offset() {
        let viewport = FakeViewport::new(800.0, 6_000.0);
        viewport.place("contact", 2_000.0, 700.0);
        viewport.set_scroll(300.0);
        let frames = ManualFrames::default();
        let animator = animator(&viewport, &frames);

        animator.animate_scroll_to_element_id("contact", 600.0, 80.0, ease_out_quart);
        frames.run(0.0, 600.0, 20.0);
        assert_eq!(viewport.scroll_y(), 1_920.0);
    }

    #[test]
    fn scroll_to_top_reaches_origin() {
        let viewport = FakeViewport::new(800.0, 5_000.0);
        viewport.set_scroll(1_200.0);
        let frames = ManualFrames::default();
        let animator = animator(&viewport, &frames);

        animator.animate_scroll_to_top(500.0, ease_in_out_cubic);
        frames.run(0.0, 500.0, 25.0);
        assert_eq!(viewport.scroll_y(), 0.0);
        assert!(viewport.writes().windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn cancel_freezes_offset() {
        let viewport = FakeViewport::new(800.0, 5_000.0);
        let frames = ManualFrames::default();
        let animator = animator(&viewport, &frames);

        animator.animate_scroll_to(1_000.0, 1000.0, linear);
        frames.run(0.0, 300.0, 100.0);
        let frozen = viewport.scroll_y();
        animator.cancel();

        frames.run(400.0, 2_000.0, 100.0);
        assert_eq!(viewport.scroll_y(), frozen);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn dropped_animator_leaves_loop_inert() {
        let viewport = FakeViewport::new(800.0, 5_000.0);
        let frames = ManualFrames::default();
        let animator = animator(&viewport, &frames);

        animator.animate_scroll_to(1_000.0, 1000.0, linear);
        frames.tick(0.0);
        let writes = viewport.writes().len();
        drop(animator);

        frames.run(100.0, 2_000.0, 100.0);
        assert_eq!(viewport.writes().len(), writes);
        assert_eq!(frames.pending(), 0);
    }
}
