use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};

use super::animator::{AnimationToken, ScrollAnimator};
use super::coalesce::FrameCoalescer;
use super::easing::ease_in_out_cubic;
use super::tracker::SectionTracker;
use super::viewport::{FrameScheduler, ScrollEvents, Viewport};
use crate::config::ScrollConfig;

/// What the navigation chrome renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationSnapshot {
    pub active_section: String,
    pub menu_open: bool,
    pub scrolled: bool,
    pub show_back_to_top: bool,
    /// Fraction of the page scrolled through, in `[0, 1]`.
    pub progress: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationState {
    Idle,
    Animating(AnimationToken),
}

type Subscriber = Rc<dyn Fn(&NavigationSnapshot)>;

/// Owns the animator, the section tracker and the mobile menu flag for one
/// page. Navigation actions preempt each other: a new action replaces any
/// animation still in flight.
pub struct NavigationController<V, S> {
    animator: ScrollAnimator<V, S>,
    tracker: RefCell<SectionTracker>,
    config: ScrollConfig,
    menu_open: Cell<bool>,
    last_token: Cell<Option<AnimationToken>>,
    coalescer: FrameCoalescer,
    snapshot: RefCell<NavigationSnapshot>,
    subscriber: RefCell<Option<Subscriber>>,
}

/// Keeps the controller wired to scroll and resize events. Dropping it
/// removes the listeners, drops any queued refresh and stops any running
/// animation.
pub struct NavigationMount<G> {
    _guard: G,
    on_drop: Option<Box<dyn FnOnce()>>,
}

impl<G> Drop for NavigationMount<G> {
    fn drop(&mut self) {
        if let Some(detach) = self.on_drop.take() {
            detach();
        }
    }
}

impl<V, S> NavigationController<V, S>
where
    V: Viewport + 'static,
    S: FrameScheduler + 'static,
{
    pub fn new<I, T>(viewport: V, frames: S, sections: I, config: ScrollConfig) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tracker = SectionTracker::new(sections, config.probe_offset);
        let snapshot = NavigationSnapshot {
            active_section: tracker.active().to_string(),
            menu_open: false,
            scrolled: false,
            show_back_to_top: false,
            progress: 0.0,
        };

        Self {
            animator: ScrollAnimator::new(viewport, frames),
            tracker: RefCell::new(tracker),
            config,
            menu_open: Cell::new(false),
            last_token: Cell::new(None),
            coalescer: FrameCoalescer::new(),
            snapshot: RefCell::new(snapshot),
            subscriber: RefCell::new(None),
        }
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn active_section(&self) -> String {
        self.tracker.borrow().active().to_string()
    }

    pub fn state(&self) -> NavigationState {
        match self.last_token.get() {
            Some(token) if self.animator.is_animating() && self.animator.is_current(token) => {
                NavigationState::Animating(token)
            }
            _ => NavigationState::Idle,
        }
    }

    /// Closes the mobile menu and scrolls to the section, leaving room for the
    /// fixed navigation bar. Unknown ids only close the menu.
    pub fn go_to_section(&self, id: &str) -> Option<AnimationToken> {
        self.close_menu();
        let token = self.animator.animate_scroll_to_element_id(
            id,
            self.config.navigation_duration_ms,
            self.config.nav_offset,
            ease_in_out_cubic,
        )?;

        info!("navigating to #{}", id);
        self.last_token.set(Some(token));
        Some(token)
    }

    pub fn go_to_top(&self) -> AnimationToken {
        self.close_menu();
        let token = self
            .animator
            .animate_scroll_to_top(self.config.navigation_duration_ms, ease_in_out_cubic);

        info!("navigating to top");
        self.last_token.set(Some(token));
        token
    }

    pub fn toggle_menu(&self) {
        self.menu_open.set(!self.menu_open.get());
        self.publish();
    }

    pub fn close_menu(&self) {
        if self.menu_open.replace(false) {
            self.publish();
        }
    }

    /// Registers the single listener notified whenever the snapshot changes.
    pub fn subscribe(&self, subscriber: impl Fn(&NavigationSnapshot) + 'static) {
        *self.subscriber.borrow_mut() = Some(Rc::new(subscriber));
    }

    pub fn unsubscribe(&self) {
        self.subscriber.borrow_mut().take();
    }

    /// Re-reads scroll position and section geometry right away.
    pub fn refresh(&self) {
        self.tracker.borrow_mut().evaluate(self.animator.viewport());
        self.publish();
    }

    /// Entry point for raw scroll and resize events: coalesces them into at
    /// most one [`refresh`](Self::refresh) per frame.
    pub fn request_refresh(self: &Rc<Self>) -> bool {
        let controller = Rc::downgrade(self);
        self.coalescer.schedule(self.animator.frames(), move |_| {
            if let Some(controller) = controller.upgrade() {
                controller.refresh();
            }
        })
    }

    /// Attaches to `events` and evaluates once immediately.
    pub fn mount<E: ScrollEvents>(self: &Rc<Self>, events: &E) -> NavigationMount<E::Guard> {
        let handler = {
            let controller = Rc::downgrade(self);
            Rc::new(move || {
                if let Some(controller) = controller.upgrade() {
                    controller.request_refresh();
                }
            })
        };
        let guard = events.listen(handler);
        self.refresh();
        debug!("navigation mounted");

        let controller = Rc::downgrade(self);
        NavigationMount {
            _guard: guard,
            on_drop: Some(Box::new(move || {
                if let Some(controller) = controller.upgrade() {
                    controller.detach();
                }
            })),
        }
    }

    fn detach(&self) {
        self.unsubscribe();
        self.coalescer.cancel(self.animator.frames());
        self.animator.cancel();
        debug!("navigation detached");
    }

    fn compute_snapshot(&self) -> NavigationSnapshot {
        let viewport = self.animator.viewport();
        let offset = viewport.scroll_y();
        let max_scroll = viewport.max_scroll();
        let progress = if max_scroll > 0.0 {
            (offset / max_scroll).clamp(0.0, 1.0)
        } else {
            0.0
        };

        NavigationSnapshot {
            active_section: self.tracker.borrow().active().to_string(),
            menu_open: self.menu_open.get(),
            scrolled: offset > self.config.scrolled_threshold,
            show_back_to_top: offset > self.config.back_to_top_threshold,
            progress,
        }
    }

    fn publish(&self) {
        let next = self.compute_snapshot();
        if *self.snapshot.borrow() == next {
            return;
        }
        *self.snapshot.borrow_mut() = next.clone();

        let subscriber = self.subscriber.borrow().clone();
        if let Some(subscriber) = subscriber {
            subscriber(&next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::testing::{FakeEvents, FakeViewport, ManualFrames};

    const REGISTRY: [&str; 3] = ["top", "about", "contact"];

    struct Fixture {
        viewport: FakeViewport,
        frames: ManualFrames,
        controller: Rc<NavigationController<FakeViewport, ManualFrames>>,
    }

    fn fixture() -> Fixture {
        let viewport = FakeViewport::stacked(&REGISTRY, 800.0, 800.0);
        let frames = ManualFrames::default();
        let controller = Rc::new(NavigationController::new(
            viewport.clone(),
            frames.clone(),
            REGISTRY,
            ScrollConfig::default(),
        ));
        Fixture {
            viewport,
            frames,
            controller,
        }
    }

    #[test]
    fn starts_idle_on_first_section() {
        let f = fixture();
        assert_eq!(f.controller.active_section(), "top");
        assert_eq!(f.controller.state(), NavigationState::Idle);
        assert!(!f.controller.snapshot().menu_open);
    }

    #[test]
    fn go_to_section_closes_menu_and_animates() {
        let f = fixture();
        f.controller.toggle_menu();
        assert!(f.controller.snapshot().menu_open);

        let token = f.controller.go_to_section("contact").expect("contact is mounted");
        assert!(!f.controller.snapshot().menu_open);
        assert_eq!(f.controller.state(), NavigationState::Animating(token));

        f.frames.run(0.0, 1_000.0, 16.0);
        f.frames.tick(1_016.0);
        assert_eq!(f.viewport.scroll_y(), 1_520.0);
        assert_eq!(f.controller.state(), NavigationState::Idle);
    }

    #[test]
    fn unknown_section_closes_menu_only() {
        let f = fixture();
        f.controller.toggle_menu();

        assert!(f.controller.go_to_section("careers").is_none());
        assert!(!f.controller.snapshot().menu_open);
        assert_eq!(f.controller.state(), NavigationState::Idle);
        assert_eq!(f.frames.pending(), 0);
    }

    #[test]
    fn later_action_preempts_earlier() {
        let f = fixture();
        let first = f.controller.go_to_section("contact").expect("mounted");
        f.frames.run(0.0, 300.0, 16.0);

        let second = f.controller.go_to_top();
        assert_eq!(f.controller.state(), NavigationState::Animating(second));
        assert_ne!(f.controller.state(), NavigationState::Animating(first));

        f.frames.run(304.0, 2_000.0, 16.0);
        assert_eq!(f.viewport.scroll_y(), 0.0);
    }

    #[test]
    fn scroll_events_coalesce_into_one_refresh() {
        let f = fixture();
        let events = FakeEvents::default();
        let _mount = f.controller.mount(&events);

        f.viewport.set_scroll(850.0);
        for _ in 0..5 {
            events.emit();
        }
        assert_eq!(f.frames.pending(), 1);
        assert_eq!(f.controller.active_section(), "top");

        f.frames.tick(16.0);
        assert_eq!(f.controller.active_section(), "about");
        let snapshot = f.controller.snapshot();
        assert!(snapshot.scrolled);
        assert!(snapshot.show_back_to_top);
        assert!((snapshot.progress - 850.0 / 1_600.0).abs() < 1e-9);
    }

    #[test]
    fn subscriber_sees_only_changes() {
        let f = fixture();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            f.controller
                .subscribe(move |snapshot| seen.borrow_mut().push(snapshot.active_section.clone()));
        }

        f.controller.refresh();
        assert!(seen.borrow().is_empty());

        f.viewport.set_scroll(1_600.0);
        f.controller.refresh();
        f.controller.refresh();
        assert_eq!(*seen.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn mount_evaluates_immediately() {
        let f = fixture();
        f.viewport.set_scroll(900.0);
        let events = FakeEvents::default();
        let _mount = f.controller.mount(&events);
        assert_eq!(f.controller.active_section(), "about");
    }

    #[test]
    fn unmount_removes_listeners_and_stops_animation() {
        let f = fixture();
        let events = FakeEvents::default();
        let mount = f.controller.mount(&events);
        assert_eq!(events.listeners(), 1);

        f.controller.go_to_section("contact");
        f.frames.tick(0.0);
        f.frames.tick(100.0);
        let stopped_at = f.viewport.scroll_y();

        // A scroll event queues a refresh that must not outlive the mount.
        f.viewport.set_scroll(900.0);
        events.emit();
        assert_eq!(f.frames.pending(), 2);
        drop(mount);

        assert_eq!(events.listeners(), 0);
        assert_eq!(f.frames.pending(), 0);
        events.emit();
        f.frames.run(200.0, 2_000.0, 16.0);
        assert_eq!(f.viewport.scroll_y(), 900.0);
        assert_ne!(stopped_at, 900.0);
        assert_eq!(f.controller.active_section(), "top");
        assert_eq!(f.controller.state(), NavigationState::Idle);
    }

    #[test]
    fn navigation_uses_configured_duration() {
        let viewport = FakeViewport::stacked(&REGISTRY, 800.0, 800.0);
        let frames = ManualFrames::default();
        let config = ScrollConfig {
            navigation_duration_ms: 400.0,
            ..ScrollConfig::default()
        };
        let controller = NavigationController::new(viewport.clone(), frames.clone(), REGISTRY, config);

        let token = controller.go_to_section("about").expect("about is mounted");
        frames.run(0.0, 384.0, 16.0);
        assert_eq!(controller.state(), NavigationState::Animating(token));
        assert!(viewport.scroll_y() < 720.0);

        frames.tick(400.0);
        assert_eq!(viewport.scroll_y(), 720.0);
        assert_eq!(controller.state(), NavigationState::Idle);
    }

    #[test]
    fn progress_is_zero_when_page_cannot_scroll() {
        let viewport = FakeViewport::stacked(&["top"], 600.0, 800.0);
        let controller = NavigationController::new(
            viewport,
            ManualFrames::default(),
            ["top"],
            ScrollConfig::default(),
        );
        controller.refresh();
        assert_eq!(controller.snapshot().progress, 0.0);
    }
}
