use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::{Element, MouseEvent};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::{ScrollConfig, COUNTER_DURATION_MS, SECTION_REGISTRY};
use crate::motion::{parallax_offset, CounterAnimation};
use crate::scroll::dom::viewport_width;
use crate::scroll::{
    in_view, AnimationFrames, BrowserEvents, BrowserNavigation, BrowserViewport, FrameCoalescer,
    FrameScheduler, NavigationSnapshot, PassiveListener, SectionRect, Viewport,
};

/// Handle the page's components share through context.
#[derive(Clone)]
pub struct Navigation {
    controller: Rc<BrowserNavigation>,
    snapshot: NavigationSnapshot,
}

impl PartialEq for Navigation {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller) && self.snapshot == other.snapshot
    }
}

impl Navigation {
    pub fn snapshot(&self) -> &NavigationSnapshot {
        &self.snapshot
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.snapshot.active_section == id
    }

    pub fn go_to_section(&self, id: &str) {
        self.controller.go_to_section(id);
    }

    pub fn go_to_top(&self) {
        self.controller.go_to_top();
    }

    pub fn toggle_menu(&self) {
        self.controller.toggle_menu();
    }

    /// Click handler scrolling to `id`.
    pub fn section_link(&self, id: &'static str) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            controller.go_to_section(id);
        })
    }
}

/// Builds the page's navigation controller and keeps it attached to window
/// scroll and resize events for the lifetime of the calling component.
#[hook]
pub fn use_scroll_navigation() -> Navigation {
    let controller = use_memo(
        |_| {
            BrowserNavigation::new(
                BrowserViewport,
                AnimationFrames,
                SECTION_REGISTRY.iter().copied(),
                ScrollConfig::default(),
            )
        },
        (),
    );
    let snapshot = use_state(|| controller.snapshot());

    {
        let controller = controller.clone();
        let setter = snapshot.setter();
        use_effect_with_deps(
            move |_| {
                controller.subscribe(move |next| setter.set(next.clone()));
                let mount = controller.mount(&BrowserEvents);
                move || drop(mount)
            },
            (),
        );
    }

    Navigation {
        controller,
        snapshot: (*snapshot).clone(),
    }
}

fn element_rect(node: &NodeRef) -> Option<SectionRect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(SectionRect {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

/// Flips to `true` once the referenced element scrolls into view, and stays
/// there.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let setter = revealed.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let margin = ScrollConfig::default().reveal_margin;
                let listener: Rc<RefCell<Option<PassiveListener>>> = Rc::default();

                let check = {
                    let node = node.clone();
                    let listener = listener.clone();
                    Rc::new(move || {
                        let visible = element_rect(&node)
                            .map_or(false, |rect| in_view(rect, BrowserViewport.height(), margin));
                        if visible {
                            setter.set(true);
                            listener.borrow_mut().take();
                        }
                        visible
                    })
                };

                if !check() {
                    let gate = FrameCoalescer::new();
                    let attached = PassiveListener::on_window("scroll", move |_| {
                        let check = check.clone();
                        gate.schedule(&AnimationFrames, move |_| {
                            check();
                        });
                    });
                    *listener.borrow_mut() = attached;
                }

                move || {
                    listener.borrow_mut().take();
                }
            },
            node,
        );
    }

    *revealed
}

fn run_counter(
    animation: CounterAnimation,
    started: Option<f64>,
    setter: UseStateSetter<u32>,
    cancelled: Rc<Cell<bool>>,
) {
    AnimationFrames.request_frame(Box::new(move |now| {
        if cancelled.get() {
            return;
        }
        let started = started.unwrap_or(now);
        let (value, done) = animation.value_at(now - started);
        setter.set(value);
        if !done {
            run_counter(animation, Some(started), setter, cancelled);
        }
    }));
}

/// Counts up to `target` once `active` turns true.
#[hook]
pub fn use_count_up(target: u32, active: bool) -> u32 {
    let value = use_state(|| 0u32);

    {
        let setter = value.setter();
        use_effect_with_deps(
            move |&(target, active): &(u32, bool)| {
                let cancelled = Rc::new(Cell::new(false));
                if active {
                    let animation = CounterAnimation::new(target, COUNTER_DURATION_MS);
                    run_counter(animation, None, setter, cancelled.clone());
                }
                move || cancelled.set(true)
            },
            (target, active),
        );
    }

    *value
}

/// Grid offset following the pointer, updated at most once per frame.
/// Stays at the origin on narrow screens.
#[hook]
pub fn use_pointer_parallax() -> (f64, f64) {
    let offset = use_state(|| (0.0, 0.0));

    {
        let setter = offset.setter();
        use_effect_with_deps(
            move |_| {
                let pointer = Rc::new(Cell::new((0.0, 0.0)));
                let gate = FrameCoalescer::new();
                let listener = if viewport_width() >= ScrollConfig::default().mobile_breakpoint {
                    PassiveListener::on_window("mousemove", move |event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            pointer.set((f64::from(event.client_x()), f64::from(event.client_y())));
                        }
                        let pointer = pointer.clone();
                        let setter = setter.clone();
                        gate.schedule(&AnimationFrames, move |_| {
                            let (x, y) = pointer.get();
                            setter.set(parallax_offset(x, y));
                        });
                    })
                } else {
                    None
                };
                move || drop(listener)
            },
            (),
        );
    }

    *offset
}
