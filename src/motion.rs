//! Small pieces of arithmetic behind the decorative effects.

use std::rc::Rc;

use yew::Reducible;

use crate::scroll::ease_out_quart;

/// Counts from zero up to `target` over `duration_ms`, decelerating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self { target, duration_ms }
    }

    /// Displayed value after `elapsed_ms`, and whether the count is done.
    pub fn value_at(&self, elapsed_ms: f64) -> (u32, bool) {
        let progress = if self.duration_ms > 0.0 {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return (self.target, true);
        }
        let value = (f64::from(self.target) * ease_out_quart(progress)).round();
        (value.min(f64::from(self.target)) as u32, false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container width.
    pub left: f64,
    /// Vertical position, percent of the container height.
    pub top: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;

/// Spreads `count` particles evenly but irregularly over the container,
/// the same layout on every render.
pub fn particle_layout(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let n = i as f64 + 1.0;
            let x = (n * GOLDEN_RATIO_CONJUGATE).fract();
            let y = (n * GOLDEN_RATIO_CONJUGATE * GOLDEN_RATIO_CONJUGATE + 0.5 * x).fract();
            Particle {
                left: x * 100.0,
                top: y * 100.0,
                duration_s: 3.0 + 2.0 * y,
                delay_s: 5.0 * (n * 0.754_877_666).fract(),
            }
        })
        .collect()
}

pub fn particle_count(viewport_width: f64, mobile_breakpoint: f64) -> usize {
    if viewport_width < mobile_breakpoint {
        5
    } else {
        15
    }
}

/// Background grid shift for a pointer position.
pub fn parallax_offset(pointer_x: f64, pointer_y: f64) -> (f64, f64) {
    (pointer_x * 0.01, pointer_y * 0.01)
}

/// Position in a ring of slides. `direction` is the sign of the last move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    direction: i8,
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            direction: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            direction: 1,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            direction: -1,
            ..self
        }
    }

    pub fn go_to(self, index: usize) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = index.min(self.len - 1);
        let direction = match index.cmp(&self.index) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => self.direction,
            std::cmp::Ordering::Greater => 1,
        };
        Self {
            index,
            direction,
            ..self
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::GoTo(index) => self.go_to(index),
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_reaches_target_exactly() {
        let counter = CounterAnimation::new(250, 2_000.0);
        assert_eq!(counter.value_at(0.0), (0, false));
        let (midway, done) = counter.value_at(1_000.0);
        assert!(!done);
        assert!(midway > 125 && midway < 250, "midway = {midway}");
        assert_eq!(counter.value_at(2_000.0), (250, true));
        assert_eq!(counter.value_at(9_999.0), (250, true));
    }

    #[test]
    fn counter_never_counts_down() {
        let counter = CounterAnimation::new(100, 2_000.0);
        let values: Vec<u32> = (0..=40).map(|i| counter.value_at(f64::from(i) * 50.0).0).collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn counter_without_duration_is_immediate() {
        assert_eq!(CounterAnimation::new(50, 0.0).value_at(0.0), (50, true));
    }

    #[test]
    fn particles_stay_inside_container() {
        let particles = particle_layout(15);
        assert_eq!(particles.len(), 15);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((3.0..=5.0).contains(&p.duration_s));
            assert!((0.0..5.0).contains(&p.delay_s));
        }
        assert_eq!(particles, particle_layout(15));
    }

    #[test]
    fn fewer_particles_on_small_screens() {
        assert_eq!(particle_count(375.0, 768.0), 5);
        assert_eq!(particle_count(768.0, 768.0), 15);
    }

    #[test]
    fn parallax_follows_pointer_at_one_percent() {
        assert_eq!(parallax_offset(0.0, 0.0), (0.0, 0.0));
        let (x, y) = parallax_offset(1_200.0, 800.0);
        assert!((x - 12.0).abs() < 1e-9);
        assert!((y - 8.0).abs() < 1e-9);
    }

    #[test]
    fn carousel_wraps_both_ways() {
        let carousel = Carousel::new(6);
        assert_eq!(carousel.prev().index(), 5);
        assert_eq!(carousel.prev().direction(), -1);

        let last = carousel.go_to(5);
        assert_eq!(last.next().index(), 0);
        assert_eq!(last.next().direction(), 1);
    }

    #[test]
    fn carousel_go_to_clamps() {
        let carousel = Carousel::new(3).go_to(10);
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.go_to(0).direction(), -1);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let carousel = Carousel::new(0);
        assert_eq!(carousel.next(), carousel);
        assert_eq!(carousel.prev(), carousel);
        assert_eq!(carousel.go_to(3), carousel);
    }
}
