
#[cfg(debug_assertions)]
pub fn form_relay_url() -> &'static str {
    "http://localhost:3001/f/contact"  // Local relay mock while developing
}

#[cfg(not(debug_assertions))]
pub fn form_relay_url() -> &'static str {
    "https://formspree.io/f/teampixell"
}

/// Anchor ids of the page sections, top to bottom.
pub const SECTION_REGISTRY: &[&str] = &[
    "top",
    "about",
    "expertise",
    "process",
    "portfolio",
    "testimonials",
    "philosophy",
    "experience",
    "contact",
];

pub const CONTACT_EMAIL: &str = "teampixel@gmail.com";
pub const CONTACT_PHONE: &str = "+91 9370718105";

pub const TESTIMONIAL_INTERVAL_MS: u32 = 6_000;
pub const STATUS_DISMISS_MS: u32 = 5_000;
pub const COUNTER_DURATION_MS: f64 = 2_000.0;

/// Tunables for scrolling, section tracking and the navigation chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Height of the fixed navigation bar, subtracted from section targets.
    pub nav_offset: f64,
    /// Duration of every navigation scroll. The animator has no implicit
    /// duration; callers always pass one.
    pub navigation_duration_ms: f64,
    /// Distance of the active-section probe point from the viewport top.
    pub probe_offset: f64,
    pub scrolled_threshold: f64,
    pub back_to_top_threshold: f64,
    pub reveal_margin: f64,
    pub mobile_breakpoint: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            nav_offset: 80.0,
            navigation_duration_ms: 1_000.0,
            probe_offset: 100.0,
            scrolled_threshold: 50.0,
            back_to_top_threshold: 300.0,
            reveal_margin: 100.0,
            mobile_breakpoint: 768.0,
        }
    }
}
