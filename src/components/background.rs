use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::config::ScrollConfig;
use crate::motion::{particle_count, particle_layout};

/// Fixed layer of drifting orbs and particles behind the page.
#[function_component(BackgroundEffects)]
pub fn background_effects() -> Html {
    let (width, _) = use_window_size();
    let breakpoint = ScrollConfig::default().mobile_breakpoint;
    let is_mobile = width < breakpoint;
    let particles = particle_layout(particle_count(width, breakpoint));

    html! {
        <div class="background-effects">
            if !is_mobile {
                <div class="orb orb--blue"></div>
                <div class="orb orb--cyan"></div>
            }
            { for particles.iter().map(|p| html! {
                <div
                    class="particle"
                    style={format!(
                        "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                        p.left, p.top, p.duration_s, p.delay_s
                    )}
                ></div>
            }) }
            <style>
                {r#"
                .background-effects {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .orb {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 9999px;
                    filter: blur(64px);
                }
                .orb--blue {
                    top: 5rem;
                    left: 2.5rem;
                    background: rgba(59, 130, 246, 0.1);
                    animation: orbDrift 20s ease-in-out infinite;
                }
                .orb--cyan {
                    bottom: 5rem;
                    right: 2.5rem;
                    background: rgba(6, 182, 212, 0.1);
                    animation: orbDrift 25s ease-in-out infinite reverse;
                }
                .particle {
                    position: absolute;
                    width: 4px;
                    height: 4px;
                    border-radius: 9999px;
                    background: rgba(96, 165, 250, 0.6);
                    opacity: 0;
                    animation-name: particleFloat;
                    animation-iteration-count: infinite;
                    animation-timing-function: ease-in-out;
                }
                @keyframes orbDrift {
                    0%, 100% { transform: translate(0, 0) scale(1); }
                    50% { transform: translate(100px, -50px) scale(1.2); }
                }
                @keyframes particleFloat {
                    0%, 100% { transform: translateY(0); opacity: 0; }
                    50% { transform: translateY(-100px); opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
