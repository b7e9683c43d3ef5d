use yew::prelude::*;

use crate::components::{
    about::About, back_to_top::BackToTop, background::BackgroundEffects, contact::Contact,
    experience::Experience, expertise::Expertise, footer::Footer, hero::Hero, navigation::Nav,
    philosophy::Philosophy, portfolio::Portfolio, process::Process, stats::StatsSection,
    testimonials::Testimonials,
};
use crate::hooks::{use_scroll_navigation, Navigation};
use crate::scroll::dom::disable_scroll_restoration;

#[function_component(Landing)]
pub fn landing() -> Html {
    let navigation = use_scroll_navigation();

    // No restored offset on reload.
    use_effect_with_deps(
        |_| {
            disable_scroll_restoration();
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<Navigation> context={navigation}>
            <BackgroundEffects />
            <Nav />
            <main class="landing">
                <Hero />
                <About />
                <StatsSection />
                <Expertise />
                <Process />
                <Portfolio />
                <Testimonials />
                <Philosophy />
                <Experience />
                <Contact />
            </main>
            <Footer />
            <BackToTop />
            <style>
                {r#"
                html {
                    scroll-behavior: auto;
                }
                body {
                    margin: 0;
                    min-height: 100vh;
                    overflow-x: hidden;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                    color: #e2e8f0;
                    background: #0a0e27;
                    -webkit-font-smoothing: antialiased;
                }
                .landing {
                    position: relative;
                    z-index: 1;
                }
                .page-section {
                    position: relative;
                    padding: 7rem 1.5rem;
                }
                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1),
                                transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                }
                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .section-header {
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                    text-align: center;
                }
                .eyebrow {
                    display: inline-block;
                    margin-bottom: 1rem;
                    padding: 0.4rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.8rem;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    color: #93c5fd;
                    background: rgba(59, 130, 246, 0.1);
                    border: 1px solid rgba(59, 130, 246, 0.25);
                }
                .section-title {
                    margin: 0 0 1.25rem;
                    font-size: clamp(2rem, 4.5vw, 3.5rem);
                    line-height: 1.15;
                    letter-spacing: -0.01em;
                    color: #f8fafc;
                }
                .section-lead {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: #94a3b8;
                }
                .text-gradient {
                    background: linear-gradient(90deg, #60a5fa, #22d3ee);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .card {
                    padding: 2rem;
                    border-radius: 1.25rem;
                    background: linear-gradient(180deg, rgba(30, 41, 59, 0.6), rgba(15, 23, 42, 0.6));
                    border: 1px solid rgba(59, 130, 246, 0.15);
                    backdrop-filter: blur(12px);
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }
                .card:hover {
                    border-color: rgba(59, 130, 246, 0.4);
                    transform: translateY(-4px);
                }
                .cta-button,
                .ghost-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.95rem 2rem;
                    border-radius: 9999px;
                    font: inherit;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.3s ease, background 0.3s ease;
                }
                .cta-button {
                    border: none;
                    color: white;
                    background: linear-gradient(90deg, #2563eb, #0891b2);
                    box-shadow: 0 10px 30px rgba(37, 99, 235, 0.3);
                }
                .cta-button:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 16px 40px rgba(37, 99, 235, 0.45);
                }
                .ghost-button {
                    color: #bfdbfe;
                    background: transparent;
                    border: 1px solid rgba(59, 130, 246, 0.4);
                }
                .ghost-button:hover {
                    background: rgba(59, 130, 246, 0.1);
                }
                .cta-button:disabled,
                .ghost-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                    transform: none;
                }
                .cta-button .arrow {
                    font-style: normal;
                    transition: transform 0.2s ease;
                }
                .cta-button:hover .arrow {
                    transform: translateX(4px);
                }
                @keyframes riseIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 900px) {
                    .page-section { padding: 5rem 1.25rem; }
                    .card-grid { grid-template-columns: 1fr; }
                }
                @media (prefers-reduced-motion: reduce) {
                    .reveal { transition: none; opacity: 1; transform: none; }
                }
                "#}
            </style>
        </ContextProvider<Navigation>>
    }
}
