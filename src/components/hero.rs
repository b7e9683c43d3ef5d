use yew::prelude::*;

use crate::hooks::{use_pointer_parallax, Navigation};

const SERVICE_TAGS: &[&str] = &["Meta Ads", "Google Ads", "Technology", "Creative"];

#[function_component(Hero)]
pub fn hero() -> Html {
    let navigation = use_context::<Navigation>();
    let (grid_x, grid_y) = use_pointer_parallax();

    let link = |id: &'static str| navigation.as_ref().map(|n| n.section_link(id));

    html! {
        <section id="top" class="hero">
            <video class="hero__video" autoplay=true loop=true muted=true playsinline=true>
                <source src="/videos/hero-background.mp4" type="video/mp4" />
                <source src="/videos/hero-background.webm" type="video/webm" />
            </video>
            <div class="hero__overlay"></div>
            <div
                class="hero__grid"
                style={format!("transform: translate({:.2}px, {:.2}px);", grid_x, grid_y)}
            ></div>

            <div class="hero__content">
                <div class="hero__badge">
                    <span class="hero__badge-dot"></span>
                    <span>{"Premium Digital Solutions"}</span>
                </div>

                <h1 class="hero__title">{"Where Strategy Meets Sophistication."}</h1>

                <p class="hero__subtitle">
                    {"Team Pixel partners with ambitious brands to deliver refined digital experiences, performance-driven growth, and measurable impact."}
                </p>

                <div class="hero__tags">
                    { for SERVICE_TAGS.iter().map(|tag| html! { <span class="hero__tag">{*tag}</span> }) }
                </div>

                <div class="hero__actions">
                    <a href="#contact" class="cta-button" onclick={link("contact")}>
                        <span>{"Start a Conversation"}</span>
                        <i class="arrow">{"→"}</i>
                    </a>
                    <a href="#portfolio" class="ghost-button" onclick={link("portfolio")}>
                        {"View Our Work"}
                    </a>
                </div>

                <div class="hero__proof">
                    <span>{"100+ Happy Clients"}</span>
                    <span class="hero__dot">{"•"}</span>
                    <span>{"★ 5.0 Rating"}</span>
                    <span class="hero__dot">{"•"}</span>
                    <span class="hero__available">{"Available Now"}</span>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 1.5rem 6rem;
                    overflow: hidden;
                }
                .hero__video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: brightness(0.4) contrast(0.8);
                }
                .hero__overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(10, 14, 39, 0.9), rgba(30, 58, 138, 0.4), rgba(10, 14, 39, 0.9));
                }
                .hero__grid {
                    position: absolute;
                    inset: -50px;
                    opacity: 0.3;
                    background-image:
                        linear-gradient(rgba(59, 130, 246, 0.1) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(59, 130, 246, 0.1) 1px, transparent 1px);
                    background-size: 50px 50px;
                }
                .hero__content {
                    position: relative;
                    z-index: 1;
                    max-width: 64rem;
                    text-align: center;
                    animation: riseIn 0.8s cubic-bezier(0.22, 1, 0.36, 1) both;
                }
                .hero__badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    color: #93c5fd;
                    background: rgba(59, 130, 246, 0.1);
                    border: 1px solid rgba(59, 130, 246, 0.3);
                }
                .hero__badge-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #22d3ee;
                    animation: pulse 2s infinite;
                }
                .hero__title {
                    margin: 2rem 0 1.5rem;
                    font-size: clamp(2.75rem, 7vw, 5.5rem);
                    line-height: 1.05;
                    letter-spacing: -0.02em;
                    background: linear-gradient(90deg, #dbeafe, #a5f3fc, #dbeafe);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero__subtitle {
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: #94a3b8;
                }
                .hero__tags {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2.5rem;
                }
                .hero__tag {
                    padding: 0.4rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    color: #bfdbfe;
                    border: 1px solid rgba(59, 130, 246, 0.25);
                    background: rgba(15, 23, 42, 0.5);
                }
                .hero__actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .hero__proof {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 2.5rem;
                    font-size: 0.875rem;
                    color: #94a3b8;
                }
                .hero__available {
                    color: #4ade80;
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; transform: scale(1); }
                    50% { opacity: 0.5; transform: scale(1.2); }
                }
                "#}
            </style>
        </section>
    }
}
