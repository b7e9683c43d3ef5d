use yew::prelude::*;

use super::reveal::RevealSection;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("200+", "Projects Delivered"),
    ("250%", "Average ROI"),
    ("₹6 Crore+", "Monthly Ad Budget Handled"),
    ("50+", "Happy Clients"),
    ("45+", "Happy Countries"),
    ("24×7", "Available"),
    ("98%", "Success Rate"),
    ("< 2 Hours", "Avg. Response"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <RevealSection id="about" class="about">
            <div class="section-inner about__layout">
                <div class="about__story">
                    <span class="eyebrow">{"Our Story"}</span>
                    <h2 class="section-title">
                        {"Boutique Precision. "}
                        <span class="text-gradient">{"Global Impact."}</span>
                    </h2>
                    <p class="section-lead">
                        {"TEAM PIXELL is a boutique digital agency built for brands that value precision, clarity, and results."}
                    </p>
                    <p class="section-lead">
                        {"We operate at the intersection of performance marketing, technology, and creative excellence, crafting digital systems that scale businesses while elevating brand perception."}
                    </p>
                    <p class="about__motto">
                        {"Every decision we make is intentional. Every execution is measured."}
                    </p>
                </div>

                <div class="about__grid">
                    { for HIGHLIGHTS.iter().map(|(value, label)| html! {
                        <div class="card about__tile">
                            <div class="about__value">{*value}</div>
                            <div class="about__label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="section-inner trust-strip">
                <div class="trust-strip__item">
                    <span class="trust-strip__caption">{"Certified Partners"}</span>
                    <span class="trust-strip__value">{"Meta Business Partner · Google Partner"}</span>
                </div>
                <div class="trust-strip__item">
                    <span class="trust-strip__caption">{"Industry Recognition"}</span>
                    <span class="trust-strip__value">{"Top 1% Digital Agencies 2025"}</span>
                </div>
            </div>

            <style>
                {r#"
                .about__layout {
                    display: grid;
                    grid-template-columns: 1.1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about__motto {
                    margin-top: 1.5rem;
                    font-style: italic;
                    color: #93c5fd;
                }
                .about__grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .about__value {
                    font-size: 1.75rem;
                    font-weight: 700;
                    color: #e0f2fe;
                }
                .about__label {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: #94a3b8;
                }
                .trust-strip {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 3rem;
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(59, 130, 246, 0.2);
                }
                .trust-strip__item {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }
                .trust-strip__caption {
                    font-size: 0.875rem;
                    color: #60a5fa;
                }
                .trust-strip__value {
                    font-weight: 700;
                    color: #e2e8f0;
                }
                @media (max-width: 900px) {
                    .about__layout { grid-template-columns: 1fr; gap: 2.5rem; }
                }
                "#}
            </style>
        </RevealSection>
    }
}
