use yew::prelude::*;

use super::reveal::RevealSection;

const PILLARS: &[(&str, &str)] = &[
    ("Clarity", "Transparent reporting and honest advice, even when it isn't what you expected to hear."),
    ("Precision", "Every budget line, audience and creative is there for a reason we can explain."),
    ("Partnership", "We work as an extension of your team, invested in outcomes rather than deliverables."),
    ("Performance", "Success is measured in revenue, margin and growth. Vanity metrics don't count."),
];

#[function_component(Philosophy)]
pub fn philosophy() -> Html {
    html! {
        <RevealSection id="philosophy" class="philosophy">
            <div class="section-inner">
                <div class="section-header">
                    <span class="eyebrow">{"Our Philosophy"}</span>
                    <h2 class="section-title">{"Principles That Guide Every Engagement"}</h2>
                </div>

                <div class="philosophy__pillars">
                    { for PILLARS.iter().map(|(title, body)| html! {
                        <div class="card">
                            <h3 class="philosophy__title">{*title}</h3>
                            <p class="philosophy__body">{*body}</p>
                        </div>
                    }) }
                </div>

                <p class="philosophy__statement">{"No noise. No shortcuts. Only outcomes."}</p>
            </div>

            <style>
                {r#"
                .philosophy__pillars {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .philosophy__title {
                    margin: 0 0 0.75rem;
                    color: #e0f2fe;
                }
                .philosophy__body {
                    color: #94a3b8;
                    line-height: 1.6;
                }
                .philosophy__statement {
                    margin-top: 3rem;
                    text-align: center;
                    font-size: 1.5rem;
                    font-weight: 600;
                    letter-spacing: 0.02em;
                    color: #93c5fd;
                }
                @media (max-width: 900px) {
                    .philosophy__pillars { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </RevealSection>
    }
}
