use yew::prelude::*;

use super::reveal::RevealSection;

const STEPS: &[(&str, &str, &str)] = &[
    ("01", "Discovery", "We learn your business, margins, audience and the goals that define success."),
    ("02", "Strategy", "A channel plan with budgets, creative direction and clear KPIs for every stage."),
    ("03", "Build", "Campaigns, tracking and landing experiences are set up with precision."),
    ("04", "Launch", "Controlled rollout with daily monitoring while the data settles."),
    ("05", "Optimise", "Structured testing on audiences, creatives and bids to lift efficiency."),
    ("06", "Scale", "Budget moves to what works. Growth compounds without losing control."),
];

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <RevealSection id="process" class="process">
            <div class="section-inner">
                <div class="section-header">
                    <span class="eyebrow">{"How We Work"}</span>
                    <h2 class="section-title">{"A Proven Process"}</h2>
                    <p class="section-lead">
                        {"Six deliberate steps from first conversation to sustained growth."}
                    </p>
                </div>

                <ol class="process__steps">
                    { for STEPS.iter().map(|(number, title, body)| html! {
                        <li class="card process__step">
                            <span class="process__number">{*number}</span>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </li>
                    }) }
                </ol>
            </div>

            <style>
                {r#"
                .process__steps {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin: 0;
                    padding: 0;
                    list-style: none;
                }
                .process__number {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: rgba(96, 165, 250, 0.35);
                }
                .process__step h3 {
                    margin: 0.5rem 0;
                    color: #f1f5f9;
                }
                .process__step p {
                    color: #94a3b8;
                    line-height: 1.6;
                }
                @media (max-width: 900px) {
                    .process__steps { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </RevealSection>
    }
}
