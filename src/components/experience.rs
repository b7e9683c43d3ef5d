use yew::prelude::*;

use super::reveal::RevealSection;

const DIFFERENTIATORS: &[(&str, &str)] = &[
    ("Dedicated Strategist", "One senior point of contact who knows your account inside out."),
    ("Weekly Reporting", "Clear dashboards and plain-language updates every week."),
    ("Rapid Response", "Questions answered in under two hours during business days."),
    ("No Lock-in Contracts", "We keep clients by performing, not by paperwork."),
    ("Full Transparency", "You own your ad accounts, data and creatives. Always."),
];

const BADGES: &[(&str, &str)] = &[
    ("24/7", "Campaign Monitoring"),
    ("100%", "Account Ownership"),
    ("NDA", "Confidentiality Assured"),
];

#[function_component(Experience)]
pub fn experience() -> Html {
    html! {
        <RevealSection id="experience" class="experience">
            <div class="section-inner experience__layout">
                <div>
                    <span class="eyebrow">{"The Client Experience"}</span>
                    <h2 class="section-title">{"Working With Us Feels Different"}</h2>
                    <ul class="experience__list">
                        { for DIFFERENTIATORS.iter().map(|(title, body)| html! {
                            <li>
                                <span class="experience__check">{"✓"}</span>
                                <div>
                                    <strong>{*title}</strong>
                                    <p>{*body}</p>
                                </div>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="experience__badges">
                    { for BADGES.iter().map(|(value, label)| html! {
                        <div class="card experience__badge">
                            <span class="experience__badge-value">{*value}</span>
                            <span>{*label}</span>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .experience__layout {
                    display: grid;
                    grid-template-columns: 1.4fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .experience__list {
                    margin: 2rem 0 0;
                    padding: 0;
                    list-style: none;
                }
                .experience__list li {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1.25rem;
                }
                .experience__list strong {
                    color: #f1f5f9;
                }
                .experience__list p {
                    margin: 0.25rem 0 0;
                    color: #94a3b8;
                }
                .experience__check {
                    color: #22d3ee;
                    font-weight: 700;
                }
                .experience__badges {
                    display: grid;
                    gap: 1rem;
                }
                .experience__badge {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                    color: #cbd5e1;
                }
                .experience__badge-value {
                    min-width: 4.5rem;
                    font-size: 1.75rem;
                    font-weight: 700;
                    color: #67e8f9;
                }
                @media (max-width: 900px) {
                    .experience__layout { grid-template-columns: 1fr; gap: 2rem; }
                }
                "#}
            </style>
        </RevealSection>
    }
}
