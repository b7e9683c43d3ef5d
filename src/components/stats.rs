use yew::prelude::*;

use crate::hooks::{use_count_up, use_reveal};

struct Stat {
    value: u32,
    suffix: &'static str,
    label: &'static str,
    description: &'static str,
}

const MAIN_STATS: &[Stat] = &[
    Stat { value: 100, suffix: "+", label: "Happy Clients", description: "Brands we've helped scale" },
    Stat { value: 50, suffix: "+", label: "Industry Awards", description: "Recognition for excellence" },
    Stat { value: 250, suffix: "%", label: "Average ROI", description: "Return on investment" },
    Stat { value: 50, suffix: "M+", label: "Revenue Generated", description: "For our clients" },
];

const SECONDARY_STATS: &[(&str, &str)] = &[
    ("Global Reach", "45+ Countries"),
    ("Support", "24/7 Available"),
    ("Success Rate", "98%"),
    ("Avg. Response", "< 2 Hours"),
];

#[derive(Properties, PartialEq)]
struct CounterProps {
    value: u32,
    suffix: &'static str,
    active: bool,
}

#[function_component(AnimatedCounter)]
fn animated_counter(props: &CounterProps) -> Html {
    let current = use_count_up(props.value, props.active);
    html! {
        <span class="stat__value">{current}{props.suffix}</span>
    }
}

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <section ref={node} class={classes!("page-section", "reveal", "stats", revealed.then_some("visible"))}>
            <div class="section-inner">
                <div class="section-header">
                    <span class="eyebrow">{"By The Numbers"}</span>
                    <h2 class="section-title">{"Results That Speak For Themselves"}</h2>
                    <p class="section-lead">
                        {"Our track record of excellence, backed by real metrics and measurable impact"}
                    </p>
                </div>

                <div class="stats__grid">
                    { for MAIN_STATS.iter().map(|stat| html! {
                        <div class="card stat">
                            <AnimatedCounter value={stat.value} suffix={stat.suffix} active={revealed} />
                            <div class="stat__label">{stat.label}</div>
                            <div class="stat__description">{stat.description}</div>
                        </div>
                    }) }
                </div>

                <div class="stats__secondary">
                    { for SECONDARY_STATS.iter().map(|(label, value)| html! {
                        <div class="stats__pill">
                            <span class="stats__pill-label">{*label}</span>
                            <span class="stats__pill-value">{*value}</span>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .stats__grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .stat {
                    text-align: center;
                }
                .stat__value {
                    display: block;
                    font-size: 3rem;
                    font-weight: 700;
                    font-variant-numeric: tabular-nums;
                    background: linear-gradient(90deg, #93c5fd, #67e8f9);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .stat__label {
                    margin-top: 0.5rem;
                    font-size: 1.125rem;
                    color: #e2e8f0;
                }
                .stat__description {
                    font-size: 0.875rem;
                    color: #94a3b8;
                }
                .stats__secondary {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .stats__pill {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 1rem;
                    border-radius: 1rem;
                    background: rgba(30, 58, 138, 0.15);
                    border: 1px solid rgba(59, 130, 246, 0.15);
                }
                .stats__pill-label {
                    font-size: 0.75rem;
                    color: #60a5fa;
                }
                .stats__pill-value {
                    font-weight: 600;
                    color: #e2e8f0;
                }
                @media (max-width: 900px) {
                    .stats__grid, .stats__secondary { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
