use yew::prelude::*;

use super::reveal::RevealSection;

struct Capability {
    icon: &'static str,
    title: &'static str,
    summary: &'static str,
    points: &'static [&'static str],
}

const CAPABILITIES: &[Capability] = &[
    Capability {
        icon: "◎",
        title: "Meta Advertising",
        summary: "Full-funnel campaigns across Facebook and Instagram, engineered for scale and profitability.",
        points: &["Audience architecture", "Creative testing frameworks", "Conversion API setup"],
    },
    Capability {
        icon: "⌕",
        title: "Google Advertising",
        summary: "Search, Shopping, Performance Max and YouTube campaigns built around intent and margin.",
        points: &["Keyword strategy", "Shopping feed optimisation", "Bid strategy management"],
    },
    Capability {
        icon: "⌘",
        title: "Web Development",
        summary: "Fast, conversion-focused websites and storefronts that turn attention into revenue.",
        points: &["Custom builds", "Shopify and headless commerce", "Core Web Vitals tuning"],
    },
    Capability {
        icon: "↗",
        title: "SEO Services",
        summary: "Technical and content SEO that compounds organic visibility month over month.",
        points: &["Technical audits", "Content strategy", "Authority building"],
    },
    Capability {
        icon: "▣",
        title: "Marketplace Ads",
        summary: "Amazon and Flipkart advertising that protects margin while growing share of shelf.",
        points: &["Sponsored products", "Listing optimisation", "ACoS control"],
    },
    Capability {
        icon: "✦",
        title: "Graphic Design",
        summary: "Brand identities and ad creatives crafted to stop the scroll and build recall.",
        points: &["Brand identity", "Ad creatives", "Motion graphics"],
    },
];

#[function_component(Expertise)]
pub fn expertise() -> Html {
    html! {
        <RevealSection id="expertise" class="expertise">
            <div class="section-inner">
                <div class="section-header">
                    <span class="eyebrow">{"Our Expertise"}</span>
                    <h2 class="section-title">{"Capabilities Built for Growth"}</h2>
                    <p class="section-lead">
                        {"Specialised disciplines, one accountable team. Every service is designed to move a number that matters to your business."}
                    </p>
                </div>

                <div class="card-grid">
                    { for CAPABILITIES.iter().map(|capability| html! {
                        <article class="card capability">
                            <div class="capability__icon">{capability.icon}</div>
                            <h3 class="capability__title">{capability.title}</h3>
                            <p class="capability__summary">{capability.summary}</p>
                            <ul class="capability__points">
                                { for capability.points.iter().map(|point| html! { <li>{*point}</li> }) }
                            </ul>
                        </article>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .capability__icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    font-size: 1.5rem;
                    color: #67e8f9;
                    background: rgba(6, 182, 212, 0.1);
                }
                .capability__title {
                    margin: 1.25rem 0 0.75rem;
                    font-size: 1.25rem;
                    color: #f1f5f9;
                }
                .capability__summary {
                    color: #94a3b8;
                    line-height: 1.6;
                }
                .capability__points {
                    margin: 1.25rem 0 0;
                    padding: 0;
                    list-style: none;
                    font-size: 0.875rem;
                    color: #bfdbfe;
                }
                .capability__points li::before {
                    content: "— ";
                    color: #3b82f6;
                }
                "#}
            </style>
        </RevealSection>
    }
}
