use yew::prelude::*;

use super::reveal::RevealSection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Advertising,
    Development,
    Branding,
    ECommerce,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 5] = [
        ProjectFilter::All,
        ProjectFilter::Advertising,
        ProjectFilter::Development,
        ProjectFilter::Branding,
        ProjectFilter::ECommerce,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Advertising => "Advertising",
            ProjectFilter::Development => "Development",
            ProjectFilter::Branding => "Branding",
            ProjectFilter::ECommerce => "E-Commerce",
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub services: &'static str,
    pub description: &'static str,
    pub categories: &'static [ProjectFilter],
    pub results: [(&'static str, &'static str); 3],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Fashion Brand",
        services: "Meta Advertising + Web Development",
        description: "Complete digital transformation for a luxury fashion retailer",
        categories: &[ProjectFilter::Advertising, ProjectFilter::Development, ProjectFilter::ECommerce],
        results: [("+380%", "ROI"), ("+250%", "Traffic Growth"), ("+420%", "Revenue Increase")],
    },
    Project {
        title: "SaaS Platform Launch",
        services: "Google Ads + SEO + Development",
        description: "Full-stack digital strategy for B2B software company",
        categories: &[ProjectFilter::Advertising, ProjectFilter::Development],
        results: [("50K+", "User Acquisition"), ("+185%", "Conversion Rate"), ("3", "Industry Awards")],
    },
    Project {
        title: "Restaurant Chain Expansion",
        services: "Marketplace Advertising + Design",
        description: "Multi-platform strategy for quick-commerce dominance",
        categories: &[ProjectFilter::Advertising, ProjectFilter::Branding, ProjectFilter::ECommerce],
        results: [("+315%", "Sales Growth"), ("12", "New Locations"), ("+450%", "Order Volume")],
    },
    Project {
        title: "Tech Startup Branding",
        services: "Branding + Video + Creative",
        description: "Complete brand identity and marketing collateral",
        categories: &[ProjectFilter::Branding],
        results: [("+200%", "Brand Recognition"), ("+380%", "Social Growth"), ("+275%", "Engagement")],
    },
    Project {
        title: "Healthcare Platform",
        services: "SEO + Development + Content",
        description: "Digital presence for telehealth service provider",
        categories: &[ProjectFilter::Development],
        results: [("25K+", "Patient Onboarding"), ("+340%", "Organic Traffic"), ("+290%", "Revenue")],
    },
    Project {
        title: "Real Estate Agency",
        services: "Meta + Google Ads + Web",
        description: "Lead generation powerhouse for luxury properties",
        categories: &[ProjectFilter::Advertising, ProjectFilter::Development],
        results: [("2.5K+", "Qualified Leads"), ("$45M", "Properties Sold"), ("+210%", "Lead Quality")],
    },
];

const SUMMARY: &[(&str, &str)] = &[
    ("500+", "Projects Completed"),
    ("$50M+", "Revenue Generated"),
    ("98%", "Client Satisfaction"),
    ("250%", "Average ROI"),
];

/// Projects shown under `filter`, in catalogue order.
pub fn visible_projects(filter: ProjectFilter) -> impl Iterator<Item = &'static Project> {
    PROJECTS
        .iter()
        .filter(move |p| filter == ProjectFilter::All || p.categories.contains(&filter))
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let filter = use_state(|| ProjectFilter::All);

    html! {
        <RevealSection id="portfolio" class="portfolio">
            <div class="section-inner">
                <div class="section-header">
                    <span class="eyebrow">{"Our Work"}</span>
                    <h2 class="section-title">{"Featured Case Studies"}</h2>
                    <p class="section-lead">
                        {"Real results from real partnerships. Here's how we've helped brands achieve extraordinary growth."}
                    </p>
                </div>

                <div class="portfolio__filters" role="tablist">
                    { for ProjectFilter::ALL.iter().map(|&option| {
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(option))
                        };
                        let selected = *filter == option;
                        html! {
                            <button
                                class={classes!("portfolio__filter", selected.then_some("active"))}
                                role="tab"
                                aria-selected={selected.to_string()}
                                {onclick}
                            >
                                {option.label()}
                            </button>
                        }
                    }) }
                </div>

                <div class="card-grid">
                    { for visible_projects(*filter).map(|project| html! {
                        <article class="card project" key={project.title}>
                            <span class="project__services">{project.services}</span>
                            <h3 class="project__title">{project.title}</h3>
                            <p class="project__description">{project.description}</p>
                            <div class="project__results">
                                { for project.results.iter().map(|(value, label)| html! {
                                    <div class="project__result">
                                        <span class="project__value">{*value}</span>
                                        <span class="project__label">{*label}</span>
                                    </div>
                                }) }
                            </div>
                        </article>
                    }) }
                </div>

                <div class="portfolio__summary">
                    { for SUMMARY.iter().map(|(value, label)| html! {
                        <div>
                            <div class="portfolio__summary-value">{*value}</div>
                            <div class="portfolio__summary-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .portfolio__filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 3rem;
                }
                .portfolio__filter {
                    padding: 0.6rem 1.4rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(59, 130, 246, 0.3);
                    background: transparent;
                    color: #bfdbfe;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .portfolio__filter.active,
                .portfolio__filter:hover {
                    background: linear-gradient(90deg, #2563eb, #0891b2);
                    border-color: transparent;
                    color: white;
                }
                .project {
                    animation: riseIn 0.4s ease-out both;
                }
                .project__services {
                    font-size: 0.75rem;
                    color: #67e8f9;
                }
                .project__title {
                    margin: 0.75rem 0 0.5rem;
                    color: #f1f5f9;
                }
                .project__description {
                    color: #94a3b8;
                }
                .project__results {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                    padding-top: 1rem;
                    border-top: 1px solid rgba(59, 130, 246, 0.15);
                }
                .project__result {
                    display: flex;
                    flex-direction: column;
                    text-align: center;
                }
                .project__value {
                    font-weight: 700;
                    color: #93c5fd;
                }
                .project__label {
                    font-size: 0.7rem;
                    color: #64748b;
                }
                .portfolio__summary {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    margin-top: 4rem;
                    text-align: center;
                }
                .portfolio__summary-value {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #e0f2fe;
                }
                .portfolio__summary-label {
                    color: #94a3b8;
                }
                @media (max-width: 900px) {
                    .portfolio__summary { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </RevealSection>
    }
}
