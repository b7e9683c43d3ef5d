use chrono::Datelike;
use yew::prelude::*;

use crate::config::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::hooks::Navigation;

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Home", "top"),
    ("Our Expertise", "expertise"),
    ("Philosophy", "philosophy"),
    ("Contact", "contact"),
];

const SERVICES: &[&str] = &[
    "Meta Advertising",
    "Google Advertising",
    "Web Development",
    "SEO Services",
    "Graphic Design",
];

const SOCIALS: &[&str] = &["Facebook", "Twitter", "Instagram", "LinkedIn"];

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigation = use_context::<Navigation>();
    let year = chrono::Local::now().year();

    let to_top = navigation.as_ref().map(|n| {
        let n = n.clone();
        Callback::from(move |_: MouseEvent| n.go_to_top())
    });

    html! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__brand">
                    <div class="site-footer__logo">
                        <span class="site-footer__mark">{"TP"}</span>
                        <span class="text-gradient">{"Team Pixel"}</span>
                    </div>
                    <p>{"A boutique digital agency built for brands that value precision, clarity, and results."}</p>
                    <div class="site-footer__socials">
                        { for SOCIALS.iter().map(|label| html! {
                            <a href="#" aria-label={*label}>{&label[..1]}</a>
                        }) }
                    </div>
                </div>

                <nav>
                    <h4>{"Quick Links"}</h4>
                    { for QUICK_LINKS.iter().map(|&(label, id)| {
                        let onclick = navigation.as_ref().map(|n| n.section_link(id));
                        html! {
                            <a class="site-footer__link" href={format!("#{}", id)} {onclick}>{label}</a>
                        }
                    }) }
                </nav>

                <div>
                    <h4>{"Services"}</h4>
                    { for SERVICES.iter().map(|s| html! { <div class="site-footer__item">{*s}</div> }) }
                </div>

                <div>
                    <h4>{"Get in Touch"}</h4>
                    <a class="site-footer__link" href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    <a class="site-footer__link" href={format!("tel:{}", CONTACT_PHONE.replace(' ', ""))}>{CONTACT_PHONE}</a>
                    <div class="site-footer__item">{"Global Digital Agency"}</div>
                </div>
            </div>

            <div class="site-footer__bottom">
                <p>{format!("© {} Team Pixel. All rights reserved.", year)}</p>
                <div class="site-footer__legal">
                    <span>{"Privacy Policy"}</span>
                    <span>{"Terms of Service"}</span>
                    <button class="site-footer__top" onclick={to_top} aria-label="Back to top">{"↑"}</button>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    z-index: 1;
                    padding: 4rem 1.5rem 2rem;
                    border-top: 1px solid rgba(59, 130, 246, 0.2);
                    background: rgba(2, 6, 23, 0.8);
                    color: #94a3b8;
                }
                .site-footer__grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                    max-width: 80rem;
                    margin: 0 auto 3rem;
                }
                .site-footer h4 {
                    margin: 0 0 1rem;
                    color: #e2e8f0;
                }
                .site-footer__logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                }
                .site-footer__mark {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    color: white;
                    background: linear-gradient(135deg, #3b82f6, #06b6d4);
                }
                .site-footer__socials {
                    display: flex;
                    gap: 0.75rem;
                }
                .site-footer__socials a {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(59, 130, 246, 0.3);
                    color: #93c5fd;
                    text-decoration: none;
                }
                .site-footer__link,
                .site-footer__item {
                    display: block;
                    margin-bottom: 0.6rem;
                    color: #94a3b8;
                    text-decoration: none;
                }
                .site-footer__link:hover {
                    color: #67e8f9;
                }
                .site-footer__bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(59, 130, 246, 0.15);
                    font-size: 0.875rem;
                }
                .site-footer__legal {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .site-footer__top {
                    width: 2.5rem;
                    height: 2.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    color: white;
                    cursor: pointer;
                    background: linear-gradient(135deg, #2563eb, #0891b2);
                }
                @media (max-width: 900px) {
                    .site-footer__grid { grid-template-columns: 1fr 1fr; }
                }
                @media (max-width: 600px) {
                    .site-footer__grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}
