use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::Navigation;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("About", "about"),
    ("Expertise", "expertise"),
    ("Process", "process"),
    ("Portfolio", "portfolio"),
    ("Testimonials", "testimonials"),
    ("Contact", "contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let navigation = use_context::<Navigation>();
    let Some(navigation) = navigation else {
        return html! {};
    };
    let snapshot = navigation.snapshot();

    let toggle_menu = {
        let navigation = navigation.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigation.toggle_menu();
        })
    };

    let nav_link = |&(label, id): &(&'static str, &'static str)| {
        let class = classes!("nav-link", navigation.is_active(id).then_some("active"));
        html! {
            <a href={format!("#{}", id)} class={class} onclick={navigation.section_link(id)}>
                {label}
            </a>
        }
    };

    let menu_class = if snapshot.menu_open {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    html! {
        <>
            <div class="scroll-progress" style={format!("transform: scaleX({:.4});", snapshot.progress)}></div>
            <nav class={classes!("top-nav", snapshot.scrolled.then_some("scrolled"))}>
                <div class="nav-content">
                    <a href="#top" class="nav-logo" onclick={navigation.section_link("top")}>
                        <img src="/assets/logo.png" alt="TEAM PIXELL Logo" />
                        <span class="nav-logo-text">
                            <span class="nav-logo-name">{"TEAM PIXELL"}</span>
                            <span class="nav-logo-tag">{"Digital Excellence"}</span>
                        </span>
                    </a>

                    <div class="nav-links">
                        { for NAV_ITEMS.iter().map(nav_link) }
                    </div>

                    <div class="nav-actions">
                        <a href="#contact" class="nav-cta" onclick={navigation.section_link("contact")}>
                            {"Get Started"}
                        </a>
                        <button class={classes!("burger-menu", snapshot.menu_open.then_some("open"))} onclick={toggle_menu}>
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </div>
            </nav>
            <div class={menu_class}>
                { for NAV_ITEMS.iter().map(nav_link) }
                <a href="#contact" class="nav-cta wide" onclick={navigation.section_link("contact")}>
                    {"Get Started"}
                </a>
            </div>
            <style>
                {r#"
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 3px;
                    z-index: 60;
                    transform-origin: left;
                    background: linear-gradient(90deg, #8b5cf6, #06b6d4, #8b5cf6);
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(10, 14, 39, 0);
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(10, 14, 39, 0.95);
                    backdrop-filter: blur(20px);
                    border-bottom: 1px solid rgba(59, 130, 246, 0.2);
                    box-shadow: 0 8px 24px rgba(59, 130, 246, 0.05);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                }
                .nav-logo img {
                    width: 3.5rem;
                    height: 3.5rem;
                    object-fit: contain;
                    filter: drop-shadow(0 0 12px rgba(59, 130, 246, 0.6));
                }
                .nav-logo-text {
                    display: flex;
                    flex-direction: column;
                }
                .nav-logo-name {
                    font-size: 1.125rem;
                    background: linear-gradient(90deg, #bfdbfe, #a5f3fc);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .nav-logo-tag {
                    font-size: 0.75rem;
                    color: rgba(96, 165, 250, 0.7);
                }
                .nav-links {
                    display: flex;
                    gap: 0.25rem;
                }
                .nav-link {
                    position: relative;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    font-size: 0.875rem;
                    color: #94a3b8;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }
                .nav-link:hover {
                    color: #93c5fd;
                    background: rgba(59, 130, 246, 0.05);
                }
                .nav-link.active {
                    color: #93c5fd;
                    background: rgba(59, 130, 246, 0.1);
                }
                .nav-link.active::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 2px;
                    background: linear-gradient(90deg, #3b82f6, #06b6d4);
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .nav-cta {
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    color: white;
                    font-size: 0.875rem;
                    text-decoration: none;
                    background: linear-gradient(90deg, #2563eb, #0891b2);
                }
                .nav-cta.wide {
                    display: block;
                    text-align: center;
                    margin-top: 0.5rem;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    padding: 0.6rem;
                    border-radius: 0.5rem;
                    background: rgba(59, 130, 246, 0.1);
                    border: 1px solid rgba(59, 130, 246, 0.2);
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 20px;
                    height: 2px;
                    background: #93c5fd;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) { transform: translateY(6px) rotate(45deg); }
                .burger-menu.open span:nth-child(2) { opacity: 0; }
                .burger-menu.open span:nth-child(3) { transform: translateY(-6px) rotate(-45deg); }
                .mobile-menu {
                    position: fixed;
                    top: 73px;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    padding: 1.5rem;
                    display: none;
                    flex-direction: column;
                    gap: 0.5rem;
                    background: rgba(10, 14, 39, 0.98);
                    border-bottom: 1px solid rgba(59, 130, 246, 0.2);
                    opacity: 0;
                    transform: translateY(-20px);
                    pointer-events: none;
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .mobile-menu.open {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }
                @media (max-width: 1024px) {
                    .nav-links { display: none; }
                    .burger-menu { display: flex; }
                    .mobile-menu { display: flex; }
                }
                "#}
            </style>
        </>
    }
}
