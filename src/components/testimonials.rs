use yew::prelude::*;
use yew_hooks::use_interval;

use super::reveal::RevealSection;
use crate::config::TESTIMONIAL_INTERVAL_MS;
use crate::motion::{Carousel, CarouselAction};

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    rating: usize,
    text: &'static str,
    result: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Mitchell",
        role: "CEO",
        company: "Luxe Fashion Co.",
        rating: 5,
        text: "Team Pixel transformed our entire digital presence. The ROI we achieved in just 6 months exceeded our yearly projections. Their strategic approach and attention to detail is unmatched.",
        result: "+380% ROI",
    },
    Testimonial {
        name: "Marcus Chen",
        role: "Founder & CTO",
        company: "TechFlow Solutions",
        rating: 5,
        text: "Working with Team Pixel was a game-changer. They didn't just build us a platform; they crafted a complete growth engine. The technical excellence combined with marketing prowess is rare.",
        result: "50K+ Users",
    },
    Testimonial {
        name: "Emma Rodriguez",
        role: "Marketing Director",
        company: "Gourmet Express",
        rating: 5,
        text: "The marketplace advertising strategy they implemented revolutionized our business. We went from struggling to compete to dominating our category. Truly exceptional work.",
        result: "+315% Sales",
    },
    Testimonial {
        name: "David Thompson",
        role: "Co-Founder",
        company: "HealthConnect",
        rating: 5,
        text: "Team Pixel's holistic approach to digital strategy helped us scale from a startup to a market leader. Their expertise in SEO and development created a foundation for sustainable growth.",
        result: "25K+ Patients",
    },
    Testimonial {
        name: "Lisa Anderson",
        role: "VP of Sales",
        company: "Prime Properties",
        rating: 5,
        text: "The lead generation campaigns exceeded every expectation. The quality of leads and conversion rates have been phenomenal. Team Pixel truly understands high-value customer acquisition.",
        result: "$45M in Sales",
    },
    Testimonial {
        name: "James Park",
        role: "Brand Director",
        company: "InnovateTech",
        rating: 5,
        text: "From branding to video production, every touchpoint they created was world-class. Our brand recognition skyrocketed, and the creative work continues to win industry awards.",
        result: "+200% Recognition",
    },
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    {
        let carousel = carousel.clone();
        use_interval(
            move || carousel.dispatch(CarouselAction::Next),
            TESTIMONIAL_INTERVAL_MS,
        );
    }

    let Some(current) = TESTIMONIALS.get(carousel.index()) else {
        return html! {};
    };

    let slide_class = if carousel.direction() < 0 {
        "slide-from-left"
    } else {
        "slide-from-right"
    };

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    html! {
        <RevealSection id="testimonials" class="testimonials">
            <div class="section-inner">
                <div class="section-header">
                    <span class="eyebrow">{"Client Stories"}</span>
                    <h2 class="section-title">{"Trusted by Ambitious Brands"}</h2>
                </div>

                <div class="testimonials__stage">
                    <button class="testimonials__arrow" onclick={prev} aria-label="Previous testimonial">{"‹"}</button>

                    <figure class={classes!("card", "testimonial", slide_class)} key={carousel.index()}>
                        <div class="testimonial__rating">{("★".repeat(current.rating))}</div>
                        <blockquote class="testimonial__text">{current.text}</blockquote>
                        <figcaption class="testimonial__author">
                            <span class="testimonial__avatar">{initials(current.name)}</span>
                            <div>
                                <div class="testimonial__name">{current.name}</div>
                                <div class="testimonial__role">{format!("{}, {}", current.role, current.company)}</div>
                            </div>
                            <span class="testimonial__result">{current.result}</span>
                        </figcaption>
                    </figure>

                    <button class="testimonials__arrow" onclick={next} aria-label="Next testimonial">{"›"}</button>
                </div>

                <div class="testimonials__dots">
                    { for (0..TESTIMONIALS.len()).map(|i| {
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(i)))
                        };
                        html! {
                            <button
                                class={classes!("testimonials__dot", (i == carousel.index()).then_some("active"))}
                                aria-label={format!("Show testimonial {}", i + 1)}
                                {onclick}
                            ></button>
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .testimonials__stage {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .testimonial {
                    flex: 1;
                    margin: 0;
                    padding: 2.5rem;
                }
                .slide-from-right { animation: slideFromRight 0.5s ease-out both; }
                .slide-from-left { animation: slideFromLeft 0.5s ease-out both; }
                .testimonial__rating {
                    color: #facc15;
                    letter-spacing: 0.2em;
                }
                .testimonial__text {
                    margin: 1.25rem 0 2rem;
                    font-size: 1.2rem;
                    line-height: 1.7;
                    color: #e2e8f0;
                }
                .testimonial__author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonial__avatar {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    color: white;
                    background: linear-gradient(135deg, #2563eb, #0891b2);
                }
                .testimonial__name { color: #f1f5f9; font-weight: 600; }
                .testimonial__role { font-size: 0.875rem; color: #94a3b8; }
                .testimonial__result {
                    margin-left: auto;
                    padding: 0.4rem 0.9rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    color: #4ade80;
                    background: rgba(34, 197, 94, 0.1);
                }
                .testimonials__arrow {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(59, 130, 246, 0.3);
                    background: rgba(15, 23, 42, 0.6);
                    color: #bfdbfe;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .testimonials__dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }
                .testimonials__dot {
                    width: 0.6rem;
                    height: 0.6rem;
                    padding: 0;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(148, 163, 184, 0.4);
                    cursor: pointer;
                    transition: width 0.3s ease, background 0.3s ease;
                }
                .testimonials__dot.active {
                    width: 2rem;
                    background: #3b82f6;
                }
                @keyframes slideFromRight {
                    from { opacity: 0; transform: translateX(100px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes slideFromLeft {
                    from { opacity: 0; transform: translateX(-100px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @media (max-width: 700px) {
                    .testimonials__arrow { display: none; }
                    .testimonial { padding: 1.5rem; }
                }
                "#}
            </style>
        </RevealSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letters() {
        assert_eq!(initials("Sarah Mitchell"), "SM");
        assert_eq!(initials("  Emma   Rodriguez "), "ER");
    }
}
