use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::reveal::RevealSection;
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE, STATUS_DISMISS_MS};
use crate::contact::form::{BUDGETS, MESSAGE_MAX_CHARS, SERVICES};
use crate::contact::{mailto_link, relay, ContactAction, ContactForm, Field, FormStep, SubmitStatus};

const TRUST_BADGES: &[&str] = &["Private & Confidential", "Quick Response", "No Obligation"];

fn field_error(form: &ContactForm, field: Field) -> Html {
    match form.error_for(field) {
        Some(err) => html! { <p class="form-error" role="alert">{err.to_string()}</p> },
        None => html! {},
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);

    // Success and failure banners clear themselves.
    {
        let status = form.status.clone();
        let form = form.clone();
        use_effect_with_deps(
            move |status: &SubmitStatus| {
                let timeout = matches!(status, SubmitStatus::Sent | SubmitStatus::Failed(_)).then(|| {
                    Timeout::new(STATUS_DISMISS_MS, move || {
                        form.dispatch(ContactAction::DismissStatus)
                    })
                });
                move || drop(timeout)
            },
            status,
        );
    }

    let on_text = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(field, input.value()));
        })
    };

    let on_select = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(field, select.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(Field::Message, area.value()));
        })
    };

    let on_back = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(ContactAction::Back))
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if form.step != FormStep::Message {
                form.dispatch(ContactAction::Next);
                return;
            }

            let mut draft = (*form).clone();
            let Some(submission) = draft.prepare_submission() else {
                form.dispatch(ContactAction::Review);
                return;
            };

            form.dispatch(ContactAction::Sending);
            let form = form.clone();
            spawn_local(async move {
                match relay::submit(&submission).await {
                    Ok(()) => form.dispatch(ContactAction::Sent),
                    Err(err) => {
                        error!("Contact enquiry failed: {}", err);
                        form.dispatch(ContactAction::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let on_email = Callback::from(|_: MouseEvent| info!("Opening mail client for enquiry"));

    let step_body = match form.step {
        FormStep::Details => html! {
            <>
                <label class="form-field">
                    <span>{"Full Name"}</span>
                    <input
                        type="text"
                        placeholder="Your name"
                        autocomplete="name"
                        value={form.name.clone()}
                        oninput={on_text(Field::Name)}
                    />
                    { field_error(&form, Field::Name) }
                </label>
                <label class="form-field">
                    <span>{"Work Email"}</span>
                    <input
                        type="email"
                        placeholder="you@company.com"
                        autocomplete="email"
                        value={form.email.clone()}
                        oninput={on_text(Field::Email)}
                    />
                    { field_error(&form, Field::Email) }
                </label>
            </>
        },
        FormStep::Project => html! {
            <>
                <label class="form-field">
                    <span>{"Service"}</span>
                    <select onchange={on_select(Field::Service)}>
                        <option value="" selected={form.service.is_empty()}>{"Choose a service"}</option>
                        { for SERVICES.iter().map(|s| html! {
                            <option value={*s} selected={form.service == *s}>{*s}</option>
                        }) }
                    </select>
                    { field_error(&form, Field::Service) }
                </label>
                <label class="form-field">
                    <span>{"Monthly Budget (optional)"}</span>
                    <select onchange={on_select(Field::Budget)}>
                        <option value="" selected={form.budget.is_empty()}>{"Prefer not to say"}</option>
                        { for BUDGETS.iter().map(|b| html! {
                            <option value={*b} selected={form.budget == *b}>{*b}</option>
                        }) }
                    </select>
                </label>
            </>
        },
        FormStep::Message => html! {
            <label class="form-field">
                <span>{"Tell us about your goals"}</span>
                <textarea
                    rows="6"
                    maxlength={MESSAGE_MAX_CHARS.to_string()}
                    placeholder="Where are you today, and where do you want to be?"
                    value={form.message.clone()}
                    oninput={on_message}
                />
                <span class="form-counter">
                    {format!("{} / {}", form.message.chars().count(), MESSAGE_MAX_CHARS)}
                </span>
                { field_error(&form, Field::Message) }
            </label>
        },
    };

    let status_banner = match &form.status {
        SubmitStatus::Sent => html! {
            <div class="form-status form-status--ok" role="status">
                {"Thank you. Your message is on its way and we'll be in touch within 2 hours."}
            </div>
        },
        SubmitStatus::Failed(reason) => html! {
            <div class="form-status form-status--error" role="alert">{reason.clone()}</div>
        },
        SubmitStatus::Idle | SubmitStatus::Sending => html! {},
    };

    let submit_label = match (form.step, form.is_sending()) {
        (_, true) => "Sending...",
        (FormStep::Message, false) => "Send Message",
        _ => "Continue",
    };

    html! {
        <RevealSection id="contact" class="contact">
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title">
                        {"Let's Create Something "}
                        <span class="text-gradient">{"Enduring"}</span>
                    </h2>
                    <p class="section-lead">
                        {"If you seek more than visibility, if you seek impact, we're ready."}
                    </p>
                </div>

                <div class="contact__layout">
                    <form class="card contact__form" {onsubmit} novalidate=true>
                        <ol class="contact__steps">
                            { for FormStep::ALL.iter().map(|&step| html! {
                                <li class={classes!(
                                    "contact__step",
                                    (step == form.step).then_some("current"),
                                    (step.number() < form.step.number()).then_some("done"),
                                )}>
                                    <span class="contact__step-number">{step.number()}</span>
                                    <span>{step.title()}</span>
                                </li>
                            }) }
                        </ol>

                        { step_body }
                        { status_banner }

                        <div class="contact__actions">
                            if form.step != FormStep::Details {
                                <button type="button" class="ghost-button" onclick={on_back} disabled={form.is_sending()}>
                                    {"Back"}
                                </button>
                            }
                            <button type="submit" class="cta-button" disabled={form.is_sending()}>
                                {submit_label}
                            </button>
                        </div>
                    </form>

                    <aside class="contact__aside">
                        <a
                            class="cta-button"
                            href={mailto_link(CONTACT_EMAIL, "Strategy consultation")}
                            onclick={on_email}
                        >
                            {"Email Us"}
                        </a>
                        <div class="card contact__details">
                            <div>
                                <span class="contact__caption">{"Email"}</span>
                                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                            </div>
                            <div>
                                <span class="contact__caption">{"Phone"}</span>
                                <a href={format!("tel:{}", CONTACT_PHONE.replace(' ', ""))}>{CONTACT_PHONE}</a>
                            </div>
                        </div>
                        <ul class="contact__badges">
                            { for TRUST_BADGES.iter().map(|badge| html! { <li>{*badge}</li> }) }
                        </ul>
                        <p class="contact__proof">
                            <span class="contact__stars">{"★★★★★"}</span>
                            {"Trusted by 100+ brands worldwide"}
                        </p>
                    </aside>
                </div>
            </div>

            <style>
                {r#"
                .contact__layout {
                    display: grid;
                    grid-template-columns: 1.5fr 1fr;
                    gap: 2rem;
                    align-items: start;
                }
                .contact__form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .contact__steps {
                    display: flex;
                    gap: 1rem;
                    margin: 0 0 0.5rem;
                    padding: 0;
                    list-style: none;
                    font-size: 0.875rem;
                    color: #64748b;
                }
                .contact__step {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .contact__step.current { color: #e0f2fe; }
                .contact__step.done { color: #60a5fa; }
                .contact__step-number {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 1.75rem;
                    height: 1.75rem;
                    border-radius: 9999px;
                    border: 1px solid currentColor;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    color: #cbd5e1;
                }
                .form-field input,
                .form-field select,
                .form-field textarea {
                    padding: 0.85rem 1rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(59, 130, 246, 0.25);
                    background: rgba(15, 23, 42, 0.7);
                    color: #f1f5f9;
                    font: inherit;
                }
                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: #3b82f6;
                }
                .form-counter {
                    align-self: flex-end;
                    font-size: 0.75rem;
                    color: #64748b;
                }
                .form-error {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #f87171;
                }
                .form-status {
                    padding: 0.9rem 1rem;
                    border-radius: 0.75rem;
                    font-size: 0.95rem;
                }
                .form-status--ok {
                    color: #4ade80;
                    background: rgba(34, 197, 94, 0.1);
                }
                .form-status--error {
                    color: #fca5a5;
                    background: rgba(239, 68, 68, 0.1);
                }
                .contact__actions {
                    display: flex;
                    justify-content: flex-end;
                    gap: 1rem;
                }
                .contact__aside {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .contact__details {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact__details a {
                    color: #e2e8f0;
                    text-decoration: none;
                }
                .contact__caption {
                    display: block;
                    font-size: 0.75rem;
                    color: #60a5fa;
                }
                .contact__badges {
                    margin: 0;
                    padding: 0;
                    list-style: none;
                    color: #94a3b8;
                }
                .contact__badges li::before {
                    content: "✓ ";
                    color: #22d3ee;
                }
                .contact__proof {
                    color: #94a3b8;
                }
                .contact__stars {
                    margin-right: 0.5rem;
                    color: #facc15;
                }
                @media (max-width: 900px) {
                    .contact__layout { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </RevealSection>
    }
}
