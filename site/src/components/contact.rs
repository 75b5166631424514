//! Contact details and the appointment request form.
//!
//! The form runs `state::contact::ContactForm`: client-side validation, a
//! POST to `/api/contact`, then success for `SUCCESS_DISPLAY_MS` or a
//! form-level failure message with the fields left filled in. Field errors
//! the server returns are highlighted like local ones.

use std::sync::Arc;

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::DoctorProfile;
use crate::content::sections::OFFICE_HOURS;
use crate::state::contact::{ContactForm, ContactPolicy, Field, SubmitStatus};
use crate::util::scroll::SectionId;
use crate::util::viewport::use_in_view;

#[component]
pub fn Contact() -> impl IntoView {
    let profile = expect_context::<Arc<DoctorProfile>>();
    let policy = expect_context::<ContactPolicy>();
    let container = NodeRef::<Div>::new();
    let in_view = use_in_view(container, true);
    let form = RwSignal::new(ContactForm::new());

    let submit_profile = profile.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = form.with_untracked(|f| f.fields.clone());
        let Some(pending) = form.try_update(|f| f.begin_submit(policy, &submit_profile)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::state::contact::SUCCESS_DISPLAY_MS;

            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit_contact(&fields).await;
                if let Err(e) = &outcome {
                    log::error!("contact request failed: {e}");
                }
                let succeeded = outcome.is_ok();
                let seq = pending.seq;
                let applied = form.try_update(|f| f.complete(seq, outcome)).unwrap_or(false);
                if applied && succeeded {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SUCCESS_DISPLAY_MS)))
                        .await;
                    form.try_update(|f| f.expire_success(seq));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (fields, pending);
        }
    };

    let contact_rows = [
        ("☏", "Phone", profile.phone.clone(), profile.phone_href(), "teal"),
        ("✉", "Email", profile.email.clone(), profile.email_href(), "blue"),
        ("📍", "Location", profile.address.clone(), "#".to_owned(), "amber"),
        ("◷", "Office Hours", OFFICE_HOURS.to_owned(), "#".to_owned(), "purple"),
    ]
    .into_iter()
    .map(|(glyph, title, value, href, accent)| {
        view! {
            <a class="contact-info__row" href=href>
                <span class=format!("contact-info__icon contact-info__icon--{accent}")>{glyph}</span>
                <div>
                    <p class="contact-info__label">{title}</p>
                    <p class="contact-info__value">{value}</p>
                </div>
            </a>
        }
    })
    .collect::<Vec<_>>();

    let service_options = profile
        .service_titles()
        .map(|title| {
            let value = title.to_owned();
            let label = value.clone();
            view! { <option value=value>{label}</option> }
        })
        .collect::<Vec<_>>();

    let phone_label = if policy.phone_required { "Phone Number *" } else { "Phone Number" };
    let status = move || form.with(|f| f.status.clone());

    view! {
        <section id=SectionId::Contact.as_str() class="section contact">
            <div class="container" node_ref=container>
                <SectionHeader
                    eyebrow="GET IN TOUCH"
                    lead="Schedule a"
                    highlight="Consultation"
                    subtitle="Take the first step towards better health. Contact us to schedule your consultation."
                    revealed=in_view
                />
                <div class="contact__grid">
                    <aside class="contact-info reveal" class:is-revealed=move || in_view.get()>
                        <h3 class="contact-info__heading">"Contact Information"</h3>
                        <div class="contact-info__rows">{contact_rows}</div>
                        <div class="contact-info__social">
                            <p class="contact-info__label">{format!("Connect with {}", profile.name)}</p>
                            <div class="social">
                                <a class="social__link" href=profile.social.linkedin.clone() target="_blank"
                                    rel="noopener noreferrer" aria-label="LinkedIn">"in"</a>
                                <a class="social__link" href=profile.social.twitter.clone() target="_blank"
                                    rel="noopener noreferrer" aria-label="Twitter">"𝕏"</a>
                                <a class="social__link" href=profile.social.researchgate.clone() target="_blank"
                                    rel="noopener noreferrer" aria-label="ResearchGate">"↗"</a>
                            </div>
                        </div>
                    </aside>

                    <div class="contact-form reveal" class:is-revealed=move || in_view.get()>
                        <h3 class="contact-form__heading">"Request an Appointment"</h3>
                        <form class="contact-form__form" novalidate=true on:submit=on_submit>
                            <div class="contact-form__row">
                                <TextField form field=Field::Name label="Full Name *" input_type="text"
                                    placeholder="John Doe"/>
                                <TextField form field=Field::Email label="Email Address *" input_type="email"
                                    placeholder="john@example.com"/>
                            </div>
                            <div class="contact-form__row">
                                <TextField form field=Field::Phone label=phone_label input_type="tel"
                                    placeholder="+1 (555) 123-4567"/>
                                <div class="field">
                                    <label class="field__label" for="contact-service">"Service Needed"</label>
                                    <select
                                        id="contact-service"
                                        class="field__input"
                                        prop:value=move || form.with(|f| f.fields.service.clone())
                                        on:change=move |ev| {
                                            form.update(|f| f.set_field(Field::Service, event_target_value(&ev)));
                                        }
                                    >
                                        <option value="">"Select a service"</option>
                                        {service_options}
                                    </select>
                                    <FieldError form field=Field::Service/>
                                </div>
                            </div>
                            <div class="field">
                                <label class="field__label" for="contact-message">"Message *"</label>
                                <textarea
                                    id="contact-message"
                                    class="field__input field__input--area"
                                    class=("field__input--invalid", move || form.with(|f| f.error(Field::Message).is_some()))
                                    rows="5"
                                    placeholder="Please describe your condition or inquiry..."
                                    prop:value=move || form.with(|f| f.fields.message.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.set_field(Field::Message, event_target_value(&ev)));
                                    }
                                ></textarea>
                                <FieldError form field=Field::Message/>
                            </div>

                            {move || match status() {
                                SubmitStatus::Failed(message) => {
                                    Some(view! { <p class="contact-form__failure" role="alert">{message}</p> })
                                }
                                _ => None,
                            }}

                            <button
                                type="submit"
                                class="btn btn--primary contact-form__submit"
                                class=("contact-form__submit--success", move || status() == SubmitStatus::Success)
                                disabled=move || form.with(ContactForm::is_submitting)
                            >
                                {move || match status() {
                                    SubmitStatus::Submitting => "⟳ Sending...",
                                    SubmitStatus::Success => "✓ Message Sent Successfully!",
                                    SubmitStatus::Idle | SubmitStatus::Failed(_) => "📅 Request Appointment",
                                }}
                            </button>
                        </form>
                        <p class="contact-form__privacy">
                            "Your information is confidential and protected by HIPAA regulations."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Labelled single-line input bound to one form field.
#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = format!("contact-{}", field.as_str());
    view! {
        <div class="field">
            <label class="field__label" for=id.clone()>{label}</label>
            <input
                id=id
                name=field.as_str()
                class="field__input"
                class=("field__input--invalid", move || form.with(|f| f.error(field).is_some()))
                type=input_type
                placeholder=placeholder
                prop:value=move || form.with(|f| f.fields.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
            <FieldError form field/>
        </div>
    }
}

#[component]
fn FieldError(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error(field).map(str::to_owned))
            .map(|message| view! { <p class="field__error">{message}</p> })
    }
}
