//! Site footer: brand, quick links, services, contact, back-to-top.

use std::sync::Arc;

use leptos::prelude::*;

use crate::content::DoctorProfile;
use crate::content::sections::{FOOTER_SERVICES, NAV_ITEMS};
use crate::util::clock::current_year;
use crate::util::scroll::{SectionId, scroll_to};

#[component]
pub fn Footer() -> impl IntoView {
    let profile = expect_context::<Arc<DoctorProfile>>();
    let year = current_year();

    let socials = [
        ("LinkedIn", "in", profile.social.linkedin.clone()),
        ("Twitter", "𝕏", profile.social.twitter.clone()),
        ("ResearchGate", "↗", profile.social.researchgate.clone()),
    ]
    .into_iter()
    .map(|(label, glyph, href)| {
        view! {
            <a class="social__link" href=href target="_blank" rel="noopener noreferrer" aria-label=label>
                {glyph}
            </a>
        }
    })
    .collect::<Vec<_>>();

    let quick_links = NAV_ITEMS
        .iter()
        .map(|item| {
            let target = item.target;
            view! {
                <li>
                    <a class="footer__link" href=target.href()
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to(target);
                        }>
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let services = FOOTER_SERVICES
        .iter()
        .map(|s| view! { <li class="footer__service">{*s}</li> })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="container footer__grid">
                <div class="footer__brand">
                    <div class="footer__logo">
                        <span class="footer__logo-mark">"⚕"</span>
                        <div>
                            <h3 class="footer__name">{profile.name.clone()}</h3>
                            <p class="footer__role">"SURGEON"</p>
                        </div>
                    </div>
                    <p class="footer__blurb">
                        {format!(
                            "Dedicated to providing exceptional surgical care with over {} years of experience in \
                             cardiothoracic surgery.",
                            profile.experience,
                        )}
                    </p>
                    <div class="social">{socials}</div>
                </div>

                <div>
                    <h4 class="footer__heading">"Quick Links"</h4>
                    <ul class="footer__list">{quick_links}</ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Services"</h4>
                    <ul class="footer__list">{services}</ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Contact"</h4>
                    <ul class="footer__list">
                        <li>
                            <a class="footer__contact" href=profile.phone_href()>
                                <span class="footer__contact-label">"Phone"</span>
                                <span>{profile.phone.clone()}</span>
                            </a>
                        </li>
                        <li>
                            <a class="footer__contact" href=profile.email_href()>
                                <span class="footer__contact-label">"Email"</span>
                                <span>{profile.email.clone()}</span>
                            </a>
                        </li>
                        <li class="footer__contact">
                            <span class="footer__contact-label">"Location"</span>
                            <span>{profile.address.clone()}</span>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="container footer__bottom">
                <p class="footer__copyright">
                    {format!("© {year} {}. Made with ", profile.name)}
                    <span class="footer__heart">"♥"</span>
                    " All rights reserved."
                </p>
                <button class="footer__top" on:click=move |_| scroll_to(SectionId::Home)>
                    "↑ Back to Top"
                </button>
            </div>
        </footer>
    }
}
