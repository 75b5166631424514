//! Biography, education, certifications, and recent publications.

use std::sync::Arc;

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::DoctorProfile;
use crate::util::scroll::SectionId;
use crate::util::viewport::use_in_view;

/// How many publication references the about panel previews.
const PUBLICATION_PREVIEW: usize = 2;

#[component]
pub fn About() -> impl IntoView {
    let profile = expect_context::<Arc<DoctorProfile>>();
    let container = NodeRef::<Div>::new();
    let in_view = use_in_view(container, true);

    let education = profile
        .education
        .iter()
        .map(|edu| {
            view! {
                <li class="about__timeline-item">
                    <span class="about__dot"></span>
                    <div>
                        <p class="about__degree">{edu.degree.clone()}</p>
                        <p class="about__meta">{format!("{} • {}", edu.institution, edu.year)}</p>
                    </div>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let certifications = profile
        .certifications
        .iter()
        .map(|cert| {
            view! {
                <li class="about__cert">
                    <span class="about__check">"✓"</span>
                    <span>{cert.clone()}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let publications = profile
        .publications
        .iter()
        .take(PUBLICATION_PREVIEW)
        .map(|publication| {
            view! {
                <li class="about__publication">
                    <p class="about__publication-title">{publication.title.clone()}</p>
                    <p class="about__meta">{format!("{} • {}", publication.journal, publication.year)}</p>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=SectionId::About.as_str() class="section about">
            <div class="section__glow section__glow--left"></div>
            <div class="container" node_ref=container>
                <SectionHeader
                    eyebrow="ABOUT ME"
                    lead="Meet"
                    highlight=profile.name.clone()
                    revealed=in_view
                />
                <div class="about__grid reveal" class:is-revealed=move || in_view.get()>
                    <div class="about__card float">
                        <div class="about__portrait">
                            <span class="about__stethoscope">"⚕"</span>
                            <h3 class="about__name">{profile.name.clone()}</h3>
                            <p class="about__creds">"MD, FACS, FCCP"</p>
                            <p class="about__specialization">{profile.specialization.clone()}</p>
                        </div>
                        <div class="about__badge about__badge--experience">
                            <span class="about__badge-value">{profile.experience.clone()}</span>
                            <span class="about__badge-label">"Years Exp"</span>
                        </div>
                        <div class="about__badge about__badge--success">
                            "★ " {profile.success_rate.clone()} " Success"
                        </div>
                    </div>

                    <div class="about__body">
                        <div>
                            <h3 class="about__heading">"Pioneering Excellence in Surgery"</h3>
                            <p class="about__bio">{profile.bio.clone()}</p>
                        </div>
                        <div>
                            <h4 class="about__subheading">"🎓 Education"</h4>
                            <ul class="about__timeline">{education}</ul>
                        </div>
                        <div>
                            <h4 class="about__subheading">"🏅 Certifications"</h4>
                            <ul class="about__certs">{certifications}</ul>
                        </div>
                        <div>
                            <h4 class="about__subheading">"📖 Recent Publications"</h4>
                            <ul class="about__publications">{publications}</ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
