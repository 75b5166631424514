//! Section-local copy that is not part of the doctor profile.

use crate::util::scroll::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

/// Links shown in the navbar, the mobile menu, and the footer.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", target: SectionId::Home },
    NavItem { label: "About", target: SectionId::About },
    NavItem { label: "Services", target: SectionId::Services },
    NavItem { label: "Experience", target: SectionId::Experience },
    NavItem { label: "Testimonials", target: SectionId::Testimonials },
    NavItem { label: "Contact", target: SectionId::Contact },
];

/// Phrases cycled by the hero typing effect.
pub const HERO_PHRASES: &[&str] = &[
    "Cardiothoracic Surgeon",
    "Robotic Surgery Specialist",
    "Minimally Invasive Expert",
    "Saving Lives Daily",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const CAREER: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2018 - Present",
        title: "Chief of Surgery",
        organization: "Metropolitan Medical Center",
        location: "New York, NY",
        description: "Leading a team of 50+ surgeons, overseeing complex surgical procedures, and implementing \
                      innovative surgical techniques.",
        achievements: &[
            "5000+ surgeries performed",
            "Introduced robotic surgery program",
            "98.5% patient satisfaction",
        ],
    },
    TimelineEntry {
        period: "2012 - 2018",
        title: "Senior Cardiothoracic Surgeon",
        organization: "Johns Hopkins Hospital",
        location: "Baltimore, MD",
        description: "Specialized in minimally invasive cardiac procedures and valve replacement surgeries.",
        achievements: &["Pioneer in TAVR procedures", "Published 25+ research papers", "Trained 100+ fellows"],
    },
    TimelineEntry {
        period: "2005 - 2012",
        title: "Attending Surgeon",
        organization: "Mayo Clinic",
        location: "Rochester, MN",
        description: "Focused on complex thoracic surgeries and developed new surgical protocols.",
        achievements: &[
            "Excellence in Surgery Award",
            "Led international surgical missions",
            "Developed novel techniques",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

/// Count-up counters above the career timeline.
pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { value: "25+", label: "Years Experience", accent: "teal" },
    Achievement { value: "50+", label: "Medical Awards", accent: "amber" },
    Achievement { value: "15000+", label: "Surgeries Done", accent: "blue" },
    Achievement { value: "99%", label: "Success Rate", accent: "green" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Technology {
    pub glyph: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { glyph: "⚙", name: "Da Vinci XI", description: "Robotic Surgery System" },
    Technology { glyph: "♥", name: "ECMO", description: "Heart-Lung Support" },
    Technology { glyph: "🔬", name: "3D Imaging", description: "Advanced Visualization" },
    Technology { glyph: "🧠", name: "AI Diagnosis", description: "Machine Learning" },
    Technology { glyph: "〰", name: "Real-time Monitor", description: "Patient Tracking" },
    Technology { glyph: "☏", name: "Telemedicine", description: "Remote Consultation" },
    Technology { glyph: "💉", name: "Precision Injection", description: "Micro-dosing" },
    Technology { glyph: "👁", name: "Endoscopy", description: "Minimally Invasive" },
    Technology { glyph: "⚗", name: "Lab Integration", description: "Instant Results" },
    Technology { glyph: "💊", name: "Smart Pharma", description: "Drug Monitoring" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AwardEntry {
    pub glyph: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub year: &'static str,
    pub accent: &'static str,
}

pub const AWARDS: &[AwardEntry] = &[
    AwardEntry {
        glyph: "🏆",
        title: "Excellence in Surgery Award",
        organization: "American College of Surgeons",
        year: "2023",
        accent: "amber",
    },
    AwardEntry {
        glyph: "🏅",
        title: "Pioneer in Robotic Surgery",
        organization: "International Surgical Society",
        year: "2022",
        accent: "cyan",
    },
    AwardEntry {
        glyph: "★",
        title: "Top Doctor Award",
        organization: "US News & World Report",
        year: "2023",
        accent: "violet",
    },
    AwardEntry {
        glyph: "♛",
        title: "Lifetime Achievement Award",
        organization: "Society of Thoracic Surgeons",
        year: "2021",
        accent: "pink",
    },
    AwardEntry {
        glyph: "✪",
        title: "Innovation in Healthcare",
        organization: "Healthcare Innovation Forum",
        year: "2022",
        accent: "emerald",
    },
    AwardEntry {
        glyph: "✦",
        title: "Patient Choice Award",
        organization: "Healthgrades",
        year: "2023",
        accent: "blue",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Publication {
    pub title: &'static str,
    pub journal: &'static str,
    pub date: &'static str,
    pub citations: u32,
    pub tags: &'static [&'static str],
    pub summary: &'static str,
}

pub const PUBLICATIONS: &[Publication] = &[
    Publication {
        title: "Advances in Minimally Invasive Cardiac Surgery: A 10-Year Retrospective Study",
        journal: "Journal of Thoracic and Cardiovascular Surgery",
        date: "December 2023",
        citations: 142,
        tags: &["Cardiac Surgery", "MICS", "Research"],
        summary: "A comprehensive analysis of minimally invasive cardiac surgery outcomes over a decade, \
                  demonstrating significant improvements in patient recovery times and reduced complications.",
    },
    Publication {
        title: "Robotic-Assisted CABG: Outcomes and Patient Selection Criteria",
        journal: "Annals of Surgery",
        date: "September 2023",
        citations: 98,
        tags: &["Robotic Surgery", "CABG", "Clinical Study"],
        summary: "This study establishes evidence-based criteria for patient selection in robotic-assisted \
                  coronary artery bypass grafting procedures.",
    },
    Publication {
        title: "Long-term Outcomes of Transcatheter Aortic Valve Replacement",
        journal: "New England Journal of Medicine",
        date: "June 2022",
        citations: 256,
        tags: &["TAVR", "Valve Replacement", "Long-term Study"],
        summary: "A landmark study tracking TAVR patients over five years, providing crucial data on durability \
                  and long-term survival rates.",
    },
    Publication {
        title: "AI-Assisted Surgical Planning: The Future of Precision Medicine",
        journal: "Nature Medicine",
        date: "March 2022",
        citations: 187,
        tags: &["AI", "Surgical Planning", "Innovation"],
        summary: "Exploring the integration of artificial intelligence in pre-operative planning and its impact \
                  on surgical outcomes.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub title: &'static str,
    pub category: &'static str,
}

pub const MEDIA: &[MediaItem] = &[
    MediaItem { kind: MediaKind::Image, title: "Operating Room", category: "Facility" },
    MediaItem { kind: MediaKind::Image, title: "Medical Conference", category: "Events" },
    MediaItem { kind: MediaKind::Image, title: "Patient Care", category: "Care" },
    MediaItem { kind: MediaKind::Video, title: "Robotic Surgery Demo", category: "Procedures" },
    MediaItem { kind: MediaKind::Image, title: "Award Ceremony", category: "Awards" },
    MediaItem { kind: MediaKind::Image, title: "Team Meeting", category: "Team" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What should I expect during my first consultation?",
        answer: "During your first consultation, Dr. Gari will review your medical history, discuss your \
                 condition in detail, perform a physical examination if needed, and explain all available \
                 treatment options. This comprehensive evaluation typically takes 45-60 minutes, ensuring you \
                 have all the information needed to make informed decisions about your care.",
    },
    Faq {
        question: "How do I prepare for surgery?",
        answer: "Pre-surgery preparation includes fasting for 8-12 hours before the procedure, stopping certain \
                 medications as advised, arranging for transportation home, and completing all required \
                 pre-operative tests. Our team will provide you with a detailed preparation guide specific to \
                 your procedure.",
    },
    Faq {
        question: "What is the recovery time for minimally invasive surgery?",
        answer: "Recovery times vary depending on the specific procedure, but minimally invasive surgeries \
                 typically allow patients to return to normal activities within 1-3 weeks, compared to 6-8 \
                 weeks for traditional open surgery. Most patients experience significantly less pain and \
                 scarring.",
    },
    Faq {
        question: "Does Dr. Gari accept insurance?",
        answer: "Yes, we accept most major insurance plans including Medicare, Blue Cross Blue Shield, Aetna, \
                 Cigna, and UnitedHealthcare. Our billing team will verify your coverage and explain any \
                 out-of-pocket costs before your procedure.",
    },
    Faq {
        question: "What are the risks of robotic surgery?",
        answer: "Robotic surgery is generally very safe with a complication rate of less than 2%. Potential \
                 risks include infection, bleeding, and reactions to anesthesia, similar to any surgical \
                 procedure. Dr. Gari will discuss all risks specific to your case during your consultation.",
    },
    Faq {
        question: "How can I schedule an emergency consultation?",
        answer: "For emergencies, please call our 24/7 emergency line at +1 (555) 999-0000. For urgent but \
                 non-emergency consultations, contact our office during business hours and mention that you \
                 need an urgent appointment. We always prioritize patient safety.",
    },
];

/// Services listed in the footer column.
pub const FOOTER_SERVICES: &[&str] = &[
    "Cardiothoracic Surgery",
    "Robotic Surgery",
    "Minimally Invasive",
    "Valve Replacement",
    "Heart Transplant",
    "Emergency Care",
];

pub const OFFICE_HOURS: &str = "Mon - Fri: 9AM - 5PM";

/// (value, label) pairs under the testimonials carousel.
pub const TRUST_INDICATORS: &[(&str, &str)] =
    &[("4.9/5", "Patient Rating"), ("500+", "5-Star Reviews"), ("98%", "Would Recommend")];
