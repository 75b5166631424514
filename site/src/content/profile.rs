//! The Dr. Gari content record.

use super::{
    DoctorProfile, EducationEntry, PublicationRef, Service, ServiceIcon, SocialLinks, Stat, Testimonial,
};

impl DoctorProfile {
    /// Build the profile the site ships with.
    #[must_use]
    pub fn dr_gari() -> Self {
        Self {
            name: "Dr. Gari".to_owned(),
            title: "World-Class Surgeon".to_owned(),
            specialization: "Cardiothoracic & Minimally Invasive Surgery".to_owned(),
            bio: "With over 25 years of experience in advanced surgical procedures, Dr. Gari has \
                  revolutionized minimally invasive surgery techniques. His pioneering work in \
                  robotic-assisted surgery has earned him international recognition and numerous awards."
                .to_owned(),
            experience: "25+".to_owned(),
            surgeries: "15,000+".to_owned(),
            success_rate: "99.2%".to_owned(),
            awards: "50+".to_owned(),
            education: vec![
                education("M.D.", "Harvard Medical School", "1998"),
                education("Surgical Residency", "Johns Hopkins Hospital", "2003"),
                education("Fellowship - Cardiothoracic Surgery", "Mayo Clinic", "2005"),
            ],
            certifications: [
                "American Board of Surgery",
                "American Board of Thoracic Surgery",
                "Fellow, American College of Surgeons (FACS)",
                "Robotic Surgery Certification - Intuitive Surgical",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            services: vec![
                service(
                    "Minimally Invasive Surgery",
                    "Advanced laparoscopic and robotic-assisted procedures with minimal scarring and faster recovery.",
                    ServiceIcon::Surgery,
                ),
                service(
                    "Cardiothoracic Surgery",
                    "Expert treatment for heart and chest conditions including bypass surgery and valve repair.",
                    ServiceIcon::Heart,
                ),
                service(
                    "Robotic Surgery",
                    "State-of-the-art da Vinci robotic surgical system for precise, controlled procedures.",
                    ServiceIcon::Robot,
                ),
                service(
                    "Trauma Surgery",
                    "Emergency surgical care for acute injuries and life-threatening conditions.",
                    ServiceIcon::Emergency,
                ),
                service(
                    "Oncological Surgery",
                    "Surgical treatment of cancerous tumors with focus on complete removal and preservation.",
                    ServiceIcon::Cancer,
                ),
                service(
                    "Reconstructive Surgery",
                    "Restoration of form and function following injury, disease, or congenital conditions.",
                    ServiceIcon::Reconstruct,
                ),
            ],
            stats: vec![
                stat("25+", "Years Experience"),
                stat("15,000+", "Surgeries Performed"),
                stat("99.2%", "Success Rate"),
                stat("50+", "Awards & Honors"),
            ],
            testimonials: vec![
                testimonial(
                    "James Morrison",
                    "Heart Surgery Patient",
                    "Dr. Gari saved my life. His expertise in minimally invasive heart surgery meant I was back \
                     on my feet in weeks instead of months. Truly exceptional care.",
                ),
                testimonial(
                    "Sarah Chen",
                    "Cancer Survivor",
                    "The precision and care Dr. Gari showed during my tumor removal surgery was remarkable. His \
                     entire team made me feel confident throughout the entire process.",
                ),
                testimonial(
                    "Michael Rodriguez",
                    "Trauma Patient",
                    "After my accident, Dr. Gari's quick thinking and surgical skill saved both my life and my \
                     quality of life. I can't thank him enough.",
                ),
                testimonial(
                    "Emily Thompson",
                    "Cardiac Patient",
                    "World-class surgeon with a compassionate touch. Dr. Gari took the time to explain everything \
                     and put my family at ease.",
                ),
            ],
            publications: vec![
                publication(
                    "Advances in Minimally Invasive Cardiac Surgery",
                    "Journal of Thoracic Surgery",
                    "2023",
                ),
                publication("Robotic Surgery: A New Paradigm", "Annals of Surgery", "2022"),
                publication(
                    "Long-term Outcomes of TAVR Procedures",
                    "New England Journal of Medicine",
                    "2021",
                ),
            ],
            email: "contact@drgari.com".to_owned(),
            phone: "+1 (555) 123-4567".to_owned(),
            address: "123 Medical Center Drive, Suite 500, New York, NY 10001".to_owned(),
            social: SocialLinks {
                linkedin: "https://linkedin.com/in/drgari".to_owned(),
                twitter: "https://twitter.com/drgari".to_owned(),
                researchgate: "https://researchgate.net/profile/drgari".to_owned(),
            },
        }
    }
}

impl Default for DoctorProfile {
    fn default() -> Self {
        Self::dr_gari()
    }
}

fn education(degree: &str, institution: &str, year: &str) -> EducationEntry {
    EducationEntry { degree: degree.to_owned(), institution: institution.to_owned(), year: year.to_owned() }
}

fn service(title: &str, description: &str, icon: ServiceIcon) -> Service {
    Service { title: title.to_owned(), description: description.to_owned(), icon }
}

fn stat(value: &str, label: &str) -> Stat {
    Stat { value: value.to_owned(), label: label.to_owned() }
}

fn testimonial(name: &str, role: &str, content: &str) -> Testimonial {
    Testimonial { name: name.to_owned(), role: role.to_owned(), content: content.to_owned(), rating: 5 }
}

fn publication(title: &str, journal: &str, year: &str) -> PublicationRef {
    PublicationRef { title: title.to_owned(), journal: journal.to_owned(), year: year.to_owned() }
}
