use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::count_up::CountUpValue;
use crate::contact::InquiryCategory;
use crate::pages::contact::ContactQuery;
use crate::Route;

struct Milestone {
    year: &'static str,
    title: &'static str,
    description: &'static str,
}

struct Leader {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

const FOUNDED: &str = "2020";

const COUNTED_STATS: [(&str, f64, &str); 2] = [
    ("fas fa-globe", 12.0, "Countries"),
    ("fas fa-users", 2_500.0, "Farmers Served"),
];

const MISSION: [(&str, &str, &str); 2] = [
    (
        "fas fa-bullseye",
        "Our Mission",
        "To make intelligent aquaculture accessible to everyone, scaling farmers sustainably, rewarding purpose-driven investors, and connecting the world's blue economy through AquaCORTEX intelligence.",
    ),
    (
        "fas fa-eye",
        "Our Vision",
        "To become the global standard operating system for intelligent aquaculture, where every farm operation, regardless of size or location, benefits from world-class AI intelligence and data-driven optimization.",
    ),
];

const VALUES: [(&str, &str, &str); 7] = [
    ("fas fa-lightbulb", "Innovation Excellence", "We pioneer biological AI solutions that didn't exist before. Our technology must be genuinely transformative, not incrementally better. We pursue breakthroughs, not buzzwords."),
    ("fas fa-leaf", "Sustainability First", "Environmental stewardship drives every design decision. We measure success not just in productivity gains but in feed waste reduced, chemicals avoided, and ecosystems protected."),
    ("fas fa-hands-helping", "Farmer Empowerment", "Technology must serve producers, not replace them. We build tools that amplify farmer intelligence, preserve traditional knowledge, and create dignified livelihoods at every scale."),
    ("fas fa-lock", "Data Integrity", "Farmers trust us with their most valuable asset: their data. We honor that trust through transparency, accuracy, security, and giving farmers full ownership and control."),
    ("fas fa-handshake", "Collaborative Growth", "We build ecosystems, not empires. Success means strengthening local partners, supporting cooperatives, and ensuring that value is shared equitably across stakeholders."),
    ("fas fa-flask", "Scientific Rigor", "Every recommendation, every prediction, and every automation must be grounded in evidence. We partner with research institutions and validate performance through controlled studies."),
    ("fas fa-globe-asia", "Global Impact", "We develop local solutions that scale worldwide. Technology adapts to regional contexts, languages, and species while maintaining world-class intelligence standards everywhere."),
];

const TIMELINE: [Milestone; 5] = [
    Milestone {
        year: "2020",
        title: "Company Founded",
        description: "AquaCORTEX established with vision to create the world's first Biological AI OS for aquaculture",
    },
    Milestone {
        year: "2021",
        title: "First Commercial Deployments",
        description: "Pilot programs launched in Vietnam, Thailand, and UAE with 50+ farms",
    },
    Milestone {
        year: "2022",
        title: "Platform Expansion & Validation",
        description: "500+ farms onboarded, achieving 40% feed cost reduction and 25% growth rate improvement",
    },
    Milestone {
        year: "2023",
        title: "Regional Scale Achieved",
        description: "Expanded to 12 countries, partnered with national governments and major feed mills",
    },
    Milestone {
        year: "2024",
        title: "Global Growth Phase",
        description: "2,500+ farmers using platform, preparing South Asia and MENA expansion",
    },
];

const TEAM: [Leader; 6] = [
    Leader {
        name: "Dr. Sarah Chen",
        role: "CEO & Co-Founder",
        bio: "Former AI researcher at MIT. Ph.D. in Machine Learning. 15+ years building intelligent systems for complex biological environments.",
    },
    Leader {
        name: "Dr. Rajesh Kumar",
        role: "CTO & Chief Scientist",
        bio: "Marine biologist and aquaculture expert. Ph.D. in Aquatic Ecosystems. Published 40+ papers on sustainable aquaculture systems.",
    },
    Leader {
        name: "Maria Gonzales",
        role: "Chief Operating Officer",
        bio: "20+ years in aquaculture operations management. Former COO at major shrimp producer. Deep expertise in farm optimization.",
    },
    Leader {
        name: "James Thompson",
        role: "Chief Commercial Officer",
        bio: "Global AgTech sales leader. Built and scaled distribution networks across 25+ countries. Expert in emerging market entry.",
    },
    Leader {
        name: "Dr. Nguyen Thi Mai",
        role: "Head of Research & Development",
        bio: "AI/ML specialist focused on aquaculture applications. Ph.D. in Computer Vision. Led development of AquaSense module.",
    },
    Leader {
        name: "Ahmed Al-Rashid",
        role: "VP of Strategic Partnerships",
        bio: "Former government advisor on food security. Extensive network across MENA and South Asian aquaculture sectors.",
    },
];

const AWARDS: [(&str, &str, &str); 4] = [
    ("🏆", "AgTech Innovation Award", "2023"),
    ("🌟", "Best AI Application", "Aquaculture Asia 2023"),
    ("🌱", "Sustainability Leader", "Blue Economy Forum 2022"),
    ("💼", "Impact Investor Award", "ESG Asia Summit 2024"),
];

const RECOGNITION: [(&str, &str, &str); 3] = [
    ("fas fa-book-open", "Published Research", "15+ peer-reviewed papers on AI applications in aquaculture"),
    ("fas fa-shield-alt", "Technology Certifications", "ISO 27001, SOC 2 Type II compliance"),
    ("fas fa-globe", "Strategic Partnerships", "Collaborating with FAO, WorldFish, and research institutes"),
];

/// Initials for the avatar, skipping honorifics like "Dr.".
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|part| !part.ends_with('.'))
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

#[function_component(About)]
pub fn about() -> Html {
    let active_milestone = use_state(|| None::<usize>);

    html! {
        <div class="page about-page">
            <section class="page-header">
                <span class="badge"><i class="fas fa-water"></i>{"About AquaCORTEX"}</span>
                <h1>{"Building the "}<span class="gradient-text">{"Blue Economy OS"}</span></h1>
                <p class="lead">
                    {"Founded in 2020, AquaCORTEX is a pioneering AgTech company on a mission to transform aquaculture through biological AI intelligence. We're building the world's first operating system for the blue economy."}
                </p>
                <div class="stat-grid">
                    <div class="stat">
                        <div class="card-icon"><i class="fas fa-calendar"></i></div>
                        <div class="stat-value">{ FOUNDED }</div>
                        <div class="stat-label">{"Founded"}</div>
                    </div>
                    { for COUNTED_STATS.iter().map(|(icon, value, label)| html! {
                        <div class="stat">
                            <div class="card-icon"><i class={*icon}></i></div>
                            <div class="stat-value"><CountUpValue value={*value} /></div>
                            <div class="stat-label">{ *label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="card-grid two">
                    { for MISSION.iter().map(|(icon, title, text)| html! {
                        <div class="card">
                            <div class="card-icon"><i class={*icon}></i></div>
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Our Journey"}</h2>
                <ol class="timeline">
                    { for TIMELINE.iter().enumerate().map(|(index, m)| {
                        let is_active = *active_milestone == Some(index);
                        let onclick = {
                            let active_milestone = active_milestone.clone();
                            Callback::from(move |_: MouseEvent| {
                                active_milestone.set(if is_active { None } else { Some(index) })
                            })
                        };
                        html! {
                            <li class={classes!("timeline-item", is_active.then_some("active"))} {onclick}>
                                <div class="timeline-marker">{ m.year }</div>
                                <div class="card">
                                    <h3>{ m.title }</h3>
                                    if is_active {
                                        <p>{ m.description }</p>
                                    }
                                </div>
                            </li>
                        }
                    }) }
                </ol>
            </section>

            <section class="section">
                <h2 class="section-title">{"Our Core Values"}</h2>
                <p class="section-lead">
                    {"These principles guide every decision we make, every partnership we form, and every line of code we write."}
                </p>
                <div class="card-grid three">
                    { for VALUES.iter().map(|(icon, title, desc)| html! {
                        <div class="card">
                            <div class="card-icon"><i class={*icon}></i></div>
                            <h3>{ *title }</h3>
                            <p>{ *desc }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Leadership Team"}</h2>
                <p class="section-lead">
                    {"Our team combines deep expertise in artificial intelligence, marine biology, aquaculture operations, and sustainable development."}
                </p>
                <div class="card-grid three">
                    { for TEAM.iter().map(|leader| html! {
                        <div class="card leader">
                            <div class="avatar">{ initials(leader.name) }</div>
                            <h3>{ leader.name }</h3>
                            <p class="card-subtitle">{ leader.role }</p>
                            <p>{ leader.bio }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Achievements & Recognition"}</h2>
                <div class="card-grid four">
                    { for AWARDS.iter().map(|(emoji, title, year)| html! {
                        <div class="card award">
                            <div class="card-emoji">{ *emoji }</div>
                            <h4>{ *title }</h4>
                            <span class="award-year">{ *year }</span>
                        </div>
                    }) }
                </div>
                <div class="card-grid three">
                    { for RECOGNITION.iter().map(|(icon, title, desc)| html! {
                        <div class="card">
                            <div class="card-icon"><i class={*icon}></i></div>
                            <h4>{ *title }</h4>
                            <p>{ *desc }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section cta">
                <h2>{"Join Us in Transforming Aquaculture"}</h2>
                <p>
                    {"Whether you're interested in career opportunities, partnerships, or learning more about our technology, we'd love to connect."}
                </p>
                <div class="hero-cta-group">
                    <Link<Route, ContactQuery>
                        to={Route::Contact}
                        query={Some(ContactQuery::for_category(InquiryCategory::Careers))}
                        classes="btn btn-primary"
                    >
                        {"Explore Careers"}
                    </Link<Route, ContactQuery>>
                    <Link<Route> to={Route::Contact} classes="btn btn-outline">
                        {"Get in Touch"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_honorifics() {
        assert_eq!(initials("Dr. Sarah Chen"), "SC");
        assert_eq!(initials("Maria Gonzales"), "MG");
        assert_eq!(initials("Dr. Nguyen Thi Mai"), "NT");
    }
}
