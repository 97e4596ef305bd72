use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::count_up::CountUpValue;
use crate::components::particles::ParticleBackground;
use crate::contact::InquiryCategory;
use crate::pages::contact::ContactQuery;
use crate::Route;

struct Step {
    emoji: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

struct Stakeholder {
    emoji: &'static str,
    title: &'static str,
    subtitle: &'static str,
    benefits: [&'static str; 3],
}

struct ImpactStat {
    emoji: &'static str,
    value: f64,
    suffix: &'static str,
    label: &'static str,
}

const HOW_IT_WORKS: [Step; 3] = [
    Step {
        emoji: "📊",
        title: "1. Data Collection",
        description: "IoT sensors, manual inputs, and environmental data continuously flow into the system, creating a comprehensive real-time picture of your aquaculture operation.",
        accent: "accent-cyan",
    },
    Step {
        emoji: "🧠",
        title: "2. AI Intelligence Processing",
        description: "Advanced pattern recognition, predictive modeling, and anomaly detection transform raw data into actionable insights and autonomous decisions.",
        accent: "accent-violet",
    },
    Step {
        emoji: "⚡",
        title: "3. Autonomous Action",
        description: "Automated feeding, intelligent alerts, and expert recommendations execute continuously, optimizing operations 24/7 without human intervention.",
        accent: "accent-orange",
    },
];

const AI_ENGINE: [(&str, &str, &str); 3] = [
    ("📥", "Data Ingestion", "Multi-source aggregation across farms, hatcheries, environmental sensors, and operational systems."),
    ("💡", "Insight Generation", "Real-time analysis, pattern learning, and predictive forecasting powered by advanced machine learning."),
    ("🎯", "Action Execution", "Automated responses, human-augmented decisions, and continuous optimization for maximum efficiency."),
];

const STAKEHOLDERS: [Stakeholder; 6] = [
    Stakeholder {
        emoji: "👨‍🌾",
        title: "Farmers",
        subtitle: "Autonomous farm optimization",
        benefits: [
            "Reduced mortality through early intervention",
            "Optimized feed efficiency",
            "Labor automation for 24/7 monitoring",
        ],
    },
    Stakeholder {
        emoji: "🏛️",
        title: "Governments",
        subtitle: "Food security intelligence",
        benefits: [
            "Policy insights and data-driven decisions",
            "Sustainability tracking and reporting",
            "Economic development monitoring",
        ],
    },
    Stakeholder {
        emoji: "💼",
        title: "Investors",
        subtitle: "Transparent impact metrics",
        benefits: [
            "Real-time portfolio performance visibility",
            "ESG alignment and impact measurement",
            "Predictive ROI modeling",
        ],
    },
    Stakeholder {
        emoji: "🐟",
        title: "Hatcheries",
        subtitle: "Growth prediction accuracy",
        benefits: [
            "Demand forecasting from connected farms",
            "Quality optimization and consistency",
            "Supply chain coordination",
        ],
    },
    Stakeholder {
        emoji: "🏭",
        title: "Feed Mills",
        subtitle: "Demand-driven production",
        benefits: [
            "Waste reduction through accurate forecasting",
            "Formulation optimization based on performance",
            "Distribution intelligence",
        ],
    },
    Stakeholder {
        emoji: "🌾",
        title: "Small-Scale Farmers",
        subtitle: "Democratized access to AI",
        benefits: [
            "Expert-level recommendations for all",
            "Income stability and reduced risk",
            "Pathway to commercial viability",
        ],
    },
];

const IMPACTS: [ImpactStat; 4] = [
    ImpactStat { emoji: "🌍", value: 50_000.0, suffix: "", label: "Metric Tons Protein Enhanced" },
    ImpactStat { emoji: "👥", value: 2_500.0, suffix: "", label: "Farmers Empowered" },
    ImpactStat { emoji: "🌱", value: 35.0, suffix: "%", label: "Feed Waste Reduction" },
    ImpactStat { emoji: "🎯", value: 12.0, suffix: "", label: "Countries Deployed" },
];

const CASE_STUDIES: [(&str, &str, &str); 3] = [
    ("🔄", "Smart Operations", "A modern digital platform designed to streamline workflows, enhance visibility, and support stronger operational control across day-to-day activities."),
    ("📈", "Built to Scale", "A flexible and adaptable system designed to support both growing and large-scale deployments without compromising performance or usability."),
    ("📊", "Data-Driven Insights", "Transforms complex operational data into clear, actionable insights that support planning, decision-making, and long-term strategy."),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="page home-page">
            <header class="hero">
                <ParticleBackground />
                <div class="orb orb-cyan"></div>
                <div class="orb orb-violet"></div>
                <div class="hero-content">
                    <h1 class="hero-title gradient-text">{"AquaCortex"}</h1>
                    <p class="hero-subtitle">{"AI-Driven Aquaculture Intelligence"}</p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Contact} classes="btn btn-primary">
                            {"Request a Demo "}<i class="fas fa-arrow-right"></i>
                        </Link<Route>>
                        <Link<Route, ContactQuery>
                            to={Route::Contact}
                            query={Some(ContactQuery::for_category(InquiryCategory::Investor))}
                            classes="btn btn-outline"
                        >
                            {"For Investors"}
                        </Link<Route, ContactQuery>>
                        <Link<Route> to={Route::Technology} classes="btn btn-ghost">
                            {"Explore Technology"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <section class="section">
                <h2 class="section-title">{"How AquaCortex Works"}</h2>
                <div class="card-grid three">
                    { for HOW_IT_WORKS.iter().map(|step| html! {
                        <div class={classes!("card", step.accent)}>
                            <div class="card-emoji">{ step.emoji }</div>
                            <h3>{ step.title }</h3>
                            <p>{ step.description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section ai-engine">
                <h2 class="section-title">{"Unified AI Engine"}</h2>
                <div class="split">
                    <div class="engine-steps">
                        { for AI_ENGINE.iter().map(|(emoji, title, desc)| html! {
                            <div class="engine-step">
                                <span class="card-emoji">{ *emoji }</span>
                                <div>
                                    <h4>{ *title }</h4>
                                    <p>{ *desc }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="engine-visual" aria-hidden="true">
                        <div class="engine-glow"></div>
                        <div class="engine-core">{"🧠"}</div>
                    </div>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Built for Every Stakeholder"}</h2>
                <div class="card-grid three">
                    { for STAKEHOLDERS.iter().map(|s| html! {
                        <div class="card stakeholder">
                            <div class="card-emoji">{ s.emoji }</div>
                            <h3>{ s.title }</h3>
                            <p class="card-subtitle">{ s.subtitle }</p>
                            <ul class="check-list">
                                { for s.benefits.iter().map(|b| html! {
                                    <li><i class="fas fa-check-circle"></i>{ *b }</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section impact-strip">
                <h2 class="section-title">{"Measurable Impact"}</h2>
                <div class="stat-grid">
                    { for IMPACTS.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="card-emoji">{ stat.emoji }</div>
                            <div class="stat-value">
                                <CountUpValue value={stat.value} suffix={stat.suffix} />
                            </div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Why AquaCortex"}</h2>
                <div class="card-grid three">
                    { for CASE_STUDIES.iter().map(|(emoji, title, desc)| html! {
                        <div class="card">
                            <div class="card-emoji">{ *emoji }</div>
                            <h3>{ *title }</h3>
                            <p>{ *desc }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section cta">
                <h2>{"Ready to Transform Your Operations?"}</h2>
                <p>{"See how the AquaCortex Biological AI stack can work for your farm."}</p>
                <Link<Route> to={Route::Contact} classes="btn btn-primary">
                    {"Get Started"}
                </Link<Route>>
            </section>
        </div>
    }
}
