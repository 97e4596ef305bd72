use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::count_up::CountUpValue;
use crate::Route;

struct Phase {
    phase: &'static str,
    years: &'static str,
    region: &'static str,
    icon: &'static str,
    description: &'static str,
    targets: [&'static str; 3],
    markets: &'static [(&'static str, &'static str)],
}

struct Projection {
    icon: &'static str,
    value: f64,
    decimals: usize,
    suffix: &'static str,
    label: &'static str,
}

const PHASES: [Phase; 5] = [
    Phase {
        phase: "PHASE 1",
        years: "YEAR 1-2",
        region: "Southeast Asia 🇻🇳 🇹🇭 🇮🇩",
        icon: "fas fa-bolt",
        description: "The heartland of global aquaculture. This region produces over 40% of the world's farmed seafood. Our focus is on digitizing high-density shrimp and pangasius farms.",
        targets: [
            "Deploy Precision Vision in Mekong Delta",
            "Establish core datasets for tropical species",
            "Partner with feed mills for distribution",
        ],
        markets: &[
            ("Vietnam", "Shrimp & Pangasius"),
            ("Thailand", "Marine Shrimp"),
            ("Indonesia", "Tilapia & Shrimp"),
            ("Philippines", "Coastal Species"),
        ],
    },
    Phase {
        phase: "PHASE 2",
        years: "YEAR 2-3",
        region: "South Asia 🇮🇳 🇧🇩 🇱🇰",
        icon: "fas fa-users",
        description: "Focusing on massive scale. India is the world's 2nd largest producer. We are deploying 'Lite' mobile-first tools to modernize millions of smallholder carp and shrimp farmers.",
        targets: [
            "Launch AquaCORTEX Lite App",
            "Vernacular language support (Hindi, Bengali)",
            "SMS-based advisory services",
        ],
        markets: &[
            ("India", "Carp & Shrimp"),
            ("Bangladesh", "Rapid Growth"),
            ("Sri Lanka", "Export Focus"),
        ],
    },
    Phase {
        phase: "PHASE 3",
        years: "YEAR 3-4",
        region: "Middle East & North Africa 🇸🇦 🇦🇪 🇪🇬",
        icon: "fas fa-bullseye",
        description: "High-value markets with strong food security mandates. Governments are investing heavily in desert aquaculture and RAS technologies to secure protein independence.",
        targets: [
            "Integrate with RAS facility SCADA systems",
            "Desert aquaculture optimization",
            "Government food security partnerships",
        ],
        markets: &[
            ("Saudi Arabia", "Vision 2030"),
            ("UAE", "Tech Innovation"),
            ("Egypt", "Africa's #1 Producer"),
            ("Morocco", "Premium Markets"),
        ],
    },
    Phase {
        phase: "PHASE 4",
        years: "YEAR 4-5",
        region: "Latin America 🇪🇨 🇨🇱 🇧🇷",
        icon: "fas fa-shield-alt",
        description: "Sophisticated, export-oriented operations. Farms here require enterprise-grade compliance, traceability, and environmental monitoring features.",
        targets: [
            "Sustainability certification automation",
            "Supply chain traceability integration",
            "Large-scale disease monitoring networks",
        ],
        markets: &[
            ("Ecuador", "#1 Shrimp Exporter"),
            ("Chile", "Salmon Leader"),
            ("Brazil", "Inland Tilapia"),
            ("Mexico", "Growth Market"),
        ],
    },
    Phase {
        phase: "PHASE 5",
        years: "YEAR 5+",
        region: "Global Scale 🌍",
        icon: "fas fa-globe",
        description: "Establishing AquaCORTEX as the universal operating system for the blue economy. Expanding into cold-water marine species and offshore systems.",
        targets: [
            "Salmonid algorithmic models",
            "Offshore rig remote monitoring",
            "Global carbon credit marketplace",
        ],
        markets: &[
            ("Sub-Saharan Africa", "Food Security"),
            ("Oceania", "Premium Seafood"),
            ("Europe", "High-Tech Standards"),
            ("North America", "Sustainable Systems"),
        ],
    },
];

const PROJECTIONS: [Projection; 4] = [
    Projection { icon: "fas fa-chart-bar", value: 11_400.0, decimals: 0, suffix: "+", label: "Farms Connected" },
    Projection { icon: "fas fa-chart-line", value: 1.5, decimals: 1, suffix: "M+", label: "Metric Tons Produced" },
    Projection { icon: "fas fa-users", value: 45_600.0, decimals: 0, suffix: "", label: "Farmers Empowered" },
    Projection { icon: "fas fa-globe", value: 22.0, decimals: 0, suffix: "", label: "Countries Deployed" },
];

const OUTCOMES: [(&str, &str, &str); 3] = [
    ("fas fa-chart-line", "$1.5B+", "Additional Farmer Income"),
    ("fas fa-users", "50,000+", "Jobs Created"),
    ("fas fa-seedling", "500k MT", "Feed Waste Prevented"),
];

#[function_component(GlobalExpansion)]
pub fn global_expansion() -> Html {
    let hovered = use_state(|| None::<usize>);

    html! {
        <div class="page expansion-page">
            <section class="page-header">
                <span class="badge"><i class="fas fa-globe"></i>{"Global Expansion Strategy"}</span>
                <h1>{"Scaling "}<span class="gradient-text">{"Intelligent Aquaculture"}</span></h1>
                <p class="lead">
                    {"From the Mekong Delta to the Fjords of Norway, we are executing a phased strategy to digitize the world's most vital protein source."}
                </p>
                <div class="stat-grid">
                    { for PROJECTIONS.iter().map(|p| html! {
                        <div class="stat">
                            <div class="card-icon"><i class={p.icon}></i></div>
                            <div class="stat-value">
                                <CountUpValue value={p.value} decimals={p.decimals} suffix={p.suffix} />
                            </div>
                            <div class="stat-label">{ p.label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Key Milestones"}</h2>
                <ol class="timeline">
                    { for PHASES.iter().enumerate().map(|(index, phase)| {
                        let onmouseenter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                        };
                        let onmouseleave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        html! {
                            <li
                                class={classes!("timeline-item", (*hovered == Some(index)).then_some("hovered"))}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <div class="timeline-marker"><i class={phase.icon}></i></div>
                                <div class="card phase">
                                    <div class="phase-meta">
                                        <span class="tag">{ phase.phase }</span>
                                        <span class="phase-years">{ phase.years }</span>
                                    </div>
                                    <h3>{ phase.region }</h3>
                                    <p>{ phase.description }</p>
                                    <ul class="check-list">
                                        { for phase.targets.iter().map(|t| html! {
                                            <li><i class="fas fa-check-circle"></i>{ *t }</li>
                                        }) }
                                    </ul>
                                    <div class="markets">
                                        { for phase.markets.iter().map(|(country, focus)| html! {
                                            <div class="market">
                                                <strong>{ *country }</strong>
                                                <span>{ *focus }</span>
                                            </div>
                                        }) }
                                    </div>
                                </div>
                            </li>
                        }
                    }) }
                </ol>
            </section>

            <section class="section">
                <div class="card projected">
                    <h2>{"Projected Global Impact"}</h2>
                    <p>
                        {"By scaling our technology across these key regions, we aim to generate over "}
                        <strong>{"$1.5 Billion"}</strong>
                        {" in additional income for farmers and prevent "}
                        <strong>{"500,000"}</strong>
                        {" metric tons of feed waste."}
                    </p>
                    <div class="card-grid three">
                        { for OUTCOMES.iter().map(|(icon, label, desc)| html! {
                            <div class="outcome">
                                <i class={*icon}></i>
                                <div class="stat-value">{ *label }</div>
                                <div class="stat-label">{ *desc }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section cta">
                <h2>{"Expand With Us"}</h2>
                <p>{"Partner with us to bring intelligent aquaculture to your region."}</p>
                <Link<Route> to={Route::Contact} classes="btn btn-primary">
                    {"Become a Partner"}
                </Link<Route>>
            </section>
        </div>
    }
}
