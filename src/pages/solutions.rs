use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Solution {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
    features: [&'static str; 3],
    stats: [(&'static str, &'static str); 3],
}

const HIGHLIGHTS: [(&str, &str, &str); 4] = [
    ("fas fa-magic", "AI-Powered Insights", "Real-time analytics"),
    ("fas fa-shield-alt", "Secure & Reliable", "99.9% uptime"),
    ("fas fa-chart-line", "Proven Results", "30% yield increase"),
    ("fas fa-bolt", "Fast Deployment", "< 24 hours"),
];

const SOLUTIONS: [Solution; 5] = [
    Solution {
        icon: "fas fa-anchor",
        title: "Cage Farms",
        description: "Offshore and near-shore cage monitoring systems. Track fish behavior and secure assets in open water environments.",
        accent: "accent-cyan",
        features: ["Biomass Estimation", "Net Integrity Checks", "Storm Alerts"],
        stats: [("deployment", "Ocean"), ("monitoring", "24/7"), ("range", "5km")],
    },
    Solution {
        icon: "fas fa-recycle",
        title: "Recirculating Systems (RAS)",
        description: "Precision control for indoor farming. Maintain perfect water chemistry in high-density closed-loop environments.",
        accent: "accent-violet",
        features: ["Ammonia/Nitrite Real-time Tracking", "Automated Feeding", "Energy Optimization"],
        stats: [("efficiency", "98%"), ("sensors", "50+"), ("uptime", "99.9%")],
    },
    Solution {
        icon: "fas fa-fish",
        title: "Hatcheries",
        description: "Ensure the highest survival rates for fry and fingerlings. Manage broodstock health and larval development stages.",
        accent: "accent-emerald",
        features: ["Larval Counting", "Micro-feed Management", "Genetic Tracking Data"],
        stats: [("survival", "95%"), ("accuracy", "99%"), ("capacity", "1M+")],
    },
    Solution {
        icon: "fas fa-landmark",
        title: "Governments & Regulators",
        description: "Macro-level insights for national food security. Monitor regional production, disease outbreaks, and environmental compliance.",
        accent: "accent-orange",
        features: ["Zonal Disease Mapping", "License Compliance", "Yield Forecasting"],
        stats: [("coverage", "National"), ("farms", "1000+"), ("reports", "Real-time")],
    },
    Solution {
        icon: "fas fa-users",
        title: "Small-Scale Farmers",
        description: "Affordable, mobile-first tools effectively digitizing the unorganized sector. Bringing enterprise-grade tech to community ponds.",
        accent: "accent-cyan",
        features: ["Mobile App Control", "SMS Alerts", "Community Knowledge Sharing"],
        stats: [("cost", "Low"), ("access", "Mobile"), ("reach", "Global")],
    },
];

#[function_component(Solutions)]
pub fn solutions() -> Html {
    html! {
        <div class="page solutions-page">
            <section class="page-header">
                <span class="badge"><i class="fas fa-layer-group"></i>{"Industry Solutions"}</span>
                <h1>{"Built for "}<span class="gradient-text">{"Every Farm"}</span></h1>
                <p class="lead">
                    {"Whether you operate a high-tech RAS facility or a traditional earthen pond, AquaCORTEX adapts to your infrastructure."}
                </p>
                <div class="pill-row">
                    { for HIGHLIGHTS.iter().map(|(icon, label, value)| html! {
                        <div class="pill">
                            <i class={*icon}></i>
                            <div>
                                <div class="pill-label">{ *label }</div>
                                <div class="pill-desc">{ *value }</div>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="card-grid three">
                    { for SOLUTIONS.iter().map(|s| html! {
                        <div class={classes!("card", "solution", s.accent)}>
                            <div class="card-icon"><i class={s.icon}></i></div>
                            <h3>{ s.title }</h3>
                            <p>{ s.description }</p>
                            <ul class="check-list">
                                { for s.features.iter().map(|f| html! {
                                    <li><i class="fas fa-check-circle"></i>{ *f }</li>
                                }) }
                            </ul>
                            <div class="mini-stats">
                                { for s.stats.iter().map(|(key, value)| html! {
                                    <div class="mini-stat">
                                        <div class="stat-value">{ *value }</div>
                                        <div class="stat-label">{ *key }</div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section cta">
                <h2>{"Find Your Perfect Solution"}</h2>
                <p>{"Not sure which solution fits your needs? Let our experts guide you to the perfect AquaCORTEX configuration."}</p>
                <div class="hero-cta-group">
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">
                        {"Schedule Consultation"}
                    </Link<Route>>
                    <Link<Route> to={Route::Technology} classes="btn btn-outline">
                        {"Explore the Stack"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
