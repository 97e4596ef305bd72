use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::count_up::CountUpValue;
use crate::Route;

struct Metric {
    value: f64,
    suffix: &'static str,
    label: &'static str,
}

struct Pillar {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    metrics: &'static [Metric],
}

const PILLARS: [Pillar; 4] = [
    Pillar {
        icon: "fas fa-globe-americas",
        title: "Global Food Security",
        description: "By 2050, the world will need 70% more food. Wild catch has plateaued. Aquaculture must fill the gap. Our AI ensures that every harvest is maximized, reducing the volatility of global protein supply.",
        metrics: &[
            Metric { value: 30.0, suffix: "%", label: "Productivity Boost" },
            Metric { value: 15.0, suffix: "%", label: "Mortality Reduction" },
            Metric { value: 10_000.0, suffix: "+", label: "Smallholders Supported" },
        ],
    },
    Pillar {
        icon: "fas fa-leaf",
        title: "Environmental Sustainability",
        description: "Transforming aquaculture from an extractive industry into a regenerative one. We minimize chemical usage and optimize resource consumption to protect our oceans.",
        metrics: &[
            Metric { value: 45.0, suffix: "%", label: "Chemical Reduction" },
            Metric { value: 40.0, suffix: "%", label: "Lower Carbon Footprint" },
            Metric { value: 500.0, suffix: " km²", label: "Ecosystem Monitored" },
        ],
    },
    Pillar {
        icon: "fas fa-chart-line",
        title: "Economic Development",
        description: "Empowering farmers with data-driven assets. We turn accurate biological data into bankable collateral, unlocking financial inclusion for thousands.",
        metrics: &[
            Metric { value: 50.0, suffix: "%", label: "Income Improvement" },
            Metric { value: 20.0, suffix: "%", label: "Feed Waste Reduction" },
            Metric { value: 25.0, suffix: "M+", label: "Economic Value Generated" },
        ],
    },
    Pillar {
        icon: "fas fa-book-open",
        title: "Knowledge Equity",
        description: "Democratizing access to expert agronomy. Our platform bridges the gap between industrial science and small-scale application.",
        metrics: &[
            Metric { value: 5_000.0, suffix: "+", label: "Advisory Interventions" },
            Metric { value: 1_000.0, suffix: "+", label: "Peer Connections" },
        ],
    },
];

const VISION: [(&str, &str, &str); 4] = [
    ("fas fa-anchor", "Aquaculture 2.0", "Data-driven precision operations."),
    ("fas fa-hands-helping", "Farmer Empowerment", "Leveling the playing field."),
    ("fas fa-bullseye", "Food Security", "Feeding 10 billion people."),
    ("fas fa-water", "Eco Stewardship", "Preserving marine life."),
];

#[function_component(Impact)]
pub fn impact() -> Html {
    let active = use_state(|| 0usize);
    let pillar = &PILLARS[(*active).min(PILLARS.len() - 1)];

    html! {
        <div class="page impact-page">
            <section class="page-header">
                <span class="badge"><i class="fas fa-heart"></i>{"Impact & Vision"}</span>
                <h1>{"Intelligence for a "}<span class="gradient-text">{"Blue Future"}</span></h1>
                <div class="mission card">
                    <h3>{"Core Mission"}</h3>
                    <p>
                        {"We believe the future of food is blue. But ensuring that future requires a fundamental shift from intuition to intelligence."}
                    </p>
                    <p>
                        {"By digitizing biological assets, we aren't just improving farm yields; we are validating the entire value chain, reducing risk for insurers, and proving sustainability claims for retailers."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="tabs" role="tablist">
                    { for PILLARS.iter().enumerate().map(|(index, p)| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(index))
                        };
                        html! {
                            <button
                                class={classes!("tab", (*active == index).then_some("active"))}
                                role="tab"
                                {onclick}
                            >
                                <i class={p.icon}></i>{ p.title }
                            </button>
                        }
                    }) }
                </div>

                // Keyed so the counters restart when the tab changes
                <div class="card pillar" key={pillar.title}>
                    <h2>{ pillar.title }</h2>
                    <p>{ pillar.description }</p>
                    <div class="stat-grid">
                        { for pillar.metrics.iter().map(|m| html! {
                            <div class="stat">
                                <div class="stat-value">
                                    <CountUpValue value={m.value} suffix={m.suffix} />
                                </div>
                                <div class="stat-label">{ m.label }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"The Vision"}</h2>
                <div class="card-grid four">
                    { for VISION.iter().map(|(icon, title, desc)| html! {
                        <div class="card">
                            <div class="card-icon"><i class={*icon}></i></div>
                            <h3>{ *title }</h3>
                            <p>{ *desc }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section cta">
                <h2>{"Join the Blue Revolution"}</h2>
                <p>{"Be part of the movement transforming aquaculture into a sustainable, intelligent, and profitable industry."}</p>
                <Link<Route> to={Route::Contact} classes="btn btn-primary">
                    {"Get Involved"}
                </Link<Route>>
            </section>
        </div>
    }
}
