use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Module {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    details: [(&'static str, &'static str); 3],
    tech_stack: [&'static str; 3],
    stats: [(&'static str, &'static str); 3],
}

const FEATURES: [(&str, &str, &str); 4] = [
    ("fas fa-brain", "AI-Powered", "Deep Learning Models"),
    ("fas fa-shield-alt", "Secure", "End-to-End Encryption"),
    ("fas fa-database", "Scalable", "Cloud Infrastructure"),
    ("fas fa-wifi", "Real-Time", "Live Data Streaming"),
];

const MODULES: [Module; 3] = [
    Module {
        id: "01",
        name: "Precision Vision",
        icon: "fas fa-eye",
        description: "Advanced computer vision algorithms that track biomass, detect disease symptoms, and monitor feeding behavior in real-time.",
        details: [
            ("fas fa-chart-line", "98% Accuracy in Biomass Estimation"),
            ("fas fa-heartbeat", "Early Disease Detection"),
            ("fas fa-brain", "Behavioral Analysis"),
        ],
        tech_stack: ["TensorFlow", "OpenCV", "PyTorch"],
        stats: [("accuracy", "98%"), ("latency", "<50ms"), ("coverage", "24/7")],
    },
    Module {
        id: "02",
        name: "Water Intelligence",
        icon: "fas fa-tint",
        description: "Predictive analytics for water chemistry. Our system forecasts drops in dissolved oxygen or pH swings before they become lethal.",
        details: [
            ("fas fa-heartbeat", "24/7 Water Quality Monitoring"),
            ("fas fa-bolt", "Algal Bloom Prediction"),
            ("fas fa-microchip", "Automated Aeration Control"),
        ],
        tech_stack: ["Machine Learning", "IoT Sensors", "Cloud Analytics"],
        stats: [("sensors", "50+"), ("prediction", "6hrs"), ("uptime", "99.9%")],
    },
    Module {
        id: "03",
        name: "EdgeAI Nodes",
        icon: "fas fa-server",
        description: "Localized intelligence for remote farms. Our Edge nodes process data on-site, ensuring functionality even without internet connectivity.",
        details: [
            ("fas fa-bolt", "Low-Latency Processing"),
            ("fas fa-plug", "Works Offline"),
            ("fas fa-solar-panel", "Solar Powered Options"),
        ],
        tech_stack: ["Edge Computing", "ARM Architecture", "Kubernetes"],
        stats: [("power", "12W"), ("storage", "256GB"), ("nodes", "Unlimited")],
    },
];

#[function_component(Technology)]
pub fn technology() -> Html {
    // Which module card is hovered, for the glow effect
    let hovered = use_state(|| None::<&'static str>);

    html! {
        <div class="page technology-page">
            <div class="grid-backdrop" aria-hidden="true"></div>

            <section class="page-header">
                <span class="badge"><i class="fas fa-microchip"></i>{"Technology Overview"}</span>
                <h1>{"The "}<span class="gradient-text">{"Biological AI"}</span>{" Stack"}</h1>
                <p class="lead">
                    {"A modular operating system designed to digitize biology and automate certainty in aquaculture."}
                </p>
                <div class="pill-row">
                    { for FEATURES.iter().map(|(icon, label, desc)| html! {
                        <div class="pill">
                            <i class={*icon}></i>
                            <div>
                                <div class="pill-label">{ *label }</div>
                                <div class="pill-desc">{ *desc }</div>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section modules">
                { for MODULES.iter().enumerate().map(|(index, module)| {
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        let id = module.id;
                        Callback::from(move |_: MouseEvent| hovered.set(Some(id)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    let active = *hovered == Some(module.id);
                    html! {
                        <div
                            class={classes!("module", (index % 2 == 1).then_some("reverse"), active.then_some("hovered"))}
                            {onmouseenter}
                            {onmouseleave}
                        >
                            <div class="module-visual">
                                <i class={classes!(module.icon, "module-icon")}></i>
                                <span class="module-number">{ module.id }</span>
                                <div class="module-stats">
                                    { for module.stats.iter().map(|(key, value)| html! {
                                        <div class="module-stat">
                                            <div class="stat-value">{ *value }</div>
                                            <div class="stat-label">{ *key }</div>
                                        </div>
                                    }) }
                                </div>
                            </div>
                            <div class="module-copy">
                                <h2>{ module.name }</h2>
                                <p>{ module.description }</p>
                                <ul class="detail-list">
                                    { for module.details.iter().map(|(icon, label)| html! {
                                        <li><i class={*icon}></i>{ *label }</li>
                                    }) }
                                </ul>
                                <div class="tech-stack">
                                    <div class="tech-stack-title">{"Tech Stack"}</div>
                                    { for module.tech_stack.iter().map(|tech| html! {
                                        <span class="tag">{ *tech }</span>
                                    }) }
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </section>

            <section class="section cta">
                <h2>{"Ready to see it in action?"}</h2>
                <p>{"See how our Biological AI stack can revolutionize your aquaculture farm."}</p>
                <Link<Route> to={Route::Contact} classes="btn btn-primary">
                    {"Schedule a Demo"}
                </Link<Route>>
            </section>
        </div>
    }
}
