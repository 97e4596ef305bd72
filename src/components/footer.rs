use chrono::Datelike;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::contact::{InquiryCategory, NewsletterAction, NewsletterSignup};
use crate::pages::contact::ContactQuery;
use crate::theme::ThemePicker;
use crate::utils::timer::{BrowserScheduler, ResetTimer};
use crate::Route;

const SOCIAL: [(&str, &str); 4] = [
    ("fab fa-twitter", "Twitter"),
    ("fab fa-linkedin", "LinkedIn"),
    ("fab fa-github", "GitHub"),
    ("fab fa-youtube", "YouTube"),
];

const BADGES: [(&str, &str); 3] = [
    ("fas fa-award", "ISO Certified"),
    ("fas fa-shield-alt", "SOC 2 Compliant"),
    ("fas fa-globe", "Global Coverage"),
];

#[function_component(Newsletter)]
fn newsletter() -> Html {
    let signup = use_reducer(NewsletterSignup::default);

    // Reset the thank-you state after a few seconds; unmount cancels it
    {
        let dispatcher = signup.dispatcher();
        use_effect_with_deps(
            move |ticket| {
                let mut timer = ResetTimer::new(BrowserScheduler);
                if let Some(ticket) = *ticket {
                    timer.arm(config::NEWSLETTER_ACK_MS, move || {
                        dispatcher.dispatch(NewsletterAction::AcknowledgmentElapsed(ticket))
                    });
                }
                move || drop(timer)
            },
            signup.pending_acknowledgment(),
        );
    }

    let oninput = {
        let signup = signup.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            signup.dispatch(NewsletterAction::SetEmail(input.value()));
        })
    };

    let onsubmit = {
        let signup = signup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            signup.dispatch(NewsletterAction::Subscribe);
        })
    };

    let subscribed = signup.is_subscribed();

    html! {
        <div class="newsletter">
            <div class="newsletter-copy">
                <span class="badge"><i class="fas fa-star"></i>{"Stay Updated"}</span>
                <h3>{"Join the Blue Revolution"}</h3>
                <p>{"Get insights on aquaculture tech, sustainability trends, and platform updates."}</p>
            </div>
            <form class="newsletter-form" onsubmit={onsubmit} novalidate=true>
                <input
                    type="email"
                    value={signup.email().to_string()}
                    oninput={oninput}
                    placeholder="Enter your email"
                    disabled={subscribed}
                />
                <button type="submit" class={classes!("subscribe-btn", subscribed.then_some("done"))} disabled={subscribed}>
                    if subscribed {
                        <i class="fas fa-check-circle"></i>{" Subscribed"}
                    } else {
                        {"Subscribe "}<i class="fas fa-arrow-right"></i>
                    }
                </button>
                if let Some(error) = signup.error() {
                    <p class="field-error">{ error.to_string() }</p>
                }
                if subscribed {
                    <p class="newsletter-thanks">{"Thank you for subscribing! Check your email."}</p>
                }
            </form>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <Newsletter />

                <div class="footer-grid">
                    <div class="footer-brand">
                        <img src="/assets/aquacortex-logo.svg" alt="AquaCORTEX" class="logo" />
                        <p>{"The biological AI operating system for intelligent, sustainable aquaculture."}</p>
                        <div class="footer-badges">
                            { for BADGES.iter().map(|(icon, text)| html! {
                                <span class="footer-badge"><i class={*icon}></i>{ *text }</span>
                            }) }
                        </div>
                    </div>

                    <div class="footer-column">
                        <h4>{"Platform"}</h4>
                        <Link<Route> to={Route::Technology}>{"Technology"}</Link<Route>>
                        <Link<Route> to={Route::Solutions}>{"Solutions"}</Link<Route>>
                        <Link<Route> to={Route::Impact}>{"Impact"}</Link<Route>>
                        <Link<Route> to={Route::Expansion}>{"Global Expansion"}</Link<Route>>
                    </div>

                    <div class="footer-column">
                        <h4>{"Company"}</h4>
                        <Link<Route> to={Route::About}>{"About Us"}</Link<Route>>
                        <Link<Route, ContactQuery> to={Route::Contact} query={Some(ContactQuery::for_category(InquiryCategory::Careers))}>
                            {"Careers"}
                        </Link<Route, ContactQuery>>
                        <Link<Route, ContactQuery> to={Route::Contact} query={Some(ContactQuery::for_category(InquiryCategory::Investor))}>
                            {"Investors"}
                        </Link<Route, ContactQuery>>
                        <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                    </div>

                    <div class="footer-column">
                        <h4>{"Get in Touch"}</h4>
                        <a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>
                            <i class="fas fa-envelope"></i>{ config::SUPPORT_EMAIL }
                        </a>
                        <a href={config::SUPPORT_PHONE_HREF}>
                            <i class="fas fa-phone"></i>{ config::SUPPORT_PHONE }
                        </a>
                        <span><i class="fas fa-map-marker-alt"></i>{ config::HEADQUARTERS }</span>
                    </div>
                </div>

                <div class="footer-bottom">
                    <span>{ format!("© {} AquaCORTEX. All rights reserved.", year) }</span>
                    <ThemePicker />
                    <div class="footer-social">
                        { for SOCIAL.iter().map(|(icon, label)| html! {
                            <a href="#" aria-label={*label}><i class={*icon}></i></a>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
