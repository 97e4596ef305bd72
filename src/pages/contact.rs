use serde::{Deserialize, Serialize};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::history::Location;
use yew_router::prelude::*;

use crate::config;
use crate::contact::{FieldKind, FieldSpec, InquiryAction, InquiryCategory, InquiryForm};
use crate::utils::timer::{BrowserScheduler, ResetTimer};

/// Query string of the contact route, e.g. `/contact?type=investor`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactQuery {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ContactQuery {
    pub fn for_category(category: InquiryCategory) -> Self {
        Self {
            category: Some(category.as_str().to_string()),
        }
    }

    /// Unknown or missing values fall back to the default tab.
    pub fn category(&self) -> Option<InquiryCategory> {
        self.category.as_deref().and_then(InquiryCategory::from_query)
    }
}

const SOCIAL: [(&str, &str, &str); 3] = [
    ("fab fa-linkedin", "LinkedIn", "https://www.linkedin.com/company/aquacortex"),
    ("fab fa-twitter", "Twitter", "https://twitter.com/aquacortex"),
    ("fab fa-youtube", "YouTube", "https://www.youtube.com/@aquacortex"),
];

fn requested_category(location: Option<Location>) -> Option<InquiryCategory> {
    let query = location?.query::<ContactQuery>().ok()?;
    query.category()
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    spec: &'static FieldSpec,
    value: AttrValue,
    error: Option<AttrValue>,
    on_change: Callback<(&'static str, String)>,
}

#[function_component(FormField)]
fn form_field(props: &FieldProps) -> Html {
    let spec = props.spec;
    let name = spec.name;
    let invalid = props.error.is_some();
    let placeholder = spec.placeholder.unwrap_or_default();

    let control = match spec.kind {
        FieldKind::TextArea { rows } => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                on_change.emit((name, input.value()));
            });
            html! {
                <textarea
                    id={name}
                    name={name}
                    rows={rows.to_string()}
                    placeholder={placeholder}
                    value={props.value.clone()}
                    aria-invalid={invalid.to_string()}
                    {oninput}
                />
            }
        }
        FieldKind::Select { prompt, options } => {
            let on_change = props.on_change.clone();
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                on_change.emit((name, select.value()));
            });
            html! {
                <select id={name} name={name} aria-invalid={invalid.to_string()} {onchange}>
                    <option value="" selected={props.value.is_empty()}>{ prompt }</option>
                    { for options.iter().map(|o| html! {
                        <option value={o.value} selected={props.value.as_str() == o.value}>
                            { o.label }
                        </option>
                    }) }
                </select>
            }
        }
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Tel => "tel",
                FieldKind::Url => "url",
                _ => "text",
            };
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit((name, input.value()));
            });
            html! {
                <input
                    id={name}
                    name={name}
                    type={input_type}
                    placeholder={placeholder}
                    value={props.value.clone()}
                    aria-invalid={invalid.to_string()}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class={classes!("form-field", invalid.then_some("invalid"))}>
            <label for={name}>
                { spec.label }
                if spec.required {
                    <span class="required">{" *"}</span>
                }
            </label>
            { control }
            if let Some(error) = &props.error {
                <p class="field-error"><i class="fas fa-exclamation-circle"></i>{ error.clone() }</p>
            }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let requested = requested_category(use_location());
    let form = use_reducer(move || InquiryForm::new(requested.unwrap_or_default()));

    // Follow `?type=` when it changes while the page is mounted
    {
        let form = form.dispatcher();
        use_effect_with_deps(
            move |requested| {
                if let Some(category) = *requested {
                    form.dispatch(InquiryAction::Select(category));
                }
                || ()
            },
            requested,
        );
    }

    // Hide the thank-you note after a delay; a newer submit re-arms it
    {
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |ticket| {
                let mut timer = ResetTimer::new(BrowserScheduler);
                if let Some(ticket) = *ticket {
                    timer.arm(config::INQUIRY_ACK_MS, move || {
                        dispatcher.dispatch(InquiryAction::AcknowledgmentElapsed(ticket))
                    });
                }
                move || drop(timer)
            },
            form.pending_acknowledgment(),
        );
    }

    let on_change = {
        let form = form.dispatcher();
        Callback::from(move |(name, value): (&'static str, String)| {
            form.dispatch(InquiryAction::SetField { name, value })
        })
    };

    let onsubmit = {
        let form = form.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(InquiryAction::Submit);
        })
    };

    let onclear = {
        let form = form.dispatcher();
        Callback::from(move |_: MouseEvent| form.dispatch(InquiryAction::Reset))
    };

    let active = form.active_category();

    let tabs = InquiryCategory::ALL.iter().map(|&category| {
        let onclick = {
            let form = form.dispatcher();
            Callback::from(move |_: MouseEvent| form.dispatch(InquiryAction::Select(category)))
        };
        html! {
            <button
                type="button"
                class={classes!("inquiry-tab", category.accent(), (category == active).then_some("active"))}
                role="tab"
                aria-selected={(category == active).to_string()}
                {onclick}
            >
                <span class="card-emoji">{ category.emoji() }</span>
                <span class="inquiry-tab-title">{ category.title() }</span>
                <span class="inquiry-tab-subtitle">{ category.subtitle() }</span>
            </button>
        }
    });

    let fields = form.visible_fields().iter().map(|spec| {
        html! {
            <FormField
                key={spec.name}
                spec={spec}
                value={AttrValue::from(form.field(spec.name).unwrap_or_default().to_string())}
                error={form.issue(spec.name).map(|issue| AttrValue::from(issue.to_string()))}
                on_change={on_change.clone()}
            />
        }
    });

    html! {
        <div class="page contact-page">
            <section class="page-header">
                <span class="badge"><i class="fas fa-magic"></i>{"Get in Touch"}</span>
                <h1>{"Let's Build the "}<span class="gradient-text">{"Future of Aquaculture"}</span></h1>
                <p class="lead">
                    {"Choose your engagement path below. We're here to help farmers, investors, governments, and partners transform aquaculture."}
                </p>
            </section>

            <section class="section">
                <div class="inquiry-tabs" role="tablist">
                    { for tabs }
                </div>

                <div class="contact-layout">
                    <div class={classes!("card", "inquiry-card", active.accent())}>
                        <h2>{ active.emoji() }{" "}{ active.title() }</h2>
                        <p class="card-subtitle">{ active.subtitle() }</p>

                        if form.is_acknowledged() {
                            <div class="form-success" role="status">
                                <i class="fas fa-check-circle"></i>
                                {"Thank you! We've received your message and will get back to you shortly."}
                            </div>
                        }

                        <form class="inquiry-form" {onsubmit} novalidate=true>
                            { for fields }
                            <div class="form-actions">
                                <button type="submit" class={classes!("btn", "btn-primary", active.accent())}>
                                    { format!("Submit {}", active.title()) }{" "}<i class="fas fa-arrow-right"></i>
                                </button>
                                <button type="button" class="btn btn-outline" onclick={onclear}>
                                    <i class="fas fa-eraser"></i>{" Clear"}
                                </button>
                            </div>
                        </form>
                    </div>

                    <aside class="contact-aside">
                        <div class="card">
                            <h3>{"Contact Information"}</h3>
                            <a class="contact-line" href={format!("mailto:{}", config::SUPPORT_EMAIL)}>
                                <i class="fas fa-envelope"></i>{ config::SUPPORT_EMAIL }
                            </a>
                            <a class="contact-line" href={config::SUPPORT_PHONE_HREF}>
                                <i class="fas fa-phone"></i>{ config::SUPPORT_PHONE }
                            </a>
                            <span class="contact-line">
                                <i class="fas fa-map-marker-alt"></i>{ config::HEADQUARTERS }
                            </span>
                        </div>
                        <div class="card">
                            <h3>{"Follow Us"}</h3>
                            <div class="footer-social">
                                { for SOCIAL.iter().map(|(icon, label, href)| html! {
                                    <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*label}>
                                        <i class={*icon}></i>
                                    </a>
                                }) }
                            </div>
                        </div>
                        <p class="privacy-note">
                            <i class="fas fa-shield-alt"></i>
                            {"All information submitted is handled according to our Privacy Policy. We respect your data and will only use it to respond to your inquiry."}
                        </p>
                    </aside>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_uses_type_key() {
        let query = ContactQuery::for_category(InquiryCategory::Government);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "government" }));
    }

    #[test]
    fn unknown_query_category_is_ignored() {
        let query = ContactQuery {
            category: Some("press".into()),
        };
        assert_eq!(query.category(), None);
        assert_eq!(ContactQuery::default().category(), None);
    }

    #[test]
    fn query_category_is_case_insensitive() {
        let query = ContactQuery {
            category: Some("Investor".into()),
        };
        assert_eq!(query.category(), Some(InquiryCategory::Investor));
    }
}
