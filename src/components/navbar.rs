use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::{use_theme, ThemeToggle};
use crate::Route;

const SCROLLED_THRESHOLD_PX: f64 = 20.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_open = use_state(|| false);
    let scrolled = use_state(|| false);
    let current = use_route::<Route>();
    let theme = use_theme();

    // Track scroll position for the compact style
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(scroll_y > SCROLLED_THRESHOLD_PX);
                                }
                            }
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("scroll listener not attached: {:?}", e);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    // Close the mobile menu when the route changes
    {
        let is_open = is_open.clone();
        use_effect_with_deps(
            move |_| {
                is_open.set(false);
                || ()
            },
            current.clone(),
        );
    }

    let toggle_menu = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let links = Route::NAV.iter().map(|(route, name)| {
        let active = current.as_ref() == Some(route);
        html! {
            <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                { *name }
            </Link<Route>>
        }
    });

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="nav-inner">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img
                        src="/assets/aquacortex-logo.svg"
                        alt="AquaCORTEX"
                        class={classes!("logo", theme.is_light().then_some("logo-inverted"))}
                    />
                </Link<Route>>

                <div class="nav-links">
                    { for links.clone() }
                </div>

                <div class="nav-actions">
                    <ThemeToggle />
                    <Link<Route> to={Route::Contact} classes="nav-cta">
                        {"Contact Us"}
                    </Link<Route>>
                    <button class="nav-burger" onclick={toggle_menu} aria-label="Toggle menu">
                        <i class={if *is_open { "fas fa-times" } else { "fas fa-bars" }}></i>
                    </button>
                </div>
            </div>

            if *is_open {
                <div class="nav-mobile">
                    { for links }
                    <Link<Route> to={Route::Contact} classes="nav-cta">
                        {"Contact Us"}
                    </Link<Route>>
                </div>
            }
        </nav>
    }
}
