use yew::prelude::*;
use yew_router::prelude::*;

pub mod animation;
pub mod components;
pub mod config;
pub mod contact;
pub mod pages;
pub mod theme;
pub mod utils;

use components::footer::Footer;
use components::navbar::Navbar;
use pages::{
    about::About, contact::Contact, expansion::GlobalExpansion, home::Home, impact::Impact,
    not_found::NotFound, solutions::Solutions, technology::Technology,
};
use theme::ThemeProvider;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/technology")]
    Technology,
    #[at("/solutions")]
    Solutions,
    #[at("/impact")]
    Impact,
    #[at("/expansion")]
    Expansion,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Entries of the main navigation, in display order.
    pub const NAV: [(Route, &'static str); 6] = [
        (Route::Home, "Home"),
        (Route::Technology, "Technology"),
        (Route::Solutions, "Solutions"),
        (Route::Impact, "Impact"),
        (Route::Expansion, "Global Expansion"),
        (Route::About, "About"),
    ];
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Technology => html! { <Technology /> },
        Route::Solutions => html! { <Solutions /> },
        Route::Impact => html! { <Impact /> },
        Route::Expansion => html! { <GlobalExpansion /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <div class="site">
                    <Navbar />
                    <main class="site-main">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </BrowserRouter>
        </ThemeProvider>
    }
}
