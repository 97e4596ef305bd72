use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found-page">
            <section class="page-header">
                <div class="card-emoji">{"🐠"}</div>
                <h1>{"404"}</h1>
                <p class="lead">{"This page swam away. Let's get you back to familiar waters."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Back to Home"}
                </Link<Route>>
            </section>
        </div>
    }
}
