use crate::routes::Route;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// `NotFoundPage` page component
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Not Found" }</h1>
            <p>{ "There is nothing at this address." }</p>
            <Link<Route> to={Route::Login} classes="link link-hover">
                { "Back to sign in" }
            </Link<Route>>
        </div>
    }
}
