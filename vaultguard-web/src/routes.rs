use crate::components::require_auth::RequireAuth;
use crate::pages::{DashboardPage, LoginPage, NotFoundPage, RegisterPage};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The app routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the app routes.
pub fn switch(route: Route) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    match route {
        // The bare path never renders content of its own.
        Route::Home => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => html! {
            <RequireAuth>
                <DashboardPage />
            </RequireAuth>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
