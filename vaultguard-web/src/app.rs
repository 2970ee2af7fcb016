use crate::config::AppConfig;
use crate::routes::Route;
use crate::session::Session;
use yew::prelude::*;
use yew_router::prelude::*;

/// Application shell: builds the configuration and session once at startup
/// and provides both through context, so nothing below reads the environment
/// or browser storage directly.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::new());
    let session = use_memo((), |_| Session::browser());

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <ContextProvider<Session> context={(*session).clone()}>
                <BrowserRouter>
                    <Switch<Route> render={crate::routes::switch} />
                </BrowserRouter>
            </ContextProvider<Session>>
        </ContextProvider<AppConfig>>
    }
}
