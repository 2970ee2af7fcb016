use crate::routes::Route;
use crate::session::Session;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Children,
}

/// Gate around protected content.
///
/// Renders its children while the session holds a token, otherwise redirects
/// to the login route. The original destination is discarded; there is no
/// return-after-login behavior.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_context::<Session>().expect("session context not provided");

    if session.is_authenticated() {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
