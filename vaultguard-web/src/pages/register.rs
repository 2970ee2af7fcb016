use crate::{api::VaultGuardClient, config::AppConfig, routes::Route, session::Session};
use vaultguard_shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

// The backend enforces a 12-character minimum on master passwords; checking
// here saves a round trip.
const MIN_MASTER_PASSWORD_LEN: usize = 12;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let config = use_context::<AppConfig>().expect("config context not provided");
    let session = use_context::<Session>().expect("session context not provided");
    let username = use_state(String::new);
    let email = use_state(String::new);
    let master_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let username_handle = username.clone();
        let email_handle = email.clone();
        let password_handle = master_password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let config = config.clone();
        let session = session.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let password_value = (*password_handle).clone();
            if password_value.len() < MIN_MASTER_PASSWORD_LEN {
                error_handle.set(Some(format!(
                    "Master password must be at least {MIN_MASTER_PASSWORD_LEN} characters"
                )));
                return;
            }
            let username_value = (*username_handle).clone();
            let email_value = (*email_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let client = VaultGuardClient::new(&config, session.clone());
            spawn_local(async move {
                let request = RegisterRequest {
                    username: username_value,
                    email: email_value,
                    master_password: password_value,
                };
                match client.register(&request).await {
                    Ok(_) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&Route::Login);
                        }
                    }
                    Err(err) => {
                        error_ref.set(Some(err.to_string()));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let master_password = master_password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                master_password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*username).is_empty()
        || (*email).is_empty()
        || (*master_password).is_empty()
        || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="master_password">
                            <span class="label-text">{"Master password"}</span>
                        </label>
                        <input
                            id="master_password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*master_password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Creating account..." } else { "Register" }}
                        </button>
                    </div>
                    <Link<Route> to={Route::Login} classes="link link-hover mt-4">
                        {"Already have an account? Sign in"}
                    </Link<Route>>
                </form>
            </div>
        </div>
    }
}
