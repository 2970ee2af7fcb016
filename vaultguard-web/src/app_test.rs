//! Headless render tests for the app shell: route guarding and the
//! always-redirecting root path, rendered with a memory-backed session and
//! memory history.

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use crate::config::AppConfig;
    use crate::routes::{Route, switch};
    use crate::session::Session;
    use wasm_bindgen_test::*;
    use yew::prelude::*;
    use yew_router::Router;
    use yew_router::history::{AnyHistory, History, MemoryHistory};
    use yew_router::prelude::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        session: Session,
        path: String,
    }

    /// The app shell with an injected session and starting path instead of
    /// browser storage and browser history.
    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(&props.path);
        html! {
            <ContextProvider<AppConfig> context={AppConfig::new()}>
                <ContextProvider<Session> context={props.session.clone()}>
                    <Router history={history}>
                        <Switch<Route> render={switch} />
                    </Router>
                </ContextProvider<Session>>
            </ContextProvider<AppConfig>>
        }
    }

    async fn render(session: Session, path: &str) -> String {
        yew::LocalServerRenderer::<Harness>::with_props(HarnessProps {
            session,
            path: path.to_string(),
        })
        .render()
        .await
    }

    #[wasm_bindgen_test]
    async fn dashboard_renders_with_token() {
        let session = Session::memory();
        session.set("abc123");
        let rendered = render(session, "/dashboard").await;
        assert!(rendered.contains("My Vault"));
    }

    #[wasm_bindgen_test]
    async fn dashboard_redirects_without_token() {
        let rendered = render(Session::memory(), "/dashboard").await;
        assert!(!rendered.contains("My Vault"));
    }

    #[wasm_bindgen_test]
    async fn root_path_renders_no_page_content() {
        let rendered = render(Session::memory(), "/").await;
        assert!(!rendered.contains("My Vault"));
        assert!(!rendered.contains("card-title"));
    }

    #[wasm_bindgen_test]
    async fn login_page_renders_form() {
        let rendered = render(Session::memory(), "/login").await;
        assert!(rendered.contains("Sign in"));
        assert!(rendered.contains("Master password"));
    }

    #[wasm_bindgen_test]
    async fn register_page_renders_form() {
        let rendered = render(Session::memory(), "/register").await;
        assert!(rendered.contains("Create account"));
        assert!(rendered.contains("Email"));
    }
}
