use crate::{
    api::VaultGuardClient, components::Loading, config::AppConfig, routes::Route, session::Session,
};
use vaultguard_shared::models::{ApiError, NewPasswordEntry, PasswordEntry, PasswordPatch};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

fn vault_client(config: &AppConfig, session: &Session) -> VaultGuardClient {
    VaultGuardClient::new(config, session.clone())
}

/// Dashboard page component: the vault itself.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let config = use_context::<AppConfig>().expect("config context not provided");
    let session = use_context::<Session>().expect("session context not provided");
    let entries = use_state(|| None::<Vec<PasswordEntry>>);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    // Initial fetch. A rejected token means the stored session is stale, so
    // clear it and fall back to the login page.
    {
        let entries = entries.clone();
        let error = error.clone();
        let config = config.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = vault_client(&config, &session);
                match client.list_passwords().await {
                    Ok(list) => entries.set(Some(list)),
                    Err(ApiError::Unauthenticated | ApiError::Authentication(_)) => {
                        session.clear();
                        if let Some(ref nav) = navigator {
                            nav.push(&Route::Login);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.clear();
            if let Some(ref nav) = navigator {
                nav.push(&Route::Login);
            }
        })
    };

    let on_created = {
        let entries = entries.clone();
        Callback::from(move |entry: PasswordEntry| {
            let mut list = (*entries).clone().unwrap_or_default();
            list.push(entry);
            entries.set(Some(list));
        })
    };

    let on_deleted = {
        let entries = entries.clone();
        Callback::from(move |id: i64| {
            let list: Vec<PasswordEntry> = (*entries)
                .clone()
                .unwrap_or_default()
                .into_iter()
                .filter(|entry| entry.id != id)
                .collect();
            entries.set(Some(list));
        })
    };

    let on_updated = {
        let entries = entries.clone();
        Callback::from(move |updated: PasswordEntry| {
            let list: Vec<PasswordEntry> = (*entries)
                .clone()
                .unwrap_or_default()
                .into_iter()
                .map(|entry| if entry.id == updated.id { updated.clone() } else { entry })
                .collect();
            entries.set(Some(list));
        })
    };

    html! {
        <div class="p-4 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"My Vault"}</h1>
                <button class="btn btn-ghost" onclick={on_logout}>{"Log out"}</button>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }

            {
                match &*entries {
                    None => html! { <Loading /> },
                    Some(list) => html! {
                        <>
                            <div class="stats shadow w-full">
                                <div class="stat">
                                    <div class="stat-title">{"Stored passwords"}</div>
                                    <div class="stat-value text-primary">{ list.len() }</div>
                                    <div class="stat-desc">{"Entries in your vault"}</div>
                                </div>
                            </div>
                            <EntryList
                                entries={list.clone()}
                                on_deleted={on_deleted}
                                on_updated={on_updated}
                            />
                        </>
                    },
                }
            }

            <NewEntryForm on_created={on_created} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EntryListProps {
    entries: Vec<PasswordEntry>,
    on_deleted: Callback<i64>,
    on_updated: Callback<PasswordEntry>,
}

#[function_component(EntryList)]
fn entry_list(props: &EntryListProps) -> Html {
    if props.entries.is_empty() {
        return html! {
            <p class="text-sm opacity-70">{"No entries yet. Add your first one below."}</p>
        };
    }

    html! {
        <table class="table w-full">
            <thead>
                <tr>
                    <th>{"Service"}</th>
                    <th>{"Username"}</th>
                    <th>{"Category"}</th>
                    <th>{"Password"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for props.entries.iter().map(|entry| html! {
                    <EntryRow
                        key={entry.id}
                        entry={entry.clone()}
                        on_deleted={props.on_deleted.clone()}
                        on_updated={props.on_updated.clone()}
                    />
                }) }
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
struct EntryRowProps {
    entry: PasswordEntry,
    on_deleted: Callback<i64>,
    on_updated: Callback<PasswordEntry>,
}

/// One vault entry. The list endpoint never carries decrypted passwords, so
/// "Show" fetches the single entry, which does.
#[function_component(EntryRow)]
fn entry_row(props: &EntryRowProps) -> Html {
    let config = use_context::<AppConfig>().expect("config context not provided");
    let session = use_context::<Session>().expect("session context not provided");
    let revealed = use_state(|| None::<String>);
    let category_edit = use_state(|| None::<String>);

    let entry_id = props.entry.id;

    let on_show = {
        let revealed = revealed.clone();
        let config = config.clone();
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            if revealed.is_some() {
                revealed.set(None);
                return;
            }
            let revealed = revealed.clone();
            let client = vault_client(&config, &session);
            spawn_local(async move {
                if let Ok(entry) = client.get_password(entry_id).await {
                    revealed.set(entry.password);
                }
            });
        })
    };

    let on_delete = {
        let on_deleted = props.on_deleted.clone();
        let config = config.clone();
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let on_deleted = on_deleted.clone();
            let client = vault_client(&config, &session);
            spawn_local(async move {
                if client.delete_password(entry_id).await.is_ok() {
                    on_deleted.emit(entry_id);
                }
            });
        })
    };

    let on_edit_category = {
        let category_edit = category_edit.clone();
        let current = props.entry.category.clone().unwrap_or_default();
        Callback::from(move |_: MouseEvent| {
            category_edit.set(Some(current.clone()));
        })
    };

    let on_category_input = {
        let category_edit = category_edit.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                category_edit.set(Some(input.value()));
            }
        })
    };

    let on_save_category = {
        let category_edit = category_edit.clone();
        let on_updated = props.on_updated.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(category) = (*category_edit).clone() else {
                return;
            };
            let category_edit = category_edit.clone();
            let on_updated = on_updated.clone();
            let client = vault_client(&config, &session);
            spawn_local(async move {
                let patch = PasswordPatch {
                    category: Some(category),
                    ..PasswordPatch::default()
                };
                if let Ok(updated) = client.update_password(entry_id, &patch).await {
                    on_updated.emit(updated);
                }
                category_edit.set(None);
            });
        })
    };

    html! {
        <tr>
            <td>{ props.entry.service.clone() }</td>
            <td>{ props.entry.username.clone() }</td>
            <td>
                {
                    match &*category_edit {
                        Some(value) => html! {
                            <div class="flex gap-1">
                                <input
                                    class="input input-bordered input-xs"
                                    type="text"
                                    value={value.clone()}
                                    oninput={on_category_input}
                                />
                                <button class="btn btn-xs" onclick={on_save_category}>{"Save"}</button>
                            </div>
                        },
                        None => html! {
                            <span onclick={on_edit_category} class="cursor-pointer">
                                { props.entry.category.clone().unwrap_or_else(|| "-".to_string()) }
                            </span>
                        },
                    }
                }
            </td>
            <td>
                {
                    match &*revealed {
                        Some(password) => html! { <code>{ password.clone() }</code> },
                        None => html! { <span>{"••••••••"}</span> },
                    }
                }
            </td>
            <td class="flex gap-1">
                <button class="btn btn-xs" onclick={on_show}>
                    { if revealed.is_some() { "Hide" } else { "Show" } }
                </button>
                <button class="btn btn-xs btn-error" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct NewEntryFormProps {
    on_created: Callback<PasswordEntry>,
}

#[function_component(NewEntryForm)]
fn new_entry_form(props: &NewEntryFormProps) -> Html {
    let config = use_context::<AppConfig>().expect("config context not provided");
    let session = use_context::<Session>().expect("session context not provided");
    let service = use_state(String::new);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let onsubmit = {
        let service_handle = service.clone();
        let username_handle = username.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let saving_handle = saving.clone();
        let on_created = props.on_created.clone();
        let config = config.clone();
        let session = session.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let entry = NewPasswordEntry {
                service: (*service_handle).clone(),
                username: (*username_handle).clone(),
                password: (*password_handle).clone(),
                category: None,
            };
            saving_handle.set(true);
            error_handle.set(None);
            let service_ref = service_handle.clone();
            let username_ref = username_handle.clone();
            let password_ref = password_handle.clone();
            let saving_ref = saving_handle.clone();
            let error_ref = error_handle.clone();
            let on_created = on_created.clone();
            let client = vault_client(&config, &session);
            spawn_local(async move {
                match client.create_password(&entry).await {
                    Ok(created) => {
                        service_ref.set(String::new());
                        username_ref.set(String::new());
                        password_ref.set(String::new());
                        on_created.emit(created);
                    }
                    Err(err) => {
                        error_ref.set(Some(err.to_string()));
                    }
                }
                saving_ref.set(false);
            });
        })
    };

    // Fill the password field from the backend's generator.
    let on_generate = {
        let password_handle = password.clone();
        let error_handle = error.clone();
        Callback::from(move |_: MouseEvent| {
            let password_ref = password_handle.clone();
            let error_ref = error_handle.clone();
            let client = vault_client(&config, &session);
            spawn_local(async move {
                match client.generate_password(16, true, true, true).await {
                    Ok(generated) => password_ref.set(generated.password),
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
            });
        })
    };

    let bind_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let is_busy = *saving;
    let disable_submit =
        (*service).is_empty() || (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <form class="card bg-base-200 p-4 space-y-2" onsubmit={onsubmit}>
            <h2 class="card-title">{"Add entry"}</h2>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            <input
                class="input input-bordered"
                type="text"
                placeholder="Service"
                value={(*service).clone()}
                oninput={bind_input(&service)}
            />
            <input
                class="input input-bordered"
                type="text"
                placeholder="Username"
                value={(*username).clone()}
                oninput={bind_input(&username)}
            />
            <div class="flex gap-2">
                <input
                    class="input input-bordered flex-1"
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
                <button class="btn" type="button" onclick={on_generate}>{"Generate"}</button>
            </div>
            <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                {if is_busy { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}
