//! Session token storage.
//!
//! The session is an explicit context object provided to the components that
//! need it, not ambient global state. Presence of a token is the only
//! "logged in" signal; the client tracks no expiry and performs no refresh.

use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;
use std::rc::Rc;

const TOKEN_KEY: &str = "vaultguard.session_token";

/// Handle to wherever the bearer token is kept.
///
/// The browser backend persists to `localStorage`; the memory backend exists
/// for headless rendering and tests. Cloning a handle shares the underlying
/// storage.
#[derive(Debug, Clone)]
pub struct Session {
    backend: Backend,
}

#[derive(Debug, Clone)]
enum Backend {
    Browser,
    Memory(Rc<RefCell<Option<String>>>),
}

impl Session {
    /// A session backed by browser `localStorage`.
    pub fn browser() -> Self {
        Self {
            backend: Backend::Browser,
        }
    }

    /// A session backed by an in-memory cell.
    pub fn memory() -> Self {
        Self {
            backend: Backend::Memory(Rc::new(RefCell::new(None))),
        }
    }

    /// The stored token, if any. Read fresh on every call so a token
    /// written by another tab is picked up by the next request.
    pub fn token(&self) -> Option<String> {
        match &self.backend {
            Backend::Browser => LocalStorage::get::<String>(TOKEN_KEY).ok(),
            Backend::Memory(cell) => cell.borrow().clone(),
        }
        .filter(|token| !token.is_empty())
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a token, replacing any previous one.
    pub fn set(&self, token: &str) {
        match &self.backend {
            Backend::Browser => {
                if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
                    web_sys::console::error_1(&format!("failed to store token: {err}").into());
                }
            }
            Backend::Memory(cell) => {
                *cell.borrow_mut() = Some(token.to_string());
            }
        }
    }

    /// Drop the stored token.
    pub fn clear(&self) {
        match &self.backend {
            Backend::Browser => LocalStorage::delete(TOKEN_KEY),
            Backend::Memory(cell) => {
                *cell.borrow_mut() = None;
            }
        }
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        match (&self.backend, &other.backend) {
            (Backend::Browser, Backend::Browser) => true,
            (Backend::Memory(a), Backend::Memory(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
