pub(crate) mod loading;
pub(crate) mod require_auth;

// Re-export components for convenience
pub use loading::Loading;
pub use require_auth::RequireAuth;
