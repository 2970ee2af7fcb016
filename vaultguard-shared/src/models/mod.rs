//! Wire models exchanged with the VaultGuard backend.

pub mod auth;
pub mod errors;
pub mod password;

pub use auth::{RegisterRequest, RegisteredUser, TokenRequest, TokenResponse};
pub use errors::{ApiError, ErrorResponse};
pub use password::{GeneratedPassword, NewPasswordEntry, PasswordEntry, PasswordPatch};
