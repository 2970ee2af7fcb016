#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared request/response models and the API error taxonomy for the
//! VaultGuard web client.

pub mod models;
