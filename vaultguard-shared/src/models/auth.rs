use serde::{Deserialize, Serialize};

/// Credentials exchanged for a session token.
///
/// The backend's token endpoint speaks the OAuth2 password grant, which
/// requires a form-urlencoded body with exactly these two field names.
/// The `username` field accepts either a username or an email address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRequest {
    /// The account identifier (username or email).
    pub username: String,

    /// The account's master password.
    pub password: String,
}

/// Response from a successful token exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// The opaque bearer token for subsequent requests.
    pub access_token: String,

    /// The token scheme, always `"bearer"` from the current backend.
    pub token_type: String,
}

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The desired username.
    pub username: String,

    /// The account's email address.
    pub email: String,

    /// The master password protecting the vault.
    pub master_password: String,
}

/// The account record returned after a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisteredUser {
    /// Unique identifier for the account.
    pub id: i64,

    /// The account's username.
    pub username: String,

    /// The account's email address.
    pub email: String,

    /// Whether the account is active.
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_form_encoding() {
        let request = TokenRequest {
            username: "alice".to_string(),
            password: "hunter2hunter2".to_string(),
        };

        // reqwest's `.form()` uses serde_urlencoded, so this pins the exact
        // wire encoding the token endpoint receives.
        let encoded = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(encoded, "username=alice&password=hunter2hunter2");
    }

    #[test]
    fn test_token_request_has_only_grant_fields() {
        let request = TokenRequest {
            username: "alice".to_string(),
            password: "pw".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["password", "username"]);
    }

    #[test]
    fn test_token_response_deserialization() {
        let json = r#"{"access_token":"abc123","token_type":"bearer"}"#;
        let deserialized: TokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(deserialized.access_token, "abc123");
        assert_eq!(deserialized.token_type, "bearer");
    }

    #[test]
    fn test_register_request_serialization() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            master_password: "correct horse battery".to_string(),
        };

        let serialized = serde_json::to_string(&request).unwrap();
        let expected = r#"{"username":"alice","email":"alice@example.com","master_password":"correct horse battery"}"#;

        assert_eq!(serialized, expected);
    }

    #[test]
    fn test_register_request_has_exact_keys() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            master_password: "pw".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["email", "master_password", "username"]);
    }

    #[test]
    fn test_registered_user_deserialization() {
        let json = r#"{"id":7,"username":"alice","email":"alice@example.com","is_active":true}"#;
        let deserialized: RegisteredUser = serde_json::from_str(json).unwrap();

        assert_eq!(deserialized.id, 7);
        assert_eq!(deserialized.username, "alice");
        assert!(deserialized.is_active);
    }
}
