use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored vault entry as returned by the backend.
///
/// The list endpoint leaves `password` empty; only the single-entry fetch
/// decrypts and populates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordEntry {
    /// Unique identifier for the entry.
    pub id: i64,

    /// The owning account's identifier.
    pub user_id: i64,

    /// The service the credential belongs to (e.g. "Netflix").
    pub service: String,

    /// The username or email used with that service.
    pub username: String,

    /// Optional user-assigned category.
    pub category: Option<String>,

    /// The decrypted password, present only on single-entry reads.
    pub password: Option<String>,

    /// When the entry was created.
    pub created_at: DateTime<Utc>,

    /// When the entry was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Request body for storing a new vault entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPasswordEntry {
    /// The service the credential belongs to.
    pub service: String,

    /// The username or email used with that service.
    pub username: String,

    /// The plain-text password; the backend encrypts it at rest.
    pub password: String,

    /// Optional user-assigned category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Partial update for an existing vault entry. Absent fields are left
/// unchanged by the backend and omitted from the serialized body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordPatch {
    /// Replacement service name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Replacement username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Replacement password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Replacement category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Response from the password generator endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedPassword {
    /// The generated password.
    pub password: String,

    /// Its length in characters.
    pub length: u32,

    /// A coarse strength label such as `"High"` or `"Medium"`.
    pub complexity_score: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_entry_deserialization() {
        let json = r#"{
            "id": 3,
            "user_id": 7,
            "service": "Netflix",
            "username": "alice@example.com",
            "category": "streaming",
            "password": null,
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-02T09:30:00Z"
        }"#;
        let entry: PasswordEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, 3);
        assert_eq!(entry.service, "Netflix");
        assert_eq!(entry.category.as_deref(), Some("streaming"));
        assert_eq!(entry.password, None);
        assert!(entry.updated_at > entry.created_at);
    }

    #[test]
    fn test_new_entry_serialization() {
        let entry = NewPasswordEntry {
            service: "Netflix".to_string(),
            username: "alice@example.com".to_string(),
            password: "s3cret".to_string(),
            category: None,
        };

        let serialized = serde_json::to_string(&entry).unwrap();
        let expected = r#"{"service":"Netflix","username":"alice@example.com","password":"s3cret"}"#;

        assert_eq!(serialized, expected);
    }

    #[test]
    fn test_new_entry_with_category() {
        let entry = NewPasswordEntry {
            service: "Netflix".to_string(),
            username: "alice@example.com".to_string(),
            password: "s3cret".to_string(),
            category: Some("streaming".to_string()),
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["category"], "streaming");
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = PasswordPatch {
            password: Some("rotated".to_string()),
            ..PasswordPatch::default()
        };

        let serialized = serde_json::to_string(&patch).unwrap();
        assert_eq!(serialized, r#"{"password":"rotated"}"#);
    }

    #[test]
    fn test_generated_password_deserialization() {
        let json = r#"{"password":"x9!Kq","length":5,"complexity_score":"Low"}"#;
        let generated: GeneratedPassword = serde_json::from_str(json).unwrap();

        assert_eq!(generated.length, 5);
        assert_eq!(generated.complexity_score, "Low");
    }
}
