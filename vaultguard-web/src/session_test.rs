//! Tests for the session token store (memory backend; the browser backend
//! needs `localStorage` and is exercised by the rendered-app tests).

#[cfg(test)]
mod tests {
    use crate::session::Session;

    #[test]
    fn test_empty_session_has_no_token() {
        let session = Session::memory();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_set_and_clear() {
        let session = Session::memory();
        session.set("abc123");
        assert_eq!(session.token(), Some("abc123".to_string()));
        assert!(session.is_authenticated());

        session.clear();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_set_replaces_previous_token() {
        let session = Session::memory();
        session.set("first");
        session.set("second");
        assert_eq!(session.token(), Some("second".to_string()));
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let session = Session::memory();
        session.set("");
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clones_share_storage() {
        let session = Session::memory();
        let other = session.clone();
        session.set("abc123");
        assert_eq!(other.token(), Some("abc123".to_string()));
        assert_eq!(session, other);
    }

    #[test]
    fn test_distinct_memory_sessions_are_unequal() {
        assert_ne!(Session::memory(), Session::memory());
    }
}
