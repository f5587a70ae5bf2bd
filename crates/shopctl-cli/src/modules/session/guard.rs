//! Access decision for the protected command surface.

use super::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    Allow,
    Deny,
}

/// Allow only a session that is both authenticated and admin.
///
/// Deny carries no reason: "no session" and "logged in but not admin"
/// look the same to the caller, whose only recourse is the login surface.
pub(crate) fn guard(store: &SessionStore) -> Verdict {
    if store.is_authenticated() && store.is_admin() {
        Verdict::Allow
    } else {
        Verdict::Deny
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopctl_core::Identity;
    use tempfile::tempdir;

    fn store_with_role(role: &str) -> (tempfile::TempDir, SessionStore) {
        let dir = tempdir().expect("tempdir");
        let mut store = SessionStore::open(dir.path().join("session"));
        store
            .set_session(
                Identity {
                    id: "u-1".to_string(),
                    name: "Jane Doe".to_string(),
                    email: "jane@example.com".to_string(),
                    role: role.to_string(),
                },
                "tok123".to_string(),
            )
            .expect("set session");
        (dir, store)
    }

    #[test]
    fn empty_session_is_denied() {
        let dir = tempdir().expect("tempdir");
        let store = SessionStore::open(dir.path().join("session"));
        assert_eq!(guard(&store), Verdict::Deny);
    }

    #[test]
    fn authenticated_customer_is_denied() {
        let (_dir, store) = store_with_role("customer");
        assert_eq!(guard(&store), Verdict::Deny);
    }

    #[test]
    fn authenticated_admin_is_allowed() {
        let (_dir, store) = store_with_role("admin");
        assert_eq!(guard(&store), Verdict::Allow);
    }
}
