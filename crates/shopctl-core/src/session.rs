//! Session data model.
//!
//! A session is the pair of an authenticated identity and the bearer
//! credential issued alongside it. The two are mutually present or
//! mutually absent: the only ways to build a session are [`Session::empty`]
//! and [`Session::new`], which sets both.

use serde::{Deserialize, Serialize};

use crate::constants::ADMIN_ROLE;

/// The authenticated principal as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Current login state: identity plus opaque bearer credential.
///
/// The credential has no expiry or refresh concept; it is valid until
/// explicitly cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
    credential: Option<String>,
}

impl Session {
    /// A session with neither identity nor credential.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(identity: Identity, credential: String) -> Self {
        Self {
            identity: Some(identity),
            credential: Some(credential),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Recomputed on every read; never stored independently.
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Recomputed on every read; true only for the admin role literal.
    pub fn is_admin(&self) -> bool {
        self.identity
            .as_ref()
            .is_some_and(|identity| identity.role == ADMIN_ROLE)
    }
}
