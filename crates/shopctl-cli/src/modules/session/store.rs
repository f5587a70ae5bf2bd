//! Single source of truth for the current session.
//!
//! The in-memory session is backed by two durable entries under the
//! store's directory: the serialized identity and the raw credential.
//! Only `set_session` and `clear_session` touch the durable record;
//! everything else reads through the derived projections.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use shopctl_core::{Identity, Session};
use tracing::{debug, warn};

const IDENTITY_FILE: &str = "identity.json";
const CREDENTIAL_FILE: &str = "credential";

pub(crate) struct SessionStore {
    dir: PathBuf,
    session: Session,
}

impl SessionStore {
    /// Opens the store and hydrates from the durable record.
    ///
    /// A missing or malformed record degrades to the empty session.
    /// Hydration never fails.
    pub(crate) fn open(dir: PathBuf) -> Self {
        let session = hydrate(&dir);
        Self { dir, session }
    }

    /// Replaces both halves of the session and writes the durable record.
    ///
    /// This is the only mutation path shared by the credential exchange
    /// and the redirect importer, so in-memory and durable state can
    /// never hold a half-updated pair.
    pub(crate) fn set_session(
        &mut self,
        identity: Identity,
        credential: String,
    ) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let serialized = serde_json::to_string_pretty(&identity)?;
        fs::write(self.dir.join(IDENTITY_FILE), serialized)?;
        fs::write(self.dir.join(CREDENTIAL_FILE), &credential)?;
        self.session = Session::new(identity, credential);
        debug!(dir = %self.dir.display(), "session persisted");
        Ok(())
    }

    /// Empties the session and erases the durable record.
    pub(crate) fn clear_session(&mut self) -> anyhow::Result<()> {
        self.session = Session::empty();
        remove_entry(self.dir.join(IDENTITY_FILE))?;
        remove_entry(self.dir.join(CREDENTIAL_FILE))?;
        debug!(dir = %self.dir.display(), "session cleared");
        Ok(())
    }

    pub(crate) fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub(crate) fn bearer_token(&self) -> Option<&str> {
        self.session.credential()
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub(crate) fn is_admin(&self) -> bool {
        self.session.is_admin()
    }
}

fn hydrate(dir: &Path) -> Session {
    let credential = match fs::read_to_string(dir.join(CREDENTIAL_FILE)) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        Ok(_) => return Session::empty(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Session::empty(),
        Err(err) => {
            warn!(dir = %dir.display(), "failed to read stored credential: {err}");
            return Session::empty();
        }
    };
    let contents = match fs::read_to_string(dir.join(IDENTITY_FILE)) {
        Ok(contents) => contents,
        Err(err) => {
            // A credential without a readable identity violates the
            // mutual-presence rule; hydrate as logged out.
            warn!(dir = %dir.display(), "failed to read stored identity: {err}");
            return Session::empty();
        }
    };
    match serde_json::from_str::<Identity>(&contents) {
        Ok(identity) => Session::new(identity, credential),
        Err(err) => {
            warn!(dir = %dir.display(), "stored identity is malformed: {err}");
            Session::empty()
        }
    }
}

fn remove_entry(path: PathBuf) -> anyhow::Result<()> {
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
