//! One-shot import of an external-provider redirect.
//!
//! The provider authenticates out-of-band and delivers the outcome as
//! query parameters on a callback URL. The importer feeds that outcome
//! into the session store exactly once, then routes, even when the same
//! callback is observed repeatedly.

use std::collections::HashMap;

use shopctl_core::Identity;
use tracing::debug;

use crate::modules::session::SessionStore;

/// Where the importer routes after an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Dashboard,
    LoginError,
}

/// The routing seam. The CLI turns targets into messages and exit
/// status; tests substitute a recorder.
pub(crate) trait Navigator {
    fn navigate(&mut self, target: Target);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportState {
    Idle,
    Processing,
}

pub(crate) struct RedirectImporter {
    state: ImportState,
}

impl RedirectImporter {
    pub(crate) fn new() -> Self {
        Self {
            state: ImportState::Idle,
        }
    }

    /// Observes the callback query string.
    ///
    /// The first observation transitions to `Processing`, performs at
    /// most one session mutation and exactly one navigation; every later
    /// observation returns without doing anything. The state is marked
    /// before the mutation and the navigation, so a re-entrant
    /// observation triggered by the mutation itself sees `Processing`.
    ///
    /// Missing and malformed parameters collapse into one failure class:
    /// no session mutation, navigation to the login-error target.
    pub(crate) fn observe(
        &mut self,
        query: &str,
        store: &mut SessionStore,
        navigator: &mut dyn Navigator,
    ) -> anyhow::Result<()> {
        if self.state == ImportState::Processing {
            return Ok(());
        }
        self.state = ImportState::Processing;

        match parse_redirect(query) {
            Some((identity, token)) => {
                store.set_session(identity, token)?;
                debug!("redirect import complete");
                navigator.navigate(Target::Dashboard);
            }
            None => {
                debug!("redirect parameters incomplete");
                navigator.navigate(Target::LoginError);
            }
        }
        Ok(())
    }
}

/// Parses the five redirect parameters without decoding, then applies
/// the decoding rule: `name` and `email` are percent-decoded, `token`,
/// `id` and `role` are used verbatim.
fn parse_redirect(query: &str) -> Option<(Identity, String)> {
    let raw = raw_params(query);
    let token = raw.get("token")?;
    let id = raw.get("id")?;
    let email = raw.get("email")?;
    let name = raw.get("name")?;
    let role = raw.get("role")?;

    let name = urlencoding::decode(name).ok()?;
    let email = urlencoding::decode(email).ok()?;

    let identity = Identity {
        id: id.clone(),
        name: name.into_owned(),
        email: email.into_owned(),
        role: role.clone(),
    };
    Some((identity, token.clone()))
}

fn raw_params(query: &str) -> HashMap<String, String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            if value.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}
