mod guard;
mod store;

pub(crate) use guard::{guard, Verdict};
pub(crate) use store::SessionStore;
