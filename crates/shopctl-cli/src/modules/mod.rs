pub(crate) mod auth;
pub(crate) mod orders;
pub(crate) mod products;
pub(crate) mod session;
pub(crate) mod stats;
pub(crate) mod system;
pub(crate) mod users;
