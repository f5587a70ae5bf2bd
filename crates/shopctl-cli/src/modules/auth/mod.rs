mod actions;
pub(crate) mod args;
pub(crate) mod callback;
mod http;

pub(crate) use actions::{handle_login_command, handle_logout};
#[cfg(test)]
pub(crate) use http::login;
