mod actions;
mod http;
mod types;

pub(crate) use actions::handle_stats;
