/// Role value the backend assigns to administrator accounts.
///
/// Authorization collapses the free-form role string to a single
/// comparison against this literal. Keep it in one place so the
/// guard and the session projections can never disagree.
pub const ADMIN_ROLE: &str = "admin";
