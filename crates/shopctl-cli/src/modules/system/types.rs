/// Everything a protected command needs: the shared HTTP client, the
/// backend address, and the credential read from the session store.
/// Commands never write session state through this context.
pub struct CommandContext<'a> {
    pub client: &'a reqwest::Client,
    pub addr: &'a str,
    pub allow_insecure: bool,
    pub access_token: String,
}
