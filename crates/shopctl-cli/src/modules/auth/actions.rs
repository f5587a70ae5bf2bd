use crate::cli_args::*;
use crate::modules::auth::callback::{Navigator, RedirectImporter, Target};
use crate::modules::auth::http::login;
use crate::modules::session::SessionStore;
use crate::{prompt_line, prompt_password};

pub(crate) async fn handle_login_command(
    args: LoginArgs,
    addr: &str,
    client: &reqwest::Client,
    store: &mut SessionStore,
) -> anyhow::Result<()> {
    let command = match args.command {
        Some(command) => command,
        None => prompt_login_command()?,
    };

    match command {
        LoginCommand::Credentials(args) => {
            let password = match args.password {
                Some(password) => password,
                None => prompt_password("Password: ")?,
            };
            let auth = login(client, addr, args.email, password).await?;
            store.set_session(auth.user, auth.token)?;
            println!("Logged in");
        }
        LoginCommand::External(args) => {
            let entry_point = format!("{}/auth/google", addr.trim_end_matches('/'));
            let callback_url = match args.callback_url {
                Some(url) => url,
                None => {
                    println!("Open this URL in a browser to sign in:");
                    println!("  {entry_point}");
                    prompt_line("Paste the callback URL: ")?
                }
            };
            let query = callback_url
                .split_once('?')
                .map(|(_, query)| query.to_string())
                .unwrap_or_default();

            let mut importer = RedirectImporter::new();
            let mut navigator = CliNavigator::default();
            importer.observe(&query, store, &mut navigator)?;
            match navigator.target {
                Some(Target::Dashboard) => println!("Logged in"),
                Some(Target::LoginError) | None => {
                    anyhow::bail!("external sign-in failed; restart the flow at {entry_point}")
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_logout(store: &mut SessionStore) -> anyhow::Result<()> {
    store.clear_session()?;
    println!("Logged out");
    Ok(())
}

/// Turns navigation targets into CLI outcomes.
#[derive(Default)]
struct CliNavigator {
    target: Option<Target>,
}

impl Navigator for CliNavigator {
    fn navigate(&mut self, target: Target) {
        self.target = Some(target);
    }
}

fn prompt_login_command() -> anyhow::Result<LoginCommand> {
    let method = prompt_line("Login method (credentials/external): ")?;
    match method.trim() {
        "credentials" => {
            let email = prompt_line("Email: ")?;
            let password = prompt_password("Password: ")?;
            Ok(LoginCommand::Credentials(LoginCredentialsArgs {
                email,
                password: Some(password),
            }))
        }
        "external" => Ok(LoginCommand::External(LoginExternalArgs {
            callback_url: None,
        })),
        _ => anyhow::bail!("unknown login method"),
    }
}
