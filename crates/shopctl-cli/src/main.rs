use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::{handle_login_command, handle_logout};
use crate::modules::session::{guard, SessionStore, Verdict};
use crate::modules::system::{ensure_secure_addr, CommandContext};

pub(crate) const DEFAULT_ADDR: &str = "http://localhost:5000/api";
const SERVER_URL_ENV: &str = "SHOPCTL_SERVER_URL";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .build()?;

    let mut store = SessionStore::open(session_dir()?);
    let addr = cli
        .addr
        .clone()
        .or_else(|| std::env::var(SERVER_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());

    match cli.command {
        Command::Login(args) => {
            ensure_secure_addr(&addr, cli.insecure)?;
            handle_login_command(args, &addr, &client, &mut store).await?;
        }
        Command::Logout => {
            handle_logout(&mut store)?;
        }
        Command::Whoami => {
            handle_whoami(&store)?;
        }
        command => {
            ensure_secure_addr(&addr, cli.insecure)?;
            // The router seam: protected commands run only on Allow. Deny
            // carries no reason; the operator is pointed back at login
            // whether there is no session or a non-admin one.
            if guard(&store) == Verdict::Deny {
                anyhow::bail!("not authorized; run `shopctl login` with an admin account");
            }
            let access_token = store
                .bearer_token()
                .ok_or_else(|| anyhow::anyhow!("session has no credential; run `shopctl login`"))?
                .to_string();

            let ctx = CommandContext {
                client: &client,
                addr: &addr,
                allow_insecure: cli.insecure,
                access_token,
            };
            handle_command(command, &ctx).await?;
        }
    }

    Ok(())
}

fn handle_whoami(store: &SessionStore) -> anyhow::Result<()> {
    match store.identity() {
        Some(identity) => {
            println!("{}", serde_json::to_string_pretty(identity)?);
        }
        None => println!("Not logged in"),
    }
    Ok(())
}

fn session_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".shopctl"))
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .init();
    Ok(())
}

pub(crate) fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut input = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
