use clap::{Args, Subcommand};

#[derive(Args)]
pub struct LoginArgs {
    #[command(subcommand)]
    pub command: Option<LoginCommand>,
}

#[derive(Subcommand)]
pub enum LoginCommand {
    #[command(about = "Exchange email and password for a session")]
    Credentials(LoginCredentialsArgs),
    #[command(about = "Complete an external-provider sign-in")]
    External(LoginExternalArgs),
}

#[derive(Args)]
pub struct LoginCredentialsArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args)]
pub struct LoginExternalArgs {
    #[arg(long, help = "Callback URL delivered by the provider redirect")]
    pub callback_url: Option<String>,
}
