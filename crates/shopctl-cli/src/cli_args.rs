use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::auth::args::*;
pub use crate::modules::orders::args::*;
pub use crate::modules::products::args::*;
pub use crate::modules::users::args::*;

#[derive(Parser)]
#[command(name = "shopctl")]
#[command(about = "Admin console for the storefront backend")]
pub struct Cli {
    #[arg(long, env = "SHOPCTL_ADDR")]
    pub addr: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Login(LoginArgs),
    Logout,
    #[command(about = "Show the identity of the current session")]
    Whoami,
    Product(ProductArgs),
    Order(OrderArgs),
    User(UserArgs),
    #[command(about = "Aggregate storefront statistics")]
    Stats,
}
