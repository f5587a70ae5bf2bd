use crate::cli_args::*;
use crate::modules::orders::handle_order;
use crate::modules::products::handle_product;
use crate::modules::stats::handle_stats;
use crate::modules::system::CommandContext;
use crate::modules::users::handle_user;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Product(args) => handle_product(args, ctx).await?,
        Command::Order(args) => handle_order(args, ctx).await?,
        Command::User(args) => handle_user(args, ctx).await?,
        Command::Stats => handle_stats(ctx).await?,
        Command::Login(_) | Command::Logout | Command::Whoami => {
            unreachable!()
        }
    }

    Ok(())
}
