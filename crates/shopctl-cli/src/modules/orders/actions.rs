use super::http::list_orders;
use crate::cli_args::*;
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_order(args: OrderArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        OrderCommand::List => {
            let response = list_orders(ctx).await?;
            print_json_response(response).await?;
        }
    }
    Ok(())
}
