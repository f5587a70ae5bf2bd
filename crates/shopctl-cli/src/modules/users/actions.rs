use super::http::list_users;
use crate::cli_args::*;
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;

// Role is the only authorization input here. The legacy console also
// badged one hardcoded email address as admin; that check contradicts
// the role model and is deliberately not carried over.
pub(crate) async fn handle_user(args: UserArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        UserCommand::List => {
            let response = list_users(ctx).await?;
            print_json_response(response).await?;
        }
    }
    Ok(())
}
