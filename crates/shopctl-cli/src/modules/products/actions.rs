use shopctl_core::api::catalog::{ProductImage, ProductPayload};

use super::http::{create_product, delete_product, list_products, update_product};
use crate::cli_args::*;
use crate::modules::system::http::{print_empty_response, print_json_response};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_product(
    args: ProductArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        ProductCommand::List => {
            let response = list_products(ctx).await?;
            print_json_response(response).await?;
        }
        ProductCommand::Create(args) => {
            let response = create_product(ctx, product_payload(args)).await?;
            print_json_response(response).await?;
        }
        ProductCommand::Update(args) => {
            let response = update_product(ctx, &args.id, product_payload(args.fields)).await?;
            print_json_response(response).await?;
        }
        ProductCommand::Delete(args) => {
            let response = delete_product(ctx, &args.id).await?;
            print_empty_response(response, "Product deleted").await?;
        }
    }
    Ok(())
}

fn product_payload(args: ProductCreateArgs) -> ProductPayload {
    ProductPayload {
        name: args.name,
        description: args.description,
        price: args.price,
        category: args.category,
        images: args
            .images
            .into_iter()
            .map(|url| ProductImage { url })
            .collect(),
        stock: args.stock,
        sizes: (!args.sizes.is_empty()).then_some(args.sizes),
        colors: (!args.colors.is_empty()).then_some(args.colors),
    }
}
