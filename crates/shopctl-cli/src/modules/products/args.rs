use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ProductArgs {
    #[command(subcommand)]
    pub command: ProductCommand,
}

#[derive(Subcommand)]
pub enum ProductCommand {
    List,
    Create(ProductCreateArgs),
    Update(ProductUpdateArgs),
    Delete(ProductDeleteArgs),
}

#[derive(Args)]
pub struct ProductCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub price: f64,
    #[arg(long)]
    pub category: String,
    #[arg(long, default_value_t = 0)]
    pub stock: i64,
    #[arg(long = "image", help = "Image URL (repeatable)")]
    pub images: Vec<String>,
    #[arg(long = "size", help = "Available size (repeatable)")]
    pub sizes: Vec<String>,
    #[arg(long = "color", help = "Available color (repeatable)")]
    pub colors: Vec<String>,
}

#[derive(Args)]
pub struct ProductUpdateArgs {
    pub id: String,
    #[command(flatten)]
    pub fields: ProductCreateArgs,
}

#[derive(Args)]
pub struct ProductDeleteArgs {
    pub id: String,
}
