use clap::Subcommand;
use showcase_core::command::Command;
use showcase_core::config::Config;

use super::{dispatch, viewer, Identity};

#[derive(Subcommand)]
pub enum ProductSubcommand {
    /// Add a new product to the academy shop
    Add {
        /// The name of the product
        name: String,
        /// The link to the product
        #[arg(long)]
        link: String,
        /// The video URL for the product
        #[arg(long)]
        video: String,
        #[command(flatten)]
        identity: Identity,
    },
    /// Remove a product from the academy shop
    Remove {
        /// The name of the product to remove
        name: String,
        #[command(flatten)]
        identity: Identity,
    },
    /// List all products in the academy shop
    List,
}

pub fn run(config: &Config, subcmd: ProductSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ProductSubcommand::Add {
            name,
            link,
            video,
            identity,
        } => dispatch(
            config,
            &identity.invocation(),
            Command::AddProduct { name, link, video },
            json,
        ),
        ProductSubcommand::Remove { name, identity } => dispatch(
            config,
            &identity.invocation(),
            Command::RemoveProduct { name },
            json,
        ),
        ProductSubcommand::List => dispatch(config, &viewer(), Command::ListProducts, json),
    }
}
