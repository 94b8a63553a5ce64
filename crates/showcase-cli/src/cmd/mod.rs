pub mod config;
pub mod init;
pub mod past_work;
pub mod product;
pub mod serve;

use clap::Args;
use showcase_core::command::{Command, CommandHandler, Invocation};
use showcase_core::config::Config;
use showcase_core::service::CatalogService;
use showcase_core::store::CatalogStore;
use std::sync::Arc;

use crate::output::print_payload;

/// Identity the command runs as. Mutations are only accepted from the
/// configured operator.
#[derive(Args, Debug)]
pub struct Identity {
    /// Numeric id of the invoking user
    #[arg(long, env = "SHOWCASE_USER_ID")]
    pub user_id: u64,

    /// Display name recorded as `added_by` [default: $USER, then "operator"]
    #[arg(long, env = "SHOWCASE_USER_NAME")]
    pub user_name: Option<String>,
}

impl Identity {
    fn invocation(&self) -> Invocation {
        let user_name = self
            .user_name
            .clone()
            .or_else(|| std::env::var("USER").ok().filter(|u| !u.is_empty()))
            .unwrap_or_else(|| "operator".to_string());
        Invocation::new(self.user_id, user_name)
    }
}

/// Anyone may read the catalog; list commands run as an anonymous viewer.
fn viewer() -> Invocation {
    Invocation::new(0, "viewer")
}

/// Send one command through the shared handler and print its reply.
/// Rejected commands exit with status 1.
fn dispatch(
    config: &Config,
    invocation: &Invocation,
    command: Command,
    json: bool,
) -> anyhow::Result<()> {
    let store = CatalogStore::from_config(config);
    store.ensure_all()?;
    let handler = CommandHandler::new(Arc::new(CatalogService::new(store)), config.operator_id);

    tracing::debug!(command = command.name(), user_id = invocation.user_id, "dispatching");
    let payload = handler.handle(invocation, command);
    if !print_payload(&payload, json)? {
        std::process::exit(1);
    }
    Ok(())
}
