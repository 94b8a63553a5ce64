use clap::Subcommand;
use showcase_core::command::Command;
use showcase_core::config::Config;

use super::{dispatch, viewer, Identity};

#[derive(Subcommand)]
pub enum PastWorkSubcommand {
    /// Add a new past work project
    Add {
        /// The name of the past work project
        name: String,
        /// The video URL for the past work
        #[arg(long)]
        video: String,
        #[command(flatten)]
        identity: Identity,
    },
    /// Remove a past work project
    Remove {
        /// The name of the past work project to remove
        name: String,
        #[command(flatten)]
        identity: Identity,
    },
    /// List all past work projects
    List,
}

pub fn run(config: &Config, subcmd: PastWorkSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        PastWorkSubcommand::Add {
            name,
            video,
            identity,
        } => dispatch(
            config,
            &identity.invocation(),
            Command::AddPastWork { name, video },
            json,
        ),
        PastWorkSubcommand::Remove { name, identity } => dispatch(
            config,
            &identity.invocation(),
            Command::RemovePastWork { name },
            json,
        ),
        PastWorkSubcommand::List => dispatch(config, &viewer(), Command::ListPastWork, json),
    }
}
