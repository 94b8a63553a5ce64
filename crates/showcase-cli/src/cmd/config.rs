use showcase_core::config::Config;

use crate::output::print_json;

/// Print the effective configuration after flags, environment and file are merged.
pub fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(config);
    }
    print!("{}", serde_yaml::to_string(config)?);
    Ok(())
}
