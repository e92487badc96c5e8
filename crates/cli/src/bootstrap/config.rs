use rootwalk_domain::{CliOverrides, Config};

/// Runs before logging is installed, so it reports through its result only.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
