use anyhow::Context;
use dox_config::DoxConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `dox config`.
///
/// Unlike generation, this surfaces configuration errors instead of falling
/// back to defaults.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = DoxConfig::load_with_dotenv().context("failed to load dox configuration")?;
    output(&config, flags.format)
}
