use chrono::Local;
use dox_config::DoxConfig;
use dox_snippet::completions_for;

use crate::cli::root_commands::CompleteArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `dox complete`.
pub fn handle(args: &CompleteArgs, config: &DoxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let completions = completions_for(
        Some(args.prev_char),
        args.in_comment,
        config.tag_sigil(),
        Local::now().date_naive(),
    );

    match flags.format {
        OutputFormat::Text => {
            for completion in &completions {
                println!(
                    "{}\t{}",
                    completion.trigger,
                    completion.insertion.replace('\n', "\\n")
                );
            }
            Ok(())
        }
        format => output(&completions, format),
    }
}
