use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use git_bump::cli::{self, normalize_args, Args};
use git_bump::{logging, ui, BumpError};

fn main() -> Result<ExitCode> {
    logging::init();

    let args = Args::parse_from(normalize_args(std::env::args()));
    let cwd = std::env::current_dir().context("Cannot determine the current directory")?;
    let intent = args.into_intent(&cwd);

    match cli::run(&intent) {
        Ok(outcome) => {
            if !outcome.failed_steps.is_empty() {
                ui::display_warning(&format!(
                    "Released {} but skipped: {}",
                    outcome.tag,
                    outcome.failed_steps.join(", ")
                ));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(BumpError::TagAlreadyExists { tag }) => {
            ui::display_tag_collision(&tag);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}
