//! Implementation of the `sparkstart delete` command.

use tracing::{info, instrument};

use sparkstart_core::application::ApplicationError;
use sparkstart_core::domain::validate_name;
use sparkstart_core::error::SparkError;

use crate::{
    cli::DeleteArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `sparkstart delete` command.
///
/// The name must be one `sparkstart new` could have created, and the
/// directory must exist, before anyone is asked anything. Without
/// `--yes` the user confirms on a terminal; with no terminal the command
/// refuses.
#[instrument(skip_all, fields(project = %args.name, github = args.github))]
pub fn execute(args: DeleteArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    validate_name(&args.name)?;

    let interactive = prompt::is_interactive();
    let base_dir = super::base_dir(args.dir.clone())?;
    // Deletion never prompts for a token.
    let service = super::build_service(config, &output, false)?;
    let target = base_dir.join(&args.name);

    if !service.project_exists(&args.name, &base_dir) {
        return Err(SparkError::from(ApplicationError::NotFound { path: target }).into());
    }

    if !args.yes {
        if !interactive {
            return Err(CliError::ConfirmationRequired { path: target });
        }
        if !prompt::confirm(&output, &confirmation_question(&args), false)? {
            return Err(CliError::Cancelled);
        }
    }

    output.start_spinner(&format!("Deleting {}", args.name));
    let result = service.delete_project(&target, args.github);
    output.finish_spinner();
    result?;

    info!(path = %target.display(), "Deleted");
    output.success(&format!("Project '{}' deleted", args.name))?;
    Ok(())
}

fn confirmation_question(args: &DeleteArgs) -> String {
    if args.github {
        format!(
            "Delete '{}' and its GitHub repository? This cannot be undone",
            args.name
        )
    } else {
        format!("Delete '{}'? This cannot be undone", args.name)
    }
}
