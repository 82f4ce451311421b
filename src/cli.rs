use std::{env, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::{
    actions::Action,
    config::{Config, DispatchMode},
    errors::{GitError, OcommitError, Result},
    git::{
        commit::{execute_commit, terminal_command},
        locator::{find_repositories, list_modules},
    },
    prompt::InquirePrompter,
    utils::{print_info, print_success, print_warning},
    workflow::{Prompter, Session, Workflow},
};

#[derive(Subcommand)]
enum Commands {
    /// Commit subcommand
    /// Scan for repositories, build the commit message interactively and
    /// dispatch it.
    #[command(short_flag = 'c')]
    Commit {
        /// Root directory to scan for repositories (defaults to the
        /// configured root, then the current directory)
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Run the commit directly instead of printing the command line
        #[arg(short = 'e', long, default_value_t = false)]
        execute: bool,
    },

    /// Cancel an in-progress commit workflow.
    Cancel,

    /// List the recognized action tags with their descriptions
    /// (also used for shell completion).
    #[command(short_flag = 'l', name = "list-actions")]
    ListActions,

    /// Create the configuration file.
    Init {
        /// Dispatch mode to start with
        #[arg(value_enum, default_value_t = DispatchMode::Terminal)]
        mode: DispatchMode,
    },

    /// Change the dispatch mode in the configuration file.
    SetMode {
        #[arg(value_enum)]
        mode: DispatchMode,
    },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
#[command(about = "Simple program that:\n\
\t- Builds an Odoo-style tagged commit message interactively.\n\
\t- Prints the 'git commit' command or runs it in the chosen repository.")]
#[command(help_template = "{about}\n\nUSAGE:\n{usage}\n\n{all-args}\n")]
#[command(name = "ocommit")]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    command: Commands,

    /// Verbose
    /// Optional 'verbose' argument. Only works if a subcommand is passed.
    /// If passed, it will print more information about the operation.
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// # `run`
/// Runs the program.
///
/// ## Errors
/// Returns an error if the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Commit { root, execute } => run_commit(root, execute, cli.verbose),
        Commands::Cancel => {
            // One process hosts at most one workflow, and `commit` blocks
            // until it finishes, so a fresh invocation never observes an
            // active session.
            let session = Session::new();

            if !session.cancel() {
                print_warning(
                    "No commit workflow in progress",
                    "There is nothing to cancel.",
                );
            }

            Ok(())
        }
        Commands::ListActions => {
            for action in Action::ALL {
                println!("{:<6} {}", action.tag(), action.description());
            }

            Ok(())
        }
        Commands::Init { mode } => {
            let config = Config::new()?;
            config.create(mode)?;

            print_success(
                "Configuration created",
                &format!("{}", config.config_file_path().display()),
            );

            Ok(())
        }
        Commands::SetMode { mode } => {
            let config = Config::new()?;
            config.set_mode(mode)?;

            print_success("Dispatch mode updated", &format!("mode = {mode}"));

            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());

            Ok(())
        }
    }
}

fn run_commit(root: Option<PathBuf>, execute: bool, verbose: bool) -> Result<()> {
    let settings = Config::new()?.load()?;

    let scan_root = match root.or(settings.root) {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    let mode = if execute {
        DispatchMode::Execute
    } else {
        settings.mode
    };

    let session = Session::new();
    let prompter = InquirePrompter;

    let result = session.run(|| commit_workflow(&prompter, &scan_root, mode, verbose));

    match result {
        Err(OcommitError::UserCancelled) => {
            print_warning("Commit cancelled", "No commit was made.");
            Ok(())
        }
        Err(OcommitError::WorkflowBusy) => {
            print_warning(
                "A commit workflow is already in progress",
                "Finish or cancel it before starting another one.",
            );
            Ok(())
        }
        other => other,
    }
}

fn commit_workflow(
    prompter: &impl Prompter,
    scan_root: &std::path::Path,
    mode: DispatchMode,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("Scanning {} for repositories...", scan_root.display());
    }

    let repositories = find_repositories(scan_root)?;

    if repositories.is_empty() {
        return Err(GitError::NoRepositoriesFound {
            root: scan_root.display().to_string(),
        }
        .into());
    }

    let repository = prompter.select_repository(&repositories)?;
    let modules = list_modules(&repository.path)?;

    let workflow = Workflow::new(prompter, modules);
    let draft = workflow.run()?;
    let message = draft.compose();

    match mode {
        DispatchMode::Terminal => {
            println!("{}", terminal_command(&message));
            print_info(
                "Commit command ready",
                "Paste the line above into your terminal to run the commit.",
            );
        }
        DispatchMode::Execute => {
            execute_commit(&repository.path, &message, verbose)?;
            print_success("Commit created", &repository.label);
        }
    }

    Ok(())
}
