use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use git_bump::config::load_config;
use git_bump::domain::BumpKind;
use git_bump::git::Git2Repository;
use git_bump::identity::GitConfigIdentity;
use git_bump::publisher::PushSettings;
use git_bump::ui::{format_error, Output, TerminalPrompter};

/// Environment variable overriding the log filter
const LOG_ENV: &str = "GIT_BUMP_LOG";

#[derive(clap::Parser)]
#[command(
    name = "git-bump",
    version,
    about = "Tag HEAD with the next semantic version and push the tag to origin"
)]
struct Args {
    #[arg(value_name = "PATH", default_value = ".", help = "Repository working directory")]
    path: PathBuf,

    #[arg(long, help = "Bump up major version")]
    major: bool,

    #[arg(long, help = "Bump up minor version")]
    minor: bool,

    #[arg(long, help = "Bump up patch version")]
    patch: bool,

    #[arg(short, long, help = "Be quiet")]
    quiet: bool,

    #[arg(short, long, value_name = "FILE", help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Log diagnostic details to stderr")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("{}", format_error(e.to_string().trim()));
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// The `[ERROR]` line for a failed run. `BumpError` messages already include their cause
fn error_line(error: &anyhow::Error) -> String {
    format_error(&error.to_string())
}

fn init_tracing(args: &Args) {
    let default_filter = if args.quiet {
        "off"
    } else if args.verbose {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let mut output = if args.quiet {
        Output::quiet()
    } else {
        Output::stdio()
    };

    let repo = Git2Repository::open(&args.path)?;
    let config = load_config(args.config.as_deref(), &args.path)?;
    let identity = GitConfigIdentity::from_config(repo.config()?)?;

    let workflow_args = BumpWorkflowArgs {
        requested: BumpKind::from_flags(args.major, args.minor, args.patch),
        push: PushSettings::from_config(&config.remote),
    };

    run_bump_workflow(
        &repo,
        &identity,
        &TerminalPrompter,
        &workflow_args,
        &mut output,
    )?;
    Ok(())
}
