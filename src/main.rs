use clap::Parser;
use git_commit_composer::commands::{execute_compose, Outcome};
use git_commit_composer::core::{print_commit_created, print_error, print_quit_selected};

#[derive(Parser)]
#[command(name = "git-commit-composer")]
#[command(about = "Compose a prefixed commit message in the terminal and commit the staged changes")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print version information
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn version_line() -> String {
    format!(
        "v{} (rev: {})",
        env!("CARGO_PKG_VERSION"),
        option_env!("GIT_COMMIT_COMPOSER_REVISION").unwrap_or("HEAD")
    )
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG still wins when it is set
    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.version {
        println!("{}", version_line());
        return;
    }

    let outcome = execute_compose();
    match &outcome {
        Outcome::Committed(id) => print_commit_created(id),
        Outcome::Cancelled => print_quit_selected(),
        Outcome::Failed(e) => print_error(&e.to_string()),
    }
    std::process::exit(outcome.exit_code());
}
