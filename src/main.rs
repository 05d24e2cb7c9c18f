use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use versioner::commands::{self, Bump, CurrentVersion};
use versioner::config::{
    Config, DEFAULT_VERSION_FILE, LOG_ENV, LogFormat, LoggingConfig, VERSION_FILE_ENV,
};
use versioner::{CommandRunner, ShellRunner, subscriber};

#[derive(Parser)]
#[command(name = "versioner", version)]
#[command(about = "Read, set and bump a project's semantic version kept in a JSON file")]
struct Cli {
    /// Path to the version file (created empty if missing)
    #[arg(short, long, global = true, default_value = DEFAULT_VERSION_FILE, env = VERSION_FILE_ENV)]
    file: PathBuf,

    /// Log filter directive, e.g. "info" or "versioner=debug"
    #[arg(long, global = true, default_value = "warn", env = LOG_ENV)]
    log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Disable coloured log output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            version_file: self.file.clone(),
            logging: LoggingConfig {
                level: self.log_level.clone(),
                format: self.log_format,
                color: !self.no_color,
            },
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current version
    #[command(alias = "versioner:current")]
    Current,

    /// Set the current version
    #[command(alias = "versioner:set")]
    Set {
        /// The SemVer version to set, e.g. 1.2.3 or v1.2.3
        version: String,

        /// Commit the version file and tag the commit in git
        #[arg(long)]
        git: bool,
    },

    /// Bump the current version (patch unless --major or --minor is given)
    Bump {
        /// Bump the major number
        #[arg(long)]
        major: bool,

        /// Bump the minor number
        #[arg(long)]
        minor: bool,

        /// Bump the patch number
        #[arg(long)]
        patch: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();

    if let Err(e) = subscriber::init(&config.logging) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    match run(&config, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, command: Commands) -> versioner::Result<()> {
    let store = config.open_store()?;

    match command {
        Commands::Current => match commands::current(&store)? {
            CurrentVersion::Uninitialized => {
                println!("No version has been set yet. Set one with the set <version> command.");
            }
            CurrentVersion::Set(version) => {
                println!("The current version is {version}");
            }
        },
        Commands::Set { version, git } => {
            let runner = ShellRunner::new();
            let git_runner = git.then_some(&runner as &dyn CommandRunner);

            let version = commands::set(&store, &version, git_runner, |written| {
                println!("Set the current version to {written}");
            })?;

            if git {
                println!("Committed and tagged {version}");
            }
        }
        Commands::Bump {
            major,
            minor,
            patch,
        } => {
            let outcome = commands::bump(&store, Bump::from_flags(major, minor, patch))?;
            println!(
                "Bumped the version from {} to {}",
                outcome.previous, outcome.current
            );
        }
    }

    Ok(())
}
