use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};

use ivrit::trace_init::init_tracing;
use ivrit_cli::commands::{config_ops, translate_ops};

#[derive(Parser)]
#[command(
    name = "ivrit",
    about = "Transliterate Hebrew source code into Latin keywords and identifiers",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    translate: TranslateArgs,
}

#[derive(Args)]
struct TranslateArgs {
    /// Source file to translate
    file: Option<PathBuf>,
    /// Directory for the translated file (default: current directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Write the output produced before a fatal error instead of nothing
    #[arg(long)]
    keep_partial: bool,
    /// Print the translation instead of writing a file (nothing is printed on error)
    #[arg(long, conflicts_with = "keep_partial")]
    stdout: bool,
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct CommonArgs {
    /// Keyword table TOML (see `ivrit keywords export`)
    #[arg(long)]
    keywords: Option<PathBuf>,
    /// Settings TOML (see `ivrit settings export`)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Write JSON trace logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Log keyword and identifier decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl CommonArgs {
    fn apply(&self) {
        init_tracing(self.log_dir.as_deref(), self.verbose);
        config_ops::init_custom(self.keywords.as_deref(), self.settings.as_deref());
    }
}

#[derive(Subcommand)]
enum Command {
    /// Scan a file and report counts without writing anything
    Check {
        /// Source file to scan
        file: PathBuf,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Export or validate the reserved-word table
    Keywords {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Export or validate settings
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default TOML
    Export,
    /// Check a TOML file
    Validate {
        /// TOML file to check
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Check { file, json, common }) => {
            common.apply();
            translate_ops::check_cmd(&file, json);
        }
        Some(Command::Keywords { action }) => match action {
            ConfigAction::Export => config_ops::keywords_export(),
            ConfigAction::Validate { file } => config_ops::keywords_validate(&file),
        },
        Some(Command::Settings { action }) => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
        None => {
            let args = cli.translate;
            let Some(file) = args.file else {
                Cli::command()
                    .error(
                        ErrorKind::MissingRequiredArgument,
                        "a source file is required",
                    )
                    .exit();
            };
            args.common.apply();
            translate_ops::translate_cmd(
                &file,
                args.out_dir.as_deref(),
                args.keep_partial,
                args.stdout,
            );
        }
    }
}
