use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use attentive_cli::config::{self, AttentiveConfig};
use attentive_cli::logging::{self, LogFormat};
use attentive_cli::output::{self, ReportFormat};
use attentive_cli::{score, take};
use attentive_instruments::{Instrument, require_instrument};

const INSTRUMENT_ID: &str = "asrs_v1_1";

#[derive(Parser)]
#[command(name = "attentive")]
#[command(about = "ADHD self-report screening (ASRS v1.1)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// List the questionnaire items
    Questions,
    /// Score a screening input JSON document
    Score {
        /// Input file, or `-` for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(long, short = 'f', value_enum)]
        format: Option<ReportFormat>,

        /// Write the report here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Take the questionnaire interactively
    Take {
        #[arg(long, short = 'f', value_enum)]
        format: Option<ReportFormat>,

        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    logging::init(cli.debug, cli.log_format)?;

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command {
        Commands::Questions => print_questions(&*require_instrument(INSTRUMENT_ID)?),
        Commands::Score {
            input,
            format,
            output,
        } => {
            let config = config::load_config(&config_path)?;
            let instrument = require_instrument(INSTRUMENT_ID)?;
            let result = score::score_input(&*instrument, score::read_input(&input)?)?;
            tracing::info!(
                result_id = %result.id,
                part_a_score = result.part_a_score,
                "scored screening input"
            );

            let format = format.unwrap_or(config.default_format);
            let bytes = output::render(&result, format, &config, &config_path)?;
            output::write_output(&bytes, format, output.as_deref())
        }
        Commands::Take { format, output } => {
            let config = config::load_config(&config_path)?;
            let instrument = require_instrument(INSTRUMENT_ID)?;
            let Some(result) = take::run(&*instrument)? else {
                return Ok(());
            };

            let format = format.unwrap_or(config.default_format);
            let bytes = output::render(&result, format, &config, &config_path)?;
            output::write_output(&bytes, format, output.as_deref())
        }
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => {
                let config = config::load_config(&config_path)?;
                tracing::info!(path = %config_path.display(), "effective config");
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
            ConfigCommands::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&AttentiveConfig::default(), &config_path)?;
                println!("{}", config_path.display());
                Ok(())
            }
        },
    }
}

fn print_questions(instrument: &dyn Instrument) -> Result<()> {
    println!("{}", instrument.name());
    for question in instrument.questions() {
        println!(
            "{:>2}. [{}, {} or above] {}",
            question.id,
            question.part.label(),
            question.rule.threshold().label().to_lowercase(),
            question.text
        );
    }
    Ok(())
}
