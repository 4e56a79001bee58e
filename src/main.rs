use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use harambee_trust::config::{self, Config};
use harambee_trust::scoring::{self, FixedJitter, ProjectScorer, RandomJitter, ScoreResult};
use harambee_trust::server::{self, AppState};
use harambee_trust::sms::SmsGateway;
use harambee_trust::{client, output};

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the demo HTTP API (default if no subcommand)
    Serve {
        /// Address to listen on (overrides HARAMBEE_BIND and config)
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Score a project description locally
    Score {
        /// Free-form project description
        text: String,

        /// Seed the jitter for reproducible scores
        #[arg(long, conflicts_with = "no_jitter")]
        seed: Option<u64>,

        /// Disable the random adjustment entirely
        #[arg(long)]
        no_jitter: bool,

        /// Print the JSON response body instead of text
        #[arg(long)]
        json: bool,
    },
    /// Score a project description on a running server, falling back to local scoring
    Simulate {
        /// Free-form project description
        text: String,

        /// Base URL of the server
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        server: String,

        /// Request timeout (e.g. "10s", "500ms")
        #[arg(long, default_value = "10s", value_parser = humantime::parse_duration)]
        timeout: Duration,

        /// Print the JSON response body instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "harambee-trust")]
#[command(about = "Trust Simulator for community-treasury project proposals", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/harambee-trust/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    harambee_trust::install_crypto_provider();

    let cli = Cli::parse();
    harambee_trust::logging::init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Serve { bind: None });
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init { force } = command {
        match config::write_default_config(config_path, force) {
            Ok(path) => {
                println!("Wrote default config to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    if let Err(errors) = scoring::validate_scoring(&config.scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let scorer = match ProjectScorer::from_config(&config.scoring) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let code = match command {
        Commands::Serve { bind } => run_server(&config, scorer, bind.as_deref()).await,
        Commands::Score {
            text,
            seed,
            no_jitter,
            json,
        } => {
            let result = match (seed, no_jitter) {
                (_, true) => scorer.score_with(&text, &mut FixedJitter(0.0)),
                (Some(seed), false) => scorer.score_with(&text, &mut RandomJitter::seeded(seed)),
                (None, false) => scorer.score(&text),
            };
            print_result(&result, json, cli.verbose)
        }
        Commands::Simulate {
            text,
            server,
            timeout,
            json,
        } => {
            if text.trim().is_empty() {
                eprintln!("Project description must not be empty.");
                std::process::exit(EXIT_USAGE);
            }

            let (result, source) =
                client::simulate_with_fallback(&server, &text, timeout, &scorer).await;
            if source == client::Source::LocalFallback {
                eprintln!("Server unavailable at {}; showing a locally simulated result.", server);
            }
            print_result(&result, json, cli.verbose)
        }
        Commands::Init { .. } => EXIT_SUCCESS,
    };

    std::process::exit(code);
}

async fn run_server(config: &Config, scorer: ProjectScorer, bind: Option<&str>) -> i32 {
    let env_bind = config::get_bind_from_env();
    let addr = match config::resolve_bind(bind, env_bind.as_deref(), config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    let sms = match SmsGateway::from_config(&config.sms) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    tracing::debug!(
        jitter = scorer.jitter_amplitude(),
        "scoring config loaded"
    );

    match server::serve(addr, AppState::new(scorer, sms)).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Server error: {:#}", e);
            EXIT_NETWORK
        }
    }
}

fn print_result(result: &ScoreResult, json: bool, verbose: bool) -> i32 {
    if json {
        return match output::format_json(result) {
            Ok(body) => {
                println!("{}", body);
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to render result: {:#}", e);
                EXIT_USAGE
            }
        };
    }

    let use_colors = output::should_use_colors();
    let width = output::get_terminal_width();
    println!("{}", output::format_result(result, use_colors, width));

    // Remote results carry no breakdown
    if verbose && !result.breakdown.factors.is_empty() {
        println!();
        println!("{}", output::format_breakdown(result));
    }
    EXIT_SUCCESS
}
