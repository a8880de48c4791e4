use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gwa_calc::calc::{CalcRequest, EXIT_CONFIG, EXIT_RUNTIME, EXIT_SUCCESS};
use gwa_calc::config::{Config, ThemeMode};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Edit rows in an interactive table (default if no subcommand)
    Tui,
    /// Compute a GWA once and print it
    Calc {
        /// Rows as UNITS:GRADE (e.g. 3:1.5). Read from stdin when omitted
        pairs: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Decimal places in the printed result (overrides config)
        #[arg(short, long)]
        decimal_places: Option<usize>,

        /// Reject zero or negative units (overrides config)
        #[arg(long)]
        strict: bool,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "gwa-calc")]
#[command(about = "General weighted average calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/gwa-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Color theme (overrides config)
    #[arg(long, global = true, value_enum)]
    theme: Option<ThemeMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        if let Err(e) = gwa_calc::config::init::run_init_wizard(config_path) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let mut config = match gwa_calc::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    if cli.verbose {
        eprintln!(
            "Config: {} initial rows, {} decimal places, {:?} theme, {} units",
            config.initial_rows, config.decimal_places, config.theme, config.units_policy
        );
    }

    // Validate config at startup
    if let Err(errors) = gwa_calc::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let code = match command {
        Commands::Tui => run_tui(&config, cli.verbose).await,
        Commands::Calc {
            pairs,
            json,
            decimal_places,
            strict,
        } => {
            let request = CalcRequest {
                pairs,
                json,
                decimal_places,
                strict,
            };
            run_calc(&config, &request, cli.verbose)
        }
        Commands::Init => EXIT_SUCCESS,
    };

    std::process::exit(code);
}

async fn run_tui(config: &Config, verbose: bool) -> i32 {
    // Resolve before the TUI takes over the terminal
    let theme = gwa_calc::tui::resolve_theme(config.theme);
    let app = gwa_calc::tui::App::new(config, theme, verbose);

    match gwa_calc::tui::run_tui(app).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Terminal error: {:#}", e);
            EXIT_RUNTIME
        }
    }
}

fn run_calc(config: &Config, request: &CalcRequest, verbose: bool) -> i32 {
    let output = gwa_calc::calc::run_calc(
        config,
        request,
        std::io::stdin().lock(),
        verbose,
        gwa_calc::output::should_use_colors(),
    );

    for line in &output.stderr {
        eprintln!("{}", line);
    }
    for line in &output.stdout {
        println!("{}", line);
    }
    output.code
}
