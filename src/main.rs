use clap::{Parser, Subcommand, ValueEnum};
use std::collections::HashMap;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use datepicker::calendar::host::{ATTR_DATE_FORMAT, ATTR_MAX_DATE, ATTR_MIN_DATE};
use datepicker::calendar::NavigatorOptions;
use datepicker::date::DateFormat;
use datepicker::tui::{App, TerminalHost};
use datepicker::{commands, config};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "datepicker")]
#[command(about = "Keyboard and mouse driven date picker", long_about = "Keyboard and mouse driven date picker\n\nIf no command is specified, the program starts in interactive mode and prints the chosen date on exit.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Component order for typed dates (overrides config)
    #[arg(long = "format", global = true)]
    date_format: Option<FormatArg>,

    /// Earliest selectable date, in the chosen format
    #[arg(long, global = true)]
    min: Option<String>,

    /// Latest selectable date, in the chosen format
    #[arg(long, global = true)]
    max: Option<String>,

    /// Initial text of the date field (interactive mode)
    #[arg(short, long)]
    value: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Day/month/year
    #[value(name = "DMY", alias = "dmy")]
    Dmy,
    /// Month/day/year
    #[value(name = "MDY", alias = "mdy")]
    Mdy,
    /// Year/month/day
    #[value(name = "YMD", alias = "ymd")]
    Ymd,
}

impl FormatArg {
    /// Convert CLI FormatArg enum to date::DateFormat
    fn to_date_format(self) -> DateFormat {
        match self {
            FormatArg::Dmy => DateFormat::Dmy,
            FormatArg::Mdy => DateFormat::Mdy,
            FormatArg::Ymd => DateFormat::Ymd,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the month grid the picker would show
    Grid {
        /// Date to open on (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Normalize a typed date and print its long form
    Parse {
        /// Date text, e.g. 5/1/2025
        text: String,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "(none)".to_string());

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("date_format: {}", cfg.date_format);
    println!("min_date: {}", show(&cfg.min_date));
    println!("max_date: {}", show(&cfg.max_date));
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.display.unfocused_selection_fg(),
        if cfg.display.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("disabled_fg: {:?}", cfg.display.disabled_fg);
    println!("title_fg: {:?}", cfg.display.title_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Navigator options from the config file, with CLI bounds and format on top
///
/// CLI bounds must parse; a bad one is a usage error rather than a silent drop.
fn resolve_options(cli: &Cli, config: &config::Config) -> anyhow::Result<NavigatorOptions> {
    let mut options = config.navigator_options();
    if let Some(format) = cli.date_format {
        options.format = format.to_date_format();
    }
    if let Some(min) = &cli.min {
        options.min_date = Some(commands::parse_date_arg(min, options.format)?);
    }
    if let Some(max) = &cli.max {
        options.max_date = Some(commands::parse_date_arg(max, options.format)?);
    }
    Ok(options)
}

/// Run the interactive picker and print the field's final text
///
/// Config bounds become construction options; CLI bounds and format are
/// handed to the host as data attributes, re-read each time the dialog opens.
fn run_tui_mode(cli: &Cli, config: &config::Config) -> anyhow::Result<()> {
    let mut attributes = HashMap::new();
    if let Some(format) = cli.date_format {
        attributes.insert(ATTR_DATE_FORMAT.to_string(), format.to_date_format().to_string());
    }
    if let Some(min) = &cli.min {
        attributes.insert(ATTR_MIN_DATE.to_string(), min.clone());
    }
    if let Some(max) = &cli.max {
        attributes.insert(ATTR_MAX_DATE.to_string(), max.clone());
    }

    let value = cli.value.clone().unwrap_or_default();
    let today = chrono::Local::now().date_naive();
    let host = TerminalHost::new(value, attributes, today);
    let app = App::new(host, config.navigator_options())?;

    let value = datepicker::tui::run(app, &config.display)?;
    tracing::info!("Final value: '{}'", value);
    println!("{}", value);
    Ok(())
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(cli: &Cli, config: &config::Config, command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            handle_config_command(config);
            Ok(())
        }
        Commands::Grid { date } => {
            let options = resolve_options(cli, config)?;
            commands::grid::run(date.clone(), options, &config.display.box_chars())
        }
        Commands::Parse { text } => {
            let options = resolve_options(cli, config)?;
            commands::parse::run(text, options.format)
        }
    }
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let result = match &cli.command {
        None => run_tui_mode(&cli, &config),
        Some(command) => execute_command(&cli, &config, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
