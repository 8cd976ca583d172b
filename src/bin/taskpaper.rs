//! Command-line interface for taskpaper
//! Parses TaskPaper outlines and prints the resulting tree in a chosen format.
//!
//! Usage:
//!   taskpaper [`<path>`...] [--config `<config>`] [--format `<format>`]  - Parse files (or stdin)
//!   taskpaper --list-configs                                        - List parse configurations
//!   taskpaper --list-formats                                        - List output formats

use clap::{Arg, ArgAction, Command};
use flexi_logger::{Logger, LoggerHandle};
use std::fs::File;
use std::io::{self, BufReader};
use taskpaper::{read_outline, ConfigRegistry, FormatRegistry, Outline, ParseConfig, ReadError};

fn main() {
    let matches = Command::new("taskpaper")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting TaskPaper outlines")
        .arg(
            Arg::new("paths")
                .help("Files to parse; '-' or nothing reads stdin")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration name (e.g., 'nested', 'flat', 'nested-width')")
                .default_value("nested"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'treeviz', 'sexp', 'json', 'yaml')")
                .default_value("treeviz"),
        )
        .arg(
            Arg::new("list-configs")
                .long("list-configs")
                .help("List available parse configurations")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable); RUST_LOG overrides")
                .action(ArgAction::Count),
        )
        .get_matches();

    let _logger = init_logging(matches.get_count("verbose"));

    let configs = ConfigRegistry::with_defaults();
    let formats = FormatRegistry::with_defaults();

    if matches.get_flag("list-configs") {
        handle_list_configs_command(&configs);
        return;
    }
    if matches.get_flag("list-formats") {
        handle_list_formats_command(&formats);
        return;
    }

    let config_name = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("nested");
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("treeviz");
    let paths: Vec<String> = matches
        .get_many::<String>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_else(|| vec!["-".to_string()]);

    let config = configs.resolve(config_name).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable configurations:");
        for config in configs.list_all() {
            eprintln!("  {} - {}", config.name, config.description);
        }
        std::process::exit(1);
    });
    if let Err(e) = formats.lookup(format) {
        eprintln!("Error: {}", e);
        eprintln!("Available formats: {}", formats.list_formats().join(", "));
        std::process::exit(1);
    }

    let mut failed = false;
    for path in &paths {
        failed |= !handle_parse_command(path, &config, format, &formats);
    }
    if failed {
        std::process::exit(1);
    }
}

/// Route log records to stderr; the handle must stay alive for the whole run.
fn init_logging(verbosity: u8) -> Option<LoggerHandle> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Logger::try_with_env_or_str(level)
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|e| eprintln!("Warning: logging disabled: {}", e))
        .ok()
}

/// Parse one input and print it. Returns false when the input could not be fully read.
fn handle_parse_command(
    path: &str,
    config: &ParseConfig,
    format: &str,
    formats: &FormatRegistry,
) -> bool {
    let result = if path == "-" {
        read_outline(io::stdin().lock(), config)
    } else {
        match File::open(path) {
            Ok(file) => read_outline(BufReader::new(file), config),
            Err(e) => {
                eprintln!("Error reading file {}: {}", path, e);
                return false;
            }
        }
    };

    match result {
        Ok(outline) => print_outline(&outline, format, formats),
        Err(ReadError::Decode(err)) => {
            eprintln!("Error in {}: {}", path, err);
            eprintln!("Showing the outline parsed before line {}", err.line);
            print_outline(&err.partial, format, formats);
            false
        }
        Err(err) => {
            eprintln!("Error in {}: {}", path, err);
            false
        }
    }
}

fn print_outline(outline: &Outline, format: &str, formats: &FormatRegistry) -> bool {
    match formats.serialize(outline, format) {
        Ok(output) => {
            print!("{}", output);
            true
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            false
        }
    }
}

fn handle_list_configs_command(configs: &ConfigRegistry) {
    println!("Available parse configurations:\n");
    for config in configs.list_all() {
        println!("  {}", config.name);
        println!("    {}", config.description);
    }
}

fn handle_list_formats_command(formats: &FormatRegistry) {
    println!("Available output formats:\n");
    for (name, description) in formats.describe() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
