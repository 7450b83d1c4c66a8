// Command-line interface for wiki-events
//
// Reads a wiki token tree serialized as JSON, runs one conversion and prints the
// resulting event stream in one of the registered formats.
//
// Usage:
//  wikiev <tokens.json> [--to <format>] [--output <file>]          - Convert (default)
//  wikiev convert <tokens.json> [--to <format>] [--output <file>]  - Same as above (explicit)
//  wikiev --list-formats                                           - List available formats
//
// Conversion settings come from the embedded defaults, an optional wiki.toml in
// the working directory, an explicit --config file and finally the command-line
// flags, in that order.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wiki_config::{Loader, WikiConfig};
use wiki_events::{parse_tokens, ConversionReport, Converter, EventFormatRegistry, EventRecorder};

const SUBCOMMANDS: &[&str] = &["convert", "help"];

fn build_cli() -> Command {
    Command::new("wikiev")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert wiki token trees into document event streams")
        .long_about(
            "wikiev turns a parsed wiki markup token tree (JSON) into the nested\n\
            event stream a document model listener would receive.\n\n\
            Examples:\n  \
            wikiev page.json                         # Indented event trace (stdout)\n  \
            wikiev page.json --to json -o out.json   # JSON event array to a file\n  \
            wikiev page.json --reference-type native # Wiki title conventions for links",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available event stream formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a wiki.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a token tree into an event stream (default command)")
                .arg(
                    Arg::new("input")
                        .help("Token tree as JSON")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Event stream format (defaults to output.format from config)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("reference-type")
                        .long("reference-type")
                        .help("How link and image targets are interpreted")
                        .value_parser(["none", "structured", "native"]),
                )
                .arg(
                    Arg::new("no-toc")
                        .long("no-toc")
                        .help("Drop table-of-contents markers that were not explicitly requested")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("template-prefix")
                        .long("template-prefix")
                        .value_name("STR")
                        .help("Prefix for macro ids synthesized from template calls"),
                )
                .arg(
                    Arg::new("max-depth")
                        .long("max-depth")
                        .value_name("N")
                        .help("Recursion ceiling; deeper subtrees are dropped")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

/// Inserts the implied `convert` subcommand when the first argument is a file.
fn with_implied_convert(args: Vec<String>) -> Vec<String> {
    match args.get(1) {
        Some(first) if !first.starts_with('-') && !SUBCOMMANDS.contains(&first.as_str()) => {
            let mut injected = vec![args[0].clone(), "convert".to_string()];
            injected.extend_from_slice(&args[1..]);
            injected
        }
        _ => args,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let args = with_implied_convert(std::env::args().collect());
    let matches = build_cli().get_matches_from(args);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let config = load_cli_config(
                matches.get_one::<String>("config").map(|s| s.as_str()),
                sub_matches,
            )
            .unwrap_or_else(|err| {
                eprintln!("Failed to load configuration: {err}");
                std::process::exit(1);
            });
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .map(|s| s.as_str())
                .unwrap_or(config.output.format.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn handle_convert_command(input: &str, to: &str, output: Option<&str>, config: &WikiConfig) {
    let formats = EventFormatRegistry::default();
    if let Err(e) = formats.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let options = config.converter_options().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let tokens = parse_tokens(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let mut recorder = EventRecorder::new();
    let report = Converter::new(options).convert_owned(tokens, &mut recorder);
    let events = recorder.into_events();
    if let Some(summary) = report_summary(&report) {
        eprintln!("{summary}");
    }

    let mut text = formats.write(&events, to).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match output {
        Some(path) => fs::write(path, text).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{text}"),
    }
}

fn handle_list_formats_command() {
    let formats = EventFormatRegistry::default();
    println!("Available formats:");
    for name in formats.list_formats() {
        match formats.get(&name) {
            Ok(format) if !format.description().is_empty() => {
                println!("  {name:<8} {}", format.description())
            }
            _ => println!("  {name}"),
        }
    }
}

/// One line for stderr when the conversion dropped content.
fn report_summary(report: &ConversionReport) -> Option<String> {
    if report.is_lossless() {
        return None;
    }
    Some(format!(
        "warning: conversion was lossy ({} subtree(s) truncated at the depth ceiling, {} text run(s) skipped)",
        report.truncated_subtrees, report.skipped_text_runs
    ))
}

fn load_cli_config(
    explicit_path: Option<&str>,
    matches: &ArgMatches,
) -> Result<WikiConfig, wiki_config::ConfigError> {
    let loader = Loader::new().with_optional_file("wiki.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    apply_overrides(loader, matches)?.build()
}

fn apply_overrides(
    mut loader: Loader,
    matches: &ArgMatches,
) -> Result<Loader, wiki_config::ConfigError> {
    if let Some(policy) = matches.get_one::<String>("reference-type") {
        loader = loader.set_override("convert.reference_type", policy.as_str())?;
    }
    if matches.get_flag("no-toc") {
        loader = loader.set_override("convert.no_toc", true)?;
    }
    if let Some(prefix) = matches.get_one::<String>("template-prefix") {
        loader = loader.set_override("convert.template_macro_prefix", prefix.as_str())?;
    }
    if let Some(depth) = matches.get_one::<u64>("max-depth") {
        loader = loader.set_override("convert.max_depth", *depth)?;
    }
    if let Some(to) = matches.get_one::<String>("to") {
        loader = loader.set_override("output.format", to.as_str())?;
    }
    Ok(loader)
}
