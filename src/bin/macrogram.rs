//! Command-line interface for macrogram
//!
//! Usage:
//!   macrogram classify `<path>` [--format `<format>`] [--config `<file>`] [--kinds `<k1,k2>`]
//!   macrogram parse `<kind>` `<line>` [--format `<format>`]
//!   macrogram list-kinds
//!
//! Set `RUST_LOG=macrogram=trace` to see every grammar attempt.

use clap::{Arg, ArgMatches, Command};
use macrogram::config::Loader;
use macrogram::grammar::{BlockTag, LineParser, Outcome, ParserKind};
use macrogram::scan::{scan_body, ScanOptions};
use serde::Serialize;
use std::process;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format: text, json or yaml")
        .value_parser(["text", "json", "yaml"])
        .default_value("text")
}

fn main() {
    init_tracing();

    let matches = Command::new("macrogram")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classify macro body lines against the line grammars")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("classify")
                .about("Classify every line of a macro body")
                .arg(
                    Arg::new("path")
                        .help("Path to the macro body")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg())
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the defaults and ./macrogram.toml"),
                )
                .arg(
                    Arg::new("kinds")
                        .long("kinds")
                        .short('k')
                        .help("Comma separated grammar order, overriding the configuration"),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse one line with one grammar")
                .arg(
                    Arg::new("kind")
                        .help("Grammar kind (see list-kinds)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("line")
                        .help("The line to parse")
                        .required(true)
                        .index(2),
                )
                .arg(format_arg()),
        )
        .subcommand(Command::new("list-kinds").about("List grammar kinds and block tags"))
        .get_matches();

    let code = match matches.subcommand() {
        Some(("classify", sub)) => handle_classify_command(sub),
        Some(("parse", sub)) => handle_parse_command(sub),
        Some(("list-kinds", _)) => handle_list_kinds_command(),
        _ => unreachable!(),
    };
    process::exit(code);
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(2);
}

fn render<T: Serialize>(value: &T, format: &str) -> String {
    let rendered = match format {
        "yaml" => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        _ => serde_json::to_string_pretty(value)
            .map(|json| json + "\n")
            .map_err(|e| e.to_string()),
    };
    rendered.unwrap_or_else(|e| fail(format!("cannot serialize output: {}", e)))
}

fn parse_kind_list(list: &str) -> Vec<ParserKind> {
    list.split(',')
        .filter(|item| !item.trim().is_empty())
        .map(|item| item.parse::<ParserKind>().unwrap_or_else(|e| fail(e)))
        .collect()
}

/// Project settings picked up from the working directory when present
const LOCAL_CONFIG: &str = "macrogram.toml";

fn scan_options(matches: &ArgMatches) -> ScanOptions {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let config = loader
        .build()
        .unwrap_or_else(|e| fail(format!("cannot load configuration: {}", e)));

    let mut options = config.scan_options();
    if let Some(kinds) = matches.get_one::<String>("kinds") {
        options.order = parse_kind_list(kinds);
    }
    options
}

/// Handle the classify command; exit status 1 when any line errored
fn handle_classify_command(matches: &ArgMatches) -> i32 {
    let Some(path) = matches.get_one::<String>("path") else {
        fail("missing path");
    };
    let format = matches
        .get_one::<String>("format")
        .map_or("text", String::as_str);
    let source = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("cannot read {}: {}", path, e)));

    let report = scan_body(&source, &scan_options(matches));
    match format {
        "text" => {
            print!("{}", report.to_text());
            for diagnostic in report.errors() {
                eprintln!("{}", diagnostic.render(&source));
            }
        }
        other => print!("{}", render(&report, other)),
    }

    i32::from(report.has_errors())
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    kind: ParserKind,
    outcome: Outcome,
    #[serde(skip_serializing_if = "String::is_empty")]
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parsed: Option<&'a macrogram::grammar::Parsed>,
}

/// Handle the parse command; exit status 1 on `Error`
fn handle_parse_command(matches: &ArgMatches) -> i32 {
    let (Some(kind), Some(line)) = (
        matches.get_one::<String>("kind"),
        matches.get_one::<String>("line"),
    ) else {
        fail("missing kind or line");
    };
    let kind: ParserKind = kind.parse().unwrap_or_else(|e| fail(e));
    let format = matches
        .get_one::<String>("format")
        .map_or("text", String::as_str);

    let mut parser = LineParser::new(kind);
    let outcome = parser.parse(line);
    let output = ParseOutput {
        kind,
        outcome,
        error: parser.error_text(),
        parsed: parser.parsed(),
    };

    match format {
        "text" => {
            println!("{} {}", kind, outcome);
            if !output.error.is_empty() {
                println!("{}", output.error);
            }
            if let Some(parsed) = output.parsed {
                println!("{:?}", parsed);
            }
        }
        other => print!("{}", render(&output, other)),
    }

    i32::from(outcome == Outcome::Error)
}

fn handle_list_kinds_command() -> i32 {
    println!("Grammar kinds:\n");
    for kind in ParserKind::GRAMMARS {
        println!("  {}", kind);
    }
    println!("\nBlock tags:\n");
    for tag in BlockTag::ALL {
        println!("  <{}>", tag);
    }
    0
}
