//! Command-line interface for sassy
//! This binary converts indentation-nested style sheets into brace-delimited CSS.
//!
//! Usage:
//!   sassy convert `<path>`                               - Print the converted file (`-` reads stdin)
//!   sassy batch [--dir `<dir>`] [--ext `<ext>`] [--dry-run] - Rewrite every matching file in place
//!
//! Settings come from the embedded defaults, then `sassy.toml` in the working directory (or
//! the file given with `--config`), then command-line flags.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sassy::driver::{self, FileReport};
use sassy::settings::{Loader, SassyConfig, LOCAL_CONFIG_FILE};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sassy=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let indent_width = Arg::new("indent-width")
        .long("indent-width")
        .help("Whitespace characters per nesting level")
        .value_parser(value_parser!(u32).range(1..));

    let matches = Command::new("sassy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts indentation-nested style sheets into brace-delimited CSS")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("convert")
                .about("Print the converted text of a single file")
                .arg(
                    Arg::new("path")
                        .help("Path to the style sheet, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(indent_width.clone()),
        )
        .subcommand(
            Command::new("batch")
                .about("Rewrite every matching style sheet in a directory in place")
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .short('d')
                        .help("Directory holding the style sheets"),
                )
                .arg(
                    Arg::new("ext")
                        .long("ext")
                        .short('e')
                        .help("File extension to convert (without the dot)"),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Report what would change without writing")
                        .action(ArgAction::SetTrue),
                )
                .arg(indent_width),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("convert", convert_matches)) => {
            let config = load_config(&matches, convert_matches);
            let path = convert_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_convert_command(&config, path);
        }
        Some(("batch", batch_matches)) => {
            let config = load_config(&matches, batch_matches);
            handle_batch_command(&config);
        }
        _ => unreachable!(),
    }
}

/// Layer defaults, config files and command-line flags.
fn load_config(matches: &ArgMatches, sub_matches: &ArgMatches) -> SassyConfig {
    let mut loader = Loader::new();
    loader = match sub_matches
        .get_one::<String>("config")
        .or_else(|| matches.get_one::<String>("config"))
    {
        Some(path) => loader.with_file(path),
        None => loader.with_optional_file(LOCAL_CONFIG_FILE),
    };

    let result = apply_overrides(loader, sub_matches)
        .and_then(|loader| loader.build().map_err(sassy::Error::from));
    result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn apply_overrides(mut loader: Loader, matches: &ArgMatches) -> sassy::Result<Loader> {
    if let Some(width) = matches.get_one::<u32>("indent-width") {
        loader = loader.set_override("transform.indent_width", i64::from(*width))?;
    }
    if let Some(dir) = optional_arg::<String>(matches, "dir") {
        loader = loader.set_override("batch.directory", dir.as_str())?;
    }
    if let Some(ext) = optional_arg::<String>(matches, "ext") {
        loader = loader.set_override("batch.extension", ext.as_str())?;
    }
    if optional_arg::<bool>(matches, "dry-run").copied().unwrap_or(false) {
        loader = loader.set_override("batch.dry_run", true)?;
    }
    Ok(loader)
}

/// Look up an argument that only some subcommands define.
fn optional_arg<'a, T>(matches: &'a ArgMatches, id: &str) -> Option<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    matches.try_get_one::<T>(id).ok().flatten()
}

/// Handle the convert command
fn handle_convert_command(config: &SassyConfig, path: &str) {
    let converted = if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            });
        sassy::convert_sass_to_css_with(&source, &config.transform)
    } else {
        driver::convert_file(Path::new(path), &config.transform).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        })
    };

    print!("{}", converted);
}

/// Handle the batch command
fn handle_batch_command(config: &SassyConfig) {
    let dry_run = config.batch.dry_run;
    let result = driver::convert_directory(&config.batch, &config.transform, |report| {
        println!("{}", describe(report, dry_run));
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn describe(report: &FileReport, dry_run: bool) -> String {
    let name = report.file_name();
    match (report.changed, dry_run) {
        (false, _) => format!("Unchanged {}", name),
        (true, true) => format!("Would convert {}", name),
        (true, false) => format!("Converted {}", name),
    }
}
