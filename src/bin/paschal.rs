use anyhow::{Context, Result, bail};
use log::LevelFilter;
use paschal::config::Config;
use paschal::holiday::OffsetDays;
use paschal::{cli, ics, verify};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;
use std::fs;

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() == 1 || args.iter().any(|a| a == "--help" || a == "-h" || a == "help") {
        cli::print_help("paschal");
        return Ok(());
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("paschal v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut name: Option<String> = None;
    let mut offset: Option<i64> = None;
    let mut check = false;
    let mut wrap = false;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--check" => {
                check = true;
                i += 1;
            }
            "--wrap" => {
                wrap = true;
                i += 1;
            }
            "-o" | "--output" => {
                if i + 1 >= args.len() {
                    bail!("--output requires a path");
                }
                output = Some(args[i + 1].clone());
                i += 2;
            }
            arg if name.is_none() => {
                name = Some(arg.to_string());
                i += 1;
            }
            arg if offset.is_none() => {
                offset = Some(
                    arg.parse()
                        .with_context(|| format!("Invalid offset '{}', expected an integer", arg))?,
                );
                i += 1;
            }
            arg => bail!("Unexpected argument '{}'", arg),
        }
    }

    let name = name.context("Missing holiday name (see --help)")?;
    let offset = OffsetDays::new(offset.context("Missing offset in days before Easter")?)?;

    let mut config = Config::load()?;
    if wrap {
        config.wrap_calendar = true;
    }

    if check {
        let report = verify::check(offset)?;
        log::info!(
            "verified {} occurrences across {} windows",
            report.occurrences,
            report.windows
        );
    }

    let rendered = ics::render(&name, offset, &config)?;
    match output {
        Some(path) => fs::write(&path, rendered)
            .with_context(|| format!("Failed to write output file '{}'", path))?,
        None => print!("{}", rendered),
    }
    Ok(())
}

fn init_logging() {
    let level = env::var("PASCHAL_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
