//! alfabeto-audio — generates the letter and feedback clips for the game.
//!
//! Usage:
//!   alfabeto-audio [--config <path>] [--out <dir>] [--delay-ms <n>]
//!                  [--only letters|sounds] [--skip-existing]

use alfabeto_audio::config::parse_delay_ms;
use alfabeto_audio::{AudioGenerator, GeneratorConfig, Selection};
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliOptions {
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    delay_ms: Option<u64>,
    only: Selection,
    skip_existing: bool,
}

enum Command {
    Run(CliOptions),
    Help,
    Version,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("alfabeto-audio {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let config = load_config(&options)?;

    println!("🎵 Audio generator - Alfabeto Aprender");
    println!(
        "📍 Using {} ({}) for every clip",
        config.tts.base_url, config.tts.locale
    );
    println!();

    let generator = AudioGenerator::from_config(config)?;
    let report = generator.run(options.only).await?;

    print!("{report}");
    // Partial failures are reported above; the exit status stays 0.
    Ok(())
}

fn load_config(options: &CliOptions) -> alfabeto_audio::Result<GeneratorConfig> {
    let config = match &options.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    let mut config = config.with_env_overrides()?;
    if let Some(out) = &options.out {
        config.output_dir = out.clone();
    }
    if let Some(delay) = options.delay_ms {
        config.delay_ms = delay;
    }
    if options.skip_existing {
        config.skip_existing = true;
    }
    Ok(config)
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "help" | "--help" | "-h" => return Ok(Command::Help),
            "version" | "--version" | "-V" => return Ok(Command::Version),
            "--config" => options.config = Some(PathBuf::from(value_for(arg, iter.next())?)),
            "--out" => options.out = Some(PathBuf::from(value_for(arg, iter.next())?)),
            "--delay-ms" => {
                let raw = value_for(arg, iter.next())?;
                options.delay_ms = Some(parse_delay_ms(raw, arg).map_err(|e| e.to_string())?);
            }
            "--only" => {
                let raw = value_for(arg, iter.next())?;
                options.only = raw.parse::<Selection>().map_err(|e| e.to_string())?;
            }
            "--skip-existing" => options.skip_existing = true,
            other => return Err(format!("Unknown argument: {other}")),
        }
    }
    Ok(Command::Run(options))
}

fn value_for<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str, String> {
    value
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn print_usage() {
    println!(
        r#"alfabeto-audio — letter and feedback clip generator

USAGE:
    alfabeto-audio [OPTIONS]

OPTIONS:
    --config <path>             YAML config file
    --out <dir>                 Output root (clips go to <dir>/audio/...)
    --delay-ms <n>              Pause after each request (default 500)
    --only <letters|sounds>     Generate a single group
    --skip-existing             Keep clips that are already on disk
    version                     Show version information
    help                        Show this help message

ENVIRONMENT:
    ALFABETO_TTS_BASE_URL       Speech service base URL
    ALFABETO_OUTPUT_DIR         Output root
    ALFABETO_DELAY_MS           Pause after each request
    RUST_LOG                    Log filter (default: warn)"#
    );
}
