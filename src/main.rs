use clap::Parser;
use htmlpress::config::Config;
use htmlpress::Compressor;
use std::io::{Read, Write};
use std::path::PathBuf;

/// htmlpress - strip comments and redundant whitespace from HTML
#[derive(Parser, Debug)]
#[command(name = "htmlpress")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Output file; writes stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log a compression summary
    #[arg(long)]
    stats: bool,
}

fn load_config(path: Option<&PathBuf>) -> htmlpress::Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

fn read_input(input: Option<&PathBuf>) -> htmlpress::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(output: Option<&PathBuf>, html: &str) -> htmlpress::Result<()> {
    match output {
        Some(path) => std::fs::write(path, html)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn run(args: Args) -> htmlpress::Result<()> {
    let config = load_config(args.config.as_ref())?;
    htmlpress::logging::init_subscriber(&config.logging)?;

    tracing::debug!(
        config_file = ?args.config,
        protected_tags = ?config.compressor.protected_tags,
        "Configuration loaded successfully"
    );

    let compressor = Compressor::new(config.compressor)?;
    let html = read_input(args.input.as_ref())?;
    let (compressed, stats) = compressor.compress_with_stats(&html);
    write_output(args.output.as_ref(), &compressed)?;

    if args.stats {
        tracing::info!(
            original_size = stats.original_size,
            compressed_size = stats.compressed_size,
            bytes_saved = stats.bytes_saved(),
            percentage_saved = stats.percentage_saved(),
            comments_removed = stats.comments_removed,
            regions_protected = stats.regions_protected,
            elapsed_us = stats.elapsed.as_micros() as u64,
            "Compression summary"
        );
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("htmlpress: {}", e);
        std::process::exit(1);
    }
}
