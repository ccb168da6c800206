use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use a2s_tools::{query_info, resolve, InfoReport, InfoSummary, QueryConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::Pattern;
use tracing::{info, Level};
use wire::{ExtraDataFlags, ServerInfo};

#[derive(Parser)]
#[command(name = "a2s-tools", version, about = "A2S_INFO query and decoding tools")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query a server and print its info.
    Query {
        /// Server address, `host:port` or `host` (port 27015).
        addr: String,
        /// Receive timeout in milliseconds.
        #[arg(long, default_value_t = 3000)]
        timeout_ms: u64,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
        /// Save the raw response datagram to this path.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Decode captured response datagrams.
    Decode {
        /// Path to a response file or a directory of them.
        path: PathBuf,
        /// Optional glob filter when decoding a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print or save the raw request datagram.
    Request {
        /// Write the request bytes here instead of printing hex.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Query {
            addr,
            timeout_ms,
            format,
            save,
        } => {
            let target = resolve(&addr)?;
            let config = QueryConfig::default().with_timeout(Duration::from_millis(timeout_ms));
            let response =
                query_info(target, &config).with_context(|| format!("query {target}"))?;
            if let Some(path) = save {
                fs::write(&path, &response.raw)
                    .with_context(|| format!("write response {}", path.display()))?;
                info!(path = %path.display(), bytes = response.raw.len(), "saved response");
            }
            print_info(&response.info, response.flags, format)?;
        }
        Command::Decode { path, glob, format } => {
            if path.is_dir() {
                let entries = collect_response_files(&path, glob.as_deref())?;
                for entry in entries {
                    println!("== {} ==", entry.display());
                    decode_file(&entry, format)?;
                }
            } else {
                decode_file(&path, format)?;
            }
        }
        Command::Request { out } => {
            let request = wire::info_request();
            match out {
                Some(path) => fs::write(&path, request)
                    .with_context(|| format!("write request {}", path.display()))?,
                None => println!("{}", hex(request)),
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn decode_file(path: &Path, format: OutputFormat) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("read response {}", path.display()))?;
    let (info, flags) = wire::decode_info_with_flags(&bytes)
        .with_context(|| format!("decode response {}", path.display()))?;
    print_info(&info, flags, format)
}

fn print_info(info: &ServerInfo, flags: Option<ExtraDataFlags>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&InfoReport::new(info, flags))
                .context("serialize json")?;
            println!("{json}");
        }
        OutputFormat::Pretty => {
            print!("{}", InfoSummary::new(info, flags));
        }
    }
    Ok(())
}

fn collect_response_files(dir: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        entries.push(path);
    }
    entries.sort();
    Ok(entries)
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
