use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pdus::standard_registry;
use tools::{dump_json, dump_text, scan_stream};
use wire::{DecodeError, PduStream};

#[derive(Parser)]
#[command(
    name = "dispdu-tools",
    version,
    about = "dispdu capture inspection and decoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode every PDU in a capture and print it.
    Dump {
        /// Path to the capture bytes (concatenated PDUs).
        capture: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
        format: DumpFormat,
    },
    /// Summarize the PDUs in a capture without printing field contents.
    Scan {
        /// Path to the capture bytes (concatenated PDUs).
        capture: PathBuf,
        /// Emit the report as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DumpFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Dump { capture, format } => dump(&capture, format),
        Command::Scan { capture, json } => scan(&capture, json),
    }
}

fn dump(capture: &Path, format: DumpFormat) -> Result<()> {
    let buf = fs::read(capture)
        .with_context(|| format!("read capture {}", capture.display()))?;
    let registry = standard_registry();
    let mut stream = PduStream::new(&buf, &registry);

    while let Some(result) = stream.next_pdu() {
        match result {
            Ok(decoded) => match format {
                DumpFormat::Text => print!("{}", dump_text(&decoded)),
                DumpFormat::Json => println!("{}", serde_json::to_string(&dump_json(&decoded))?),
            },
            Err(DecodeError::UnknownPduKind { header }) => {
                eprintln!(
                    "skipping unknown kind {} ({} bytes) at offset {}",
                    header.kind.to_int(),
                    header.length,
                    stream.position(),
                );
                if stream.skip_declared(&header).is_err() {
                    bail!(
                        "cannot skip unknown kind {}: stated length {} is unusable",
                        header.kind.to_int(),
                        header.length
                    );
                }
            }
            Err(err) => {
                bail!("decode failed at offset {}: {err}", stream.position());
            }
        }
    }
    Ok(())
}

fn scan(capture: &Path, json: bool) -> Result<()> {
    let buf = fs::read(capture)
        .with_context(|| format!("read capture {}", capture.display()))?;
    let registry = standard_registry();
    let report = scan_stream(&buf, &registry);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for pdu in &report.pdus {
        println!(
            "{:>8}  kind {:>3} {:<26} stated {:>5}  consumed {:>5}  {}",
            pdu.offset,
            pdu.kind,
            pdu.kind_label.unwrap_or("?"),
            pdu.stated_length,
            pdu.consumed,
            if pdu.length_agrees { "ok" } else { "LENGTH MISMATCH" },
        );
    }
    println!(
        "{} pdus, {} unknown skipped, {} trailing bytes",
        report.pdus.len(),
        report.unknown_skipped,
        report.trailing_bytes
    );
    if let Some(error) = &report.error {
        bail!("scan stopped: {error}");
    }
    Ok(())
}
