use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use varlen::config::{OutputFormat, ToolConfig, Width, DEFAULT_CONFIG_FILE};
use varlen::protocol::{encode_var_int, encode_var_long, VarKind, CONTINUE_BIT, SEGMENT_BITS};
use varlen::utils::binary::{format_binary, format_binary_slice};
use varlen::utils::io::{read_var_int_async, read_var_long_async};
use varlen::utils::sequence::{decode_hex, DecodedSequence};

#[derive(Parser)]
#[command(name = "varlen")]
#[command(about = "Encode and decode VarInt / VarLong values")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, help = "Config file path")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, help = "Integer width (overrides config)")]
    width: Option<Width>,

    #[arg(long, value_enum, help = "Output format (overrides config)")]
    output: Option<OutputFormat>,

    #[arg(long, help = "Output as JSON")]
    json: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Encode one or more integers
    Encode {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Decode every value in a hex string, or raw bytes from stdin
    Decode {
        hex: Option<String>,
        #[arg(long, conflicts_with = "hex", help = "Read raw bytes from stdin")]
        stdin: bool,
    },
    /// Show each byte of an encoding
    Inspect {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    GenerateConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
        path: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct Encoded {
    value: i64,
    width: Width,
    bytes: String,
    len: usize,
}

#[derive(Debug, Serialize)]
struct ByteReport {
    index: usize,
    byte: u8,
    binary: String,
    segment: u8,
    continues: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ToolConfig::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Override config with CLI args if provided
    if let Some(width) = cli.width {
        config.default_width = width;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }
    debug!("Effective config: {:?}", config);

    match cli.command {
        Commands::Encode { values } => {
            for value in values {
                let bytes = encode(config.default_width, value)?;
                print_encoded(&config, value, &bytes)?;
            }
        }
        Commands::Decode { hex, stdin } => {
            let decoded = if stdin {
                decode_stdin(config.default_width.into()).await?
            } else {
                let hex = hex.ok_or_else(|| anyhow!("either HEX or --stdin is required"))?;
                decode_hex(config.default_width.into(), &hex)?
            };
            print_decoded(&config, &decoded)?;
        }
        Commands::Inspect { value } => {
            let bytes = encode(config.default_width, value)?;
            inspect(&config, &bytes)?;
        }
        Commands::GenerateConfig { path } => {
            ToolConfig::default().save(&path)?;
            if config.output == OutputFormat::Json {
                println!("{}", serde_json::json!({"config": path}));
            } else {
                println!("Wrote default config to {}", path.display());
            }
        }
    }

    Ok(())
}

fn encode(width: Width, value: i64) -> Result<Vec<u8>> {
    match width {
        Width::Int => {
            let value = i32::try_from(value)
                .map_err(|_| anyhow!("{} does not fit in a VarInt (use --width long)", value))?;
            Ok(encode_var_int(value))
        }
        Width::Long => Ok(encode_var_long(value)),
    }
}

async fn decode_stdin(kind: VarKind) -> Result<DecodedSequence> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut values = Vec::new();

    while !reader.fill_buf().await?.is_empty() {
        let value = match kind {
            VarKind::Int => read_var_int_async(&mut reader).await.map(i64::from),
            VarKind::Long => read_var_long_async(&mut reader).await,
        }
        .with_context(|| format!("failed to decode {} #{}", kind, values.len() + 1))?;
        values.push(value);
    }
    info!("Decoded {} values from stdin", values.len());
    Ok(DecodedSequence { values, leftover: 0, leftover_offset: 0 })
}

fn print_encoded(config: &ToolConfig, value: i64, bytes: &[u8]) -> Result<()> {
    match config.output {
        OutputFormat::Hex => println!("{} -> {} ({} bytes)", value, hex::encode(bytes), bytes.len()),
        OutputFormat::Binary => println!("{} -> {}", value, format_binary_slice(bytes)),
        OutputFormat::Json => {
            let record = Encoded {
                value,
                width: config.default_width,
                bytes: hex::encode(bytes),
                len: bytes.len(),
            };
            println!("{}", serde_json::to_string(&record)?);
        }
    }
    Ok(())
}

fn print_decoded(config: &ToolConfig, decoded: &DecodedSequence) -> Result<()> {
    if config.output == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({
                "width": config.default_width,
                "values": decoded.values,
                "leftover": decoded.leftover,
                "leftover_offset": decoded.leftover_offset,
            })
        );
        return Ok(());
    }

    for value in &decoded.values {
        println!("{}", value);
    }
    if decoded.leftover > 0 {
        println!("{} leftover bytes at offset {}", decoded.leftover, decoded.leftover_offset);
    }
    Ok(())
}

fn inspect(config: &ToolConfig, bytes: &[u8]) -> Result<()> {
    let reports: Vec<ByteReport> = bytes
        .iter()
        .enumerate()
        .map(|(index, &byte)| ByteReport {
            index,
            byte,
            binary: format_binary(byte),
            segment: byte & SEGMENT_BITS,
            continues: byte & CONTINUE_BIT != 0,
        })
        .collect();

    if config.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!(
            "byte {}: {}  segment={:#04x} {}",
            report.index,
            report.binary,
            report.segment,
            if report.continues { "more" } else { "last" }
        );
    }
    Ok(())
}
