//! # edi-cli
//!
//! CLI driver for the EDI specification-table to schema converter.
//!
//! Loads a CSV specification table, builds the run context from a YAML
//! file and/or flags, runs the conversion engine, and emits the ordered
//! schema list as JSON.

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};
use edi_adapter_csv::SpecTableReader;
use edi_asset::Namespace;
use edi_convert::ConversionContext;

#[derive(Parser)]
#[command(name = "edischema")]
#[command(about = "EDI specification-table to schema converter")]
#[command(version)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a specification table into an ordered schema list
    Convert {
        /// Input CSV specification table
        input: String,

        /// Run context YAML file (namespace, version, title)
        #[arg(short, long)]
        context: Option<String>,

        /// Namespace prefix (overrides the context file)
        #[arg(long)]
        prefix: Option<String>,

        /// Namespace URI (overrides the context file)
        #[arg(long)]
        uri: Option<String>,

        /// Version identifier (overrides the context file)
        #[arg(long)]
        version_id: Option<String>,

        /// Document title (overrides the context file)
        #[arg(long)]
        title: Option<String>,

        /// CSV field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the converted schema.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            context,
            prefix,
            uri,
            version_id,
            title,
            delimiter,
            output,
            pretty,
        } => {
            let ctx = build_context(context.as_deref(), prefix, uri, version_id, title)?;

            let rows = SpecTableReader::new()
                .with_delimiter(delimiter)
                .read_rows_from_path(&input)
                .with_context(|| format!("failed to read specification table {input}"))?;
            tracing::info!(rows = rows.len(), "loaded {}", input);

            let Some(mut result) = edi_convert::convert(&rows, &ctx) else {
                bail!("{input} has no data rows; nothing to convert");
            };
            result.generated_at = Some(chrono::Utc::now());
            tracing::info!(nodes = result.len(), "conversion finished");

            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            match output {
                Some(path) => std::fs::write(&path, json)
                    .with_context(|| format!("failed to write {path}"))?,
                None => println!("{json}"),
            }
            Ok(())
        }
    }
}

/// Build the run context from an optional YAML file plus flag overrides.
fn build_context(
    context_path: Option<&str>,
    prefix: Option<String>,
    uri: Option<String>,
    version_id: Option<String>,
    title: Option<String>,
) -> anyhow::Result<ConversionContext> {
    let mut ctx = match context_path {
        Some(path) => ConversionContext::from_yaml_file(path)
            .with_context(|| format!("failed to load context file {path}"))?,
        None => match (&prefix, &uri) {
            (Some(prefix), Some(uri)) => ConversionContext::new(
                Namespace::new(prefix.clone(), uri.clone()),
                String::new(),
                String::new(),
            ),
            _ => bail!("either --context or both --prefix and --uri are required"),
        },
    };

    if let Some(prefix) = prefix {
        ctx.namespace.prefix = prefix;
    }
    if let Some(uri) = uri {
        ctx.namespace.uri = uri;
    }
    if let Some(version_id) = version_id {
        ctx.version_id = version_id;
    }
    if let Some(title) = title {
        ctx.title = title;
    }

    Ok(ctx)
}
