//! Command-line front end for the UBX-CFG command compiler.
//!
//! Compiles textual configuration commands to hex for inspection or for
//! piping into a serial transmit tool, and exposes the schema and
//! configuration item tables for lookup.

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ubxcfg_protocol::{compile, items, CONFIG_ITEMS, SCHEMAS};

/// ubxcfg -- compile u-blox CFG commands into binary frames.
#[derive(Parser, Debug)]
#[command(name = "ubxcfg", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a command and print the frame as hex
    Encode {
        /// Command text, e.g. CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 1
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Show a configuration item from the VALSET database
    Item {
        /// Item name, with or without the CFG- prefix
        name: String,
    },

    /// List supported command schemas
    Schemas,

    /// List all configuration item names
    Items,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { command } => {
            let text = command.join(" ");
            let frame = compile(&text)?;
            tracing::debug!("frame is {} bytes", frame.len());
            println!("{}", hex::encode_upper(&frame));
        }

        Commands::Item { name } => {
            let name = name.strip_prefix("CFG-").unwrap_or(&name);
            let Some(item) = items::lookup(name) else {
                bail!("unknown configuration item: {name}");
            };
            println!(
                "CFG-{}  key=0x{:08X}  type={:?}",
                item.name, item.key, item.value_type
            );
        }

        Commands::Schemas => {
            for schema in SCHEMAS {
                let fields: Vec<String> =
                    schema.fields.iter().map(|f| format!("{f:?}")).collect();
                println!(
                    "CFG-{:<10} id=0x{:02X}  [{}]",
                    schema.name,
                    schema.message_id,
                    fields.join(", ")
                );
            }
        }

        Commands::Items => {
            for item in CONFIG_ITEMS {
                println!("CFG-{}", item.name);
            }
        }
    }

    Ok(())
}
