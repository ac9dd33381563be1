//! ORMBIND Command-Line Client
//!
//! Binds a JSON mapping source file and prints the resulting entity and
//! collection bindings.

mod formatter;
mod loader;
mod report;

use clap::Parser;
use formatter::OutputFormat;
use ormbind_core::MetadataBuilder;
use std::path::PathBuf;

/// ORMBIND Command-Line Client
#[derive(Parser, Debug)]
#[command(name = "ormbind")]
#[command(version, about = "Bind ORM mapping sources and inspect the result")]
pub struct Args {
    /// Mapping source file (JSON)
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Run the foreign-key naming pass
    #[arg(long)]
    pub name_foreign_keys: bool,

    /// Only report this entity
    #[arg(short = 'e', long)]
    pub entity: Option<String>,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ormbind=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", formatter::create_formatter(args.format).format_error(&e.to_string()));
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let mut source_file = loader::load(&args.file)?;
    if args.name_foreign_keys {
        source_file.config.name_foreign_keys = true;
    }

    let metadata = MetadataBuilder::new(source_file.sources)
        .with_config(source_file.config)
        .build()?;

    let entities = match &args.entity {
        Some(name) => vec![report::EntityReport::new(
            &metadata,
            metadata.get_entity_binding(name)?,
        )],
        None => report::build(&metadata),
    };

    Ok(formatter::create_formatter(args.format).format_report(&entities))
}
