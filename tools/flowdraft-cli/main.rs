use clap::{Parser, Subcommand};
use flowdraft::codec::export_file_name;
use flowdraft::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

/// Validate, organize and normalize flow documents from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional path to an editor config JSON file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a flow and report its diagnostics
    Check {
        /// Path to the flow JSON file
        flow_path: String,
    },
    /// Lay out a flow and print (or write) the computed step positions
    Organize {
        flow_path: String,
        /// Write the positions as JSON instead of printing a table
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Re-export a flow in canonical form with fresh metadata
    Export {
        flow_path: String,
        /// Output path; defaults to a timestamped `flow-<ms>.json`
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    };

    match cli.command {
        Command::Check { flow_path } => run_check(&flow_path, config),
        Command::Organize { flow_path, output } => run_organize(&flow_path, config, output),
        Command::Export { flow_path, output } => run_export(&flow_path, config, output),
    }
}

/// Reads and imports a flow file into a fresh, unseeded document.
fn load_document(flow_path: &str, config: EditorConfig) -> FlowDocument {
    let text = fs::read_to_string(flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read flow file '{}': {}", flow_path, e))
    });

    let mut doc = FlowDocument::builder()
        .with_config(config)
        .seeded(false)
        .build();
    doc.load_json(&text)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to import '{}': {}", flow_path, e)));
    doc
}

fn run_check(flow_path: &str, config: EditorConfig) {
    let start = Instant::now();
    let doc = load_document(flow_path, config);

    println!(
        "{} steps, {} transitions (start: {})",
        doc.steps().len(),
        doc.transitions().len(),
        doc.start_step().map_or("none", |s| s.id.as_str())
    );
    println!("{}", doc.diagnostics());
    println!("Checked in {:?}", start.elapsed());

    if !doc.is_valid() {
        std::process::exit(2);
    }
}

fn run_organize(flow_path: &str, config: EditorConfig, output: Option<String>) {
    let doc = load_document(flow_path, config);

    match output {
        Some(path) => {
            let positions: BTreeMap<&str, Position> = doc
                .steps()
                .iter()
                .map(|s| (s.id.as_str(), s.position))
                .collect();
            let json = serde_json::to_string_pretty(&positions)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode positions: {}", e)));
            write_or_exit(&path, &json);
            println!("Wrote {} positions to '{}'", positions.len(), path);
        }
        None => {
            println!("{:<24} {:>10} {:>10}", "STEP", "X", "Y");
            for step in doc.steps() {
                println!(
                    "{:<24} {:>10.1} {:>10.1}",
                    step.id, step.position.x, step.position.y
                );
            }
        }
    }
}

fn run_export(flow_path: &str, config: EditorConfig, output: Option<String>) {
    let doc = load_document(flow_path, config);
    let json = doc
        .export()
        .to_json_pretty()
        .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));

    let path = output.unwrap_or_else(|| {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis());
        export_file_name(millis)
    });
    write_or_exit(&path, &json);

    println!("Exported '{}' to '{}'", flow_path, path);
    if !doc.is_valid() {
        println!("Warning: exported flow is not valid\n{}", doc.diagnostics());
    }
}

fn write_or_exit(path: &str, content: &str) {
    fs::write(path, content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to write '{}': {}", path, e)));
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
