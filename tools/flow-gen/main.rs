use clap::Parser;
use flowdraft::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A CLI tool to generate random flow documents for the flowdraft editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of steps to generate
    #[arg(long, default_value_t = 12)]
    steps: usize,

    /// Extra transitions added on top of the spanning tree
    #[arg(long, default_value_t = 4)]
    extra: usize,

    /// Chance (0.0 to 1.0) that a step is left without a description
    #[arg(long, default_value_t = 0.0)]
    blank_ratio: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if !(0.0..=1.0).contains(&cli.blank_ratio) {
        eprintln!(
            "Error: --blank-ratio ({}) must be between 0.0 and 1.0",
            cli.blank_ratio
        );
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating a flow with {} steps and {} extra transitions...",
        cli.steps, cli.extra
    );
    let doc = generate_flow(&mut rng, &cli);
    info!(
        steps = doc.steps().len(),
        transitions = doc.transitions().len(),
        valid = doc.is_valid(),
        "generated flow"
    );

    let json = doc.export().to_json_pretty()?;
    fs::write(&cli.output, json)?;

    println!("Successfully generated and saved flow to '{}'", cli.output);
    if !doc.is_valid() {
        println!("{}", doc.diagnostics());
    }
    Ok(())
}

/// Builds a connected flow: every step after the first hangs off an earlier
/// one, then a few extra transitions are sprinkled in.
fn generate_flow(rng: &mut StdRng, cli: &Cli) -> FlowDocument {
    let mut doc = FlowDocument::builder()
        .with_id_generator(Box::new(SequentialIds::default()))
        .seeded(false)
        .build();

    let ids: Vec<String> = (0..cli.steps)
        .map(|_| {
            let step_type = StepType::ALL[rng.random_range(0..StepType::ALL.len())];
            doc.add_step(Position::default(), step_type)
        })
        .collect();

    for (i, id) in ids.iter().enumerate().skip(1) {
        let parent = &ids[rng.random_range(0..i)];
        let t = doc.add_transition(parent, id);
        doc.update_transition_label(&t, format!("to {}", id));
    }

    if ids.len() > 1 {
        for _ in 0..cli.extra {
            let source = &ids[rng.random_range(1..ids.len())];
            let target = &ids[rng.random_range(1..ids.len())];
            doc.add_transition(source, target);
        }
    }

    for id in &ids {
        if rng.random_bool(cli.blank_ratio) {
            doc.update_step(id, StepPatch::default().description(""));
        } else {
            doc.update_step(id, StepPatch::default().prompt(sample_prompt(rng)));
        }
    }

    if let Some(first) = ids.first() {
        doc.set_start_step(first);
    }
    doc
}

fn sample_prompt(rng: &mut StdRng) -> &'static str {
    const PROMPTS: [&str; 5] = [
        "Summarize the previous answer.",
        "Ask the user for more detail.",
        "Look up the relevant document.",
        "Decide which branch applies.",
        "",
    ];
    PROMPTS[rng.random_range(0..PROMPTS.len())]
}
