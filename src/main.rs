//! contentrefs - list the image files referenced by lesson content

use std::collections::BTreeMap;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use contentrefs::{Document, DocumentKind, Extractor, ExtractorConfig, ImageFilenames};

#[derive(Parser)]
#[command(name = "contentrefs")]
#[command(version, about = "List image files referenced by lesson content", long_about = None)]
#[command(after_help = "EXAMPLES:
    contentrefs exploration.json              One filename per line
    contentrefs --by-state exploration.json   Group filenames by state
    contentrefs --json --language hi skill.json")]
struct Cli {
    /// Exploration, state or skill JSON file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Document kind (exploration, state, skill); detected when omitted
    #[arg(short, long)]
    kind: Option<DocumentKind>,

    /// Prefer html translations in this language
    #[arg(short, long, value_name = "CODE")]
    language: Option<String>,

    /// Maximum nesting depth for collapsible and tab content
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Group exploration filenames by state
    #[arg(long)]
    by_state: bool,

    /// Print JSON instead of one filename per line
    #[arg(long)]
    json: bool,

    /// Log skipped fragments
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "contentrefs=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let document = Document::open(&cli.input, cli.kind).map_err(|e| e.to_string())?;

    let mut config = ExtractorConfig::new();
    if let Some(ref language) = cli.language {
        config = config.with_language(language.as_str());
    }
    if let Some(depth) = cli.max_depth {
        config = config.with_max_depth(depth);
    }
    let extractor = Extractor::new(config);

    if cli.by_state {
        let Document::Exploration(ref exploration) = document else {
            return Err("--by-state requires an exploration".to_string());
        };
        print_by_state(&extractor.image_filenames_by_state(exploration), cli.json)
    } else {
        let names = match &document {
            Document::Exploration(exploration) => {
                extractor.image_filenames_in_exploration(exploration)
            }
            Document::State(state) => extractor.image_filenames_in_state(state),
            Document::Skill(skill) => extractor.image_filenames_in_skill(skill),
        };
        print_names(&names, cli.json)
    }
}

fn print_names(names: &ImageFilenames, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(names).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

fn print_by_state(by_state: &BTreeMap<String, ImageFilenames>, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(by_state).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        for (state, names) in by_state {
            println!("{state}:");
            for name in names {
                println!("  {name}");
            }
        }
    }
    Ok(())
}
