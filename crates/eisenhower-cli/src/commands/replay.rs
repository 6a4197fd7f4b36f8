//! Apply a file of JSON-line intents to a fresh store and print the result.

use clap::Args;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use eisenhower_core::{replay, Config, TaskStore};

use crate::render;

#[derive(Args)]
pub struct RunArgs {
    /// Intent file (JSON lines); reads stdin when omitted
    file: Option<PathBuf>,
    /// Print the final view as JSON
    #[arg(long)]
    json: bool,
    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    strict: bool,
}

pub fn run(args: RunArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TaskStore::new();
    let report = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("cannot open {}: {e}", path.display()))?;
            replay(&mut store, BufReader::new(file), args.strict)?
        }
        None => replay(&mut store, io::stdin().lock(), args.strict)?,
    };

    eprintln!(
        "applied {}, ignored {}, skipped {}",
        report.applied, report.ignored, report.skipped
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(store.view())?);
    } else {
        print!("{}", render::full(store.view(), config));
    }
    Ok(())
}
