use clap::Args;
use eisenhower_core::{classify, priority, Config, Score};
use serde::Serialize;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Urgency (1-10)
    urgency: String,
    /// Importance (1-10)
    importance: String,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Classification {
    quadrant: u8,
    label: &'static str,
    priority: f64,
}

pub fn run(args: ClassifyArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let urgency: Score = args.urgency.parse()?;
    let importance: Score = args.importance.parse()?;
    let quadrant = classify(urgency, importance);
    let score = priority(urgency, importance);

    if args.json {
        let out = Classification {
            quadrant: quadrant.number(),
            label: quadrant.label(),
            priority: score,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{quadrant} ({})  P: {:.*}",
            quadrant.hint(),
            config.display.priority_precision,
            score
        );
    }
    Ok(())
}
