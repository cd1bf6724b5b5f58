use clap::Args;

use super::open_router;

#[derive(Args)]
pub struct StatsArgs {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let completed = open_router()?.completions()?;
    if args.json {
        println!("{}", serde_json::json!({ "completed_today": completed }));
    } else {
        println!("Exercises completed today: {completed}");
    }
    Ok(())
}
