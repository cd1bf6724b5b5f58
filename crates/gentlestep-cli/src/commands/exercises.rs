use clap::Subcommand;
use gentlestep_core::catalog;

use crate::render;

#[derive(Subcommand)]
pub enum ExercisesAction {
    /// List every exercise
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one exercise with its steps
    Show {
        /// Exercise slug or name (e.g. "heel-raises")
        name: String,
    },
}

pub fn run(action: ExercisesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ExercisesAction::List { json: true } => {
            println!("{}", serde_json::to_string_pretty(catalog::all())?);
        }
        ExercisesAction::List { json: false } => {
            print!("{}", render::selection_screen(catalog::all()));
        }
        ExercisesAction::Show { name } => {
            let exercise = catalog::lookup(&name)?;
            print!("{}", render::exercise_detail(exercise, true));
        }
    }
    Ok(())
}
