//! The exercise screen: a live, pausable session in the terminal.

use std::io::Write;
use std::time::Duration;

use clap::Args;
use gentlestep_core::catalog;
use gentlestep_core::{
    ActiveSession, Config, Event, Exercise, ExerciseVisit, RhythmPattern, Route, Router, SessionState,
};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::open_router;
use crate::render;

#[derive(Args)]
pub struct RunArgs {
    /// Exercise slug or name (ankle-circles, heel-raises, toe-flex, seated-stretch)
    exercise: String,
    /// Override the session length, in seconds
    #[arg(long)]
    duration: Option<f64>,
    /// Ignore stdin; the session runs to completion untouched
    #[arg(long)]
    no_input: bool,
    /// Print events as JSON lines instead of drawing the screen
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputCommand {
    Toggle,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Outcome {
    Finished,
    Left,
}

#[derive(Serialize)]
struct Summary<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    exercise: &'a str,
    outcome: Outcome,
    progress: f64,
    completed_today: u64,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let exercise = catalog::lookup(&args.exercise)?;
    let exercise = match args.duration {
        Some(secs) => {
            let duration = Duration::try_from_secs_f64(secs)
                .map_err(|_| format!("invalid duration '{secs}': expected a non-negative number of seconds"))?;
            exercise.with_duration(duration)
        }
        None => exercise.clone(),
    };
    let mut router = open_router()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(drive(exercise, &config, &mut router, &args));
    // A pending stdin read cannot be cancelled; don't wait on it.
    runtime.shutdown_background();
    result
}

async fn drive(
    exercise: Exercise,
    config: &Config,
    router: &mut Router,
    args: &RunArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut screen = Screen { json: args.json, config };

    screen.event(&router.push(Route::Selection))?;
    screen.event(&router.push(Route::Exercise(exercise.clone())))?;
    screen.text(&render::exercise_detail(&exercise, config.ui.show_steps));

    let mut visit = ExerciseVisit::new(exercise.clone());
    let rhythm = RhythmPattern::for_type(exercise.exercise_type);
    let mut session = ActiveSession::new(exercise.duration, config.tick_interval());
    let mut updates = session.subscribe();
    let mut input = (!args.no_input).then(spawn_input);

    let mut running_since = Instant::now();
    if let Some(event) = session.start() {
        screen.event(&event)?;
    }

    let outcome = loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break Outcome::Left;
                }
                let state = *updates.borrow_and_update();
                let frame = rhythm.frame(running_since.elapsed(), state.is_running);
                screen.progress(&visit, &state, config.ui.show_rhythm.then_some(&frame));
                for event in visit.observe(&state, router)? {
                    screen.event(&event)?;
                }
                if visit.is_complete() {
                    break Outcome::Finished;
                }
            }
            command = next_command(&mut input) => match command {
                InputCommand::Toggle => {
                    if let Some(event) = session.toggle() {
                        if matches!(event, Event::SessionStarted { .. }) {
                            running_since = Instant::now();
                        }
                        screen.event(&event)?;
                    }
                }
                InputCommand::Leave => break Outcome::Left,
            },
        }
    };

    let last = session.dispose();
    screen.end_progress();

    let completed = router.completions()?;
    match outcome {
        Outcome::Finished => {
            screen.text(&render::completion_screen(completed));
            screen.event(&router.pop_to_root())?;
        }
        Outcome::Left => {
            screen.text(&format!(
                "Left {} at {}%; this session was not counted.\n",
                exercise.name(),
                (last.progress * 100.0) as u8
            ));
        }
    }

    if args.json {
        let summary = Summary {
            kind: "summary",
            exercise: exercise.exercise_type.slug(),
            outcome,
            progress: last.progress,
            completed_today: completed,
        };
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}

/// Human output on a TTY-style status line, or JSON lines of events.
struct Screen<'a> {
    json: bool,
    config: &'a Config,
}

impl Screen<'_> {
    fn event(&mut self, event: &Event) -> Result<(), serde_json::Error> {
        if self.json {
            println!("{}", serde_json::to_string(event)?);
        } else {
            tracing::debug!(?event, "event");
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if !self.json {
            println!("{text}");
        }
    }

    fn progress(&mut self, visit: &ExerciseVisit, state: &SessionState, rhythm: Option<&gentlestep_core::RhythmFrame>) {
        if self.json {
            return;
        }
        let line = render::session_line(visit, state, self.config.ui.ring_width as usize, rhythm);
        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "\r{line}\x1b[K");
        let _ = stdout.flush();
    }

    fn end_progress(&mut self) {
        if !self.json {
            println!();
        }
    }
}

fn spawn_input() -> mpsc::Receiver<InputCommand> {
    let (tx, rx) = mpsc::channel(8);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let command = match line.trim() {
                "q" | "quit" => InputCommand::Leave,
                _ => InputCommand::Toggle,
            };
            if tx.send(command).await.is_err() {
                break;
            }
        }
    });
    rx
}

/// Next command from stdin; never resolves once input is off or closed.
async fn next_command(input: &mut Option<mpsc::Receiver<InputCommand>>) -> InputCommand {
    let Some(rx) = input.as_mut() else {
        return std::future::pending().await;
    };
    if let Some(command) = rx.recv().await {
        return command;
    }
    *input = None;
    std::future::pending().await
}
