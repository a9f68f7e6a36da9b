use crate::error::AppError;
use crate::rules::{self, CyclePhase, Difficulty, TrainingAdjustmentRequest};
use crate::server;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "CycleStrong Adjustment Service",
    about = "Serve or evaluate deterministic training adjustments from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a single adjustment request and print the recommendation
    Adjust(AdjustArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
struct AdjustArgs {
    /// Training-cycle phase (follicular, ovulatory, luteal, menstrual)
    #[arg(long, value_parser = parse_phase)]
    cycle_phase: CyclePhase,
    /// Self-reported energy, 1-5
    #[arg(long)]
    energy_level: i32,
    /// Prior workout success ratio, 0.0-1.0
    #[arg(long)]
    last_workout_success: f64,
    /// Perceived difficulty (too_easy, just_right, too_hard)
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Difficulty,
}

pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Adjust(args) => run_adjust(args),
    }
}

fn parse_phase(raw: &str) -> Result<CyclePhase, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "follicular" => Ok(CyclePhase::Follicular),
        "ovulatory" => Ok(CyclePhase::Ovulatory),
        "luteal" => Ok(CyclePhase::Luteal),
        "menstrual" => Ok(CyclePhase::Menstrual),
        other => Err(format!(
            "unknown phase '{other}' (expected follicular, ovulatory, luteal, or menstrual)"
        )),
    }
}

fn parse_difficulty(raw: &str) -> Result<Difficulty, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "too_easy" => Ok(Difficulty::TooEasy),
        "just_right" => Ok(Difficulty::JustRight),
        "too_hard" => Ok(Difficulty::TooHard),
        other => Err(format!(
            "unknown difficulty '{other}' (expected too_easy, just_right, or too_hard)"
        )),
    }
}

fn run_adjust(args: AdjustArgs) -> Result<(), AppError> {
    let request = TrainingAdjustmentRequest {
        cycle_phase: args.cycle_phase,
        energy_level: args.energy_level,
        last_workout_success: args.last_workout_success,
        in_workout_difficulty: args.difficulty,
    };
    request.validate()?;

    let response = rules::adjust(&request);

    println!("Training adjustment");
    println!("Load delta: {:+.2}%", response.load_delta_pct);
    println!("Set delta: {:+}", response.set_delta);
    println!("Rep target: {}", response.rep_target);
    println!("Rest: {}s", response.rest_seconds);
    println!("Deload: {}", if response.deload { "yes" } else { "no" });
    println!("Why: {}", response.explanation);

    Ok(())
}
