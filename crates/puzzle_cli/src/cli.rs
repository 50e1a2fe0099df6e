use clap::{Args, Parser, Subcommand};
use puzzle_core::DEFAULT_FRAME_INTERVAL_MS;

#[derive(Parser, Debug)]
#[command(
    name = "puzzles",
    version,
    about = "Unused letters and particle chamber puzzles in the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the alphabet letters that never appear in TEXT
    Letters(LettersArgs),
    /// Simulate particles leaving a 1-D chamber
    Animate(AnimateArgs),
    /// Run the bundled example inputs for both puzzles
    Examples,
}

#[derive(Args, Debug)]
pub struct LettersArgs {
    /// Text to inspect; case and non-letters are ignored
    pub text: String,
}

#[derive(Args, Debug)]
pub struct AnimateArgs {
    /// Initial chamber, e.g. "..R..LL." (R=right, L=left, .=empty)
    pub positions: String,

    /// Cells each particle moves per step
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub speed: i64,

    /// Print the trace as a JSON array
    #[arg(long, conflicts_with = "play")]
    pub json: bool,

    /// Play the trace frame by frame instead of printing it at once
    #[arg(long)]
    pub play: bool,

    /// Delay between frames during playback
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_FRAME_INTERVAL_MS)]
    pub interval_ms: u64,
}
