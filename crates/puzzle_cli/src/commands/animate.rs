use std::io::Write;
use std::time::Duration;

use puzzle_core::{animate, AnimationTrace, Playback};
use tracing::{debug, warn};

use crate::cli::AnimateArgs;
use crate::error::Result;

pub fn format_frame(step: usize, total: usize, frame: &str) -> String {
    format!("Step {}/{total}  {frame}", step + 1)
}

pub fn write_trace(trace: &AnimationTrace, out: &mut dyn Write) -> Result<()> {
    for (step, frame) in trace.iter().enumerate() {
        writeln!(out, "{}", format_frame(step, trace.len(), frame))?;
    }
    Ok(())
}

pub async fn run(args: &AnimateArgs, out: &mut dyn Write) -> Result<()> {
    let trace = animate(&args.positions, args.speed)?;
    debug!(
        width = trace.width(),
        frames = trace.len(),
        speed = args.speed,
        "trace generated"
    );

    if args.json {
        writeln!(out, "{}", serde_json::to_string(&trace)?)?;
    } else if args.play {
        play(&trace, Duration::from_millis(args.interval_ms.max(1)), out).await?;
    } else {
        write_trace(&trace, out)?;
    }
    Ok(())
}

fn redraw(trace: &AnimationTrace, playback: &Playback, out: &mut dyn Write) -> Result<()> {
    let frame = trace.get(playback.current()).unwrap_or_default();
    write!(out, "\r{}", format_frame(playback.current(), trace.len(), frame))?;
    out.flush()?;
    Ok(())
}

/// Redraws the current frame in place on every interval until the last frame
/// is shown or Ctrl-C is pressed.
async fn play(trace: &AnimationTrace, interval: Duration, out: &mut dyn Write) -> Result<()> {
    let mut playback = Playback::new(trace.len());
    redraw(trace, &playback, out)?;
    playback.play();

    let mut ticker = tokio::time::interval(interval);
    ticker.tick().await;
    let cancel = tokio::signal::ctrl_c();
    tokio::pin!(cancel);

    while playback.is_playing() {
        tokio::select! {
            _ = ticker.tick() => {
                if playback.tick() {
                    redraw(trace, &playback, out)?;
                }
            }
            _ = &mut cancel => {
                playback.pause();
                warn!(step = playback.current() + 1, "playback cancelled");
            }
        }
    }

    writeln!(out)?;
    Ok(())
}
