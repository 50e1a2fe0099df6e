use std::io::Write;

use puzzle_core::presets::{CHAMBER_EXAMPLES, LETTER_EXAMPLES};
use puzzle_core::{animate, find_unused_letters};
use tracing::warn;

use crate::commands::animate::write_trace;
use crate::commands::letters::describe_unused;
use crate::error::Result;

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Unused letters")?;
    for example in LETTER_EXAMPLES {
        let unused = find_unused_letters(example.text);
        if unused != example.expected {
            warn!(text = example.text, expected = example.expected, actual = %unused, "example mismatch");
        }
        writeln!(out, "  {:?} -> {}", example.text, describe_unused(&unused))?;
    }

    writeln!(out)?;
    writeln!(out, "Particle chamber")?;
    for example in CHAMBER_EXAMPLES {
        writeln!(
            out,
            "  {} ({:?}, speed {})",
            example.description, example.position, example.speed
        )?;
        let trace = animate(example.position, example.speed)?;
        write_trace(&trace, out)?;
    }
    Ok(())
}
