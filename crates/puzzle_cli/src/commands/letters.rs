use std::io::Write;

use puzzle_core::{find_unused_letters, used_letters};
use tracing::info;

use crate::cli::LettersArgs;
use crate::error::Result;

pub fn describe_unused(unused: &str) -> String {
    if unused.is_empty() {
        "All letters are used (pangram)".to_string()
    } else {
        unused.to_string()
    }
}

pub fn run(args: &LettersArgs, out: &mut dyn Write) -> Result<()> {
    let unused = find_unused_letters(&args.text);
    info!(used = %used_letters(&args.text), unused = unused.len(), "checked text");
    writeln!(out, "{}", describe_unused(&unused))?;
    Ok(())
}
