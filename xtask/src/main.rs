use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the interview puzzles workspace",
    long_about = "A unified CLI for running the puzzle demos, benchmarks,\n\
                  CI checks, and the static site deploy."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every bundled puzzle example
    Demo,
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Publish the built web app to its S3 bucket
    Deploy {
        /// Bucket to publish to
        #[arg(long, env = "BUCKET_NAME")]
        bucket: String,
        /// Only print the deploy plan
        #[arg(long)]
        dry_run: bool,
        /// Extra arguments passed to deploy_web
        #[arg(last = true)]
        extra: Vec<String>,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run the demo
    Demo,
    /// Run benchmarks
    Bench,
    /// Run check + demo + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    match Command::new("cargo").args(args).status() {
        Ok(status) => status,
        Err(error) => {
            eprintln!("failed to execute cargo: {error}");
            exit(1);
        }
    }
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn deploy_args<'a>(bucket: &'a str, dry_run: bool, extra: &'a [String]) -> Vec<&'a str> {
    let mut args = vec![
        "run",
        "-p",
        "site_deploy_s3",
        "--bin",
        "deploy_web",
        "--release",
        "--",
        "--bucket",
        bucket,
    ];
    if dry_run {
        args.push("--dry-run");
    }
    args.extend(extra.iter().map(String::as_str));
    args
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test workspace");
    run_cargo(&["test", "--workspace"]);
}

fn ci_demo() {
    step("Run puzzle examples");
    run_cargo(&["run", "-p", "puzzle_cli", "--bin", "puzzles", "--", "examples"]);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&["bench", "--package", "puzzle_core", "--bench", "performance"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => ci_demo(),
        Commands::Bench => ci_bench(),
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Demo => ci_demo(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_demo();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
        Commands::Deploy {
            bucket,
            dry_run,
            extra,
        } => {
            step("Deploy web app");
            run_cargo(&deploy_args(&bucket, dry_run, &extra));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deploy_args_forward_bucket_and_extras() {
        let extra = vec!["--strategy".to_string(), "clear-then-upload".to_string()];
        let args = deploy_args("site", true, &extra);
        assert_eq!(
            &args[args.len() - 4..],
            ["site", "--dry-run", "--strategy", "clear-then-upload"].as_slice()
        );
    }

    #[test]
    fn deploy_args_without_dry_run_end_with_bucket() {
        let args = deploy_args("site", false, &[]);
        assert_eq!(args.last(), Some(&"site"));
    }
}
