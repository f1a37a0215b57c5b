
use rpncalc::{Error, Evaluator, Integer};

use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Convert infix integer expressions to postfix and evaluate them
#[derive(Parser, Debug)]
#[command(name = "rpncalc")]
#[command(about = "Evaluate infix integer expressions via postfix", long_about = None)]
struct Args {
  /// Print the postfix form before the value
  #[arg(long)]
  postfix: bool,

  /// Output format
  #[arg(long, value_enum, default_value_t = Format::Text)]
  format: Format,

  /// Log more (-v for debug, -vv for trace; debug builds only, release
  /// builds keep warnings and errors only). RUST_LOG overrides this
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,

  /// Expression to evaluate (if not provided, reads one per line from stdin)
  expression: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
  Text,
  Json,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Report<'a> {
  Success {
    expression: &'a str,
    postfix: String,
    value: Integer,
  },
  Failure {
    expression: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    postfix: Option<String>,
    error: String,
  },
}

fn init_logging(verbose: u8) {
  let default_level = match verbose {
    0 => "warn",
    1 => "debug",
    _ => "trace",
  };
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_level));

  fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .init();
}

fn evaluate_one(evaluator: &mut Evaluator) -> Result<Integer, Error> {
  evaluator.generate_postfix()?;
  Ok(evaluator.evaluate_postfix()?.value())
}

fn report(expression: &str) -> Report<'_> {
  let mut evaluator = Evaluator::new(expression);
  let outcome = evaluate_one(&mut evaluator);
  let postfix = evaluator.postfix().map(|p| p.to_string());
  match outcome {
    Ok(value) => Report::Success { expression, postfix: postfix.unwrap_or_default(), value },
    Err(err) => Report::Failure { expression, postfix, error: err.to_string() },
  }
}

/// Evaluates one expression and writes the outcome. Returns whether
/// evaluation succeeded.
fn run_one(expression: &str, args: &Args, out: &mut impl Write) -> anyhow::Result<bool> {
  let report = report(expression);
  match args.format {
    Format::Json => {
      serde_json::to_writer(&mut *out, &report)?;
      writeln!(out)?;
    }
    Format::Text => match &report {
      Report::Success { postfix, value, .. } => {
        if args.postfix {
          writeln!(out, "{postfix}")?;
        }
        writeln!(out, "{value}")?;
      }
      Report::Failure { postfix, error, .. } => {
        if let (true, Some(postfix)) = (args.postfix, postfix) {
          writeln!(out, "{postfix}")?;
        }
        eprintln!("error: {error}");
      }
    },
  }
  Ok(matches!(report, Report::Success { .. }))
}

fn main() -> anyhow::Result<ExitCode> {
  let args = Args::parse();
  init_logging(args.verbose);

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let mut all_ok = true;

  if let Some(expression) = &args.expression {
    all_ok = run_one(expression, &args, &mut out)?;
  } else {
    for line in io::stdin().lock().lines() {
      let line = line?;
      let expression = line.trim();
      if expression.is_empty() {
        continue;
      }
      all_ok &= run_one(expression, &args, &mut out)?;
    }
  }

  out.flush()?;
  Ok(if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
