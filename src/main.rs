use std::process;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use sexpc::{Compilation, CompileOptions, Grammar, Report};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sexpc", version)]
#[command(about = "Compile (name arg ...) calls into name(arg, ...); statements")]
struct Cli {
  /// Expression to compile, e.g. "(add 2 (subtract 4 2))"
  #[arg(value_name = "EXPR")]
  expr: String,

  /// Accepted notation
  #[arg(long, default_value_t = Grammar::Extended)]
  grammar: Grammar,

  /// How to print the result
  #[arg(long, value_enum, default_value_t = Format::Text)]
  format: Format,

  /// Dump intermediate stages as JSON to stderr
  #[arg(long, value_enum)]
  emit: Vec<Emit>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
  Text,
  Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Emit {
  Tokens,
  SourceAst,
  TargetAst,
}

fn main() {
  init_tracing();
  let cli = Cli::parse();

  let options = CompileOptions::with_grammar(cli.grammar);
  let result = Compilation::run(&cli.expr, &options);

  if let Ok(compilation) = &result {
    for emit in &cli.emit {
      match emit {
        Emit::Tokens => dump("tokens", compilation.tokens()),
        Emit::SourceAst => dump("source ast", compilation.source_ast()),
        Emit::TargetAst => dump("target ast", compilation.target_ast()),
      }
    }
  }

  let result = result.map(Compilation::into_output);
  match cli.format {
    Format::Text => match &result {
      Ok(output) => println!("{output}"),
      Err(err) => eprintln!("{}", err.render(&cli.expr)),
    },
    Format::Json => match Report::from_result(&result).to_json() {
      Ok(json) => println!("{json}"),
      Err(err) => {
        eprintln!("failed to serialize report: {err}");
        process::exit(1);
      }
    },
  }

  if result.is_err() {
    process::exit(1);
  }
}

fn dump<T: Serialize + ?Sized>(label: &str, value: &T) {
  match serde_json::to_string_pretty(value) {
    Ok(json) => eprintln!("{label}:\n{json}"),
    Err(err) => eprintln!("failed to serialize {label}: {err}"),
  }
}

fn init_tracing() {
  let filter = EnvFilter::try_from_env("SEXPC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}
