use std::path::PathBuf;

use clap::Parser;
use log::{error, LevelFilter};

use combination_bench::{BenchConfig, DEFAULT_LOG_PATH};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Result log; truncated at startup
  #[arg(short, long)]
  log_path: Option<PathBuf>,

  /// Also run the extra performance cases, up to C(18,9)
  #[arg(short, long)]
  extra: bool,

  #[arg(long)]
  skip_steps: bool,
}

fn main() {
  let args = Cli::parse();
  simple_logger::SimpleLogger::new()
    .with_level(LevelFilter::Info)
    .env()
    .init()
    .expect("failed to install logger");
  let config = BenchConfig {
    log_path: args.log_path.unwrap_or(PathBuf::from(DEFAULT_LOG_PATH)),
    extra: args.extra,
    steps: !args.skip_steps,
  };
  let stdout = std::io::stdout();
  if let Err(e) = combination_bench::run(&config, stdout.lock()) {
    error!("{e}");
    std::process::exit(1);
  }
}
