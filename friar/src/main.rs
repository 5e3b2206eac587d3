use std::process::ExitCode;

use clap::Parser;
use friar::cli;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
pub struct Cli {
  /// File to run. The bundled sample program runs when omitted.
  #[clap(name = "file")]
  file: Option<String>,

  /// Log filter used when RUST_LOG is not set, e.g. `debug` or `friar::runtime=trace`.
  #[clap(long, default_value = "warn")]
  log: String,
}

fn main() -> ExitCode {
  let options = Cli::parse();

  cli::init_tracing(&options.log);

  match cli::read(options.file.as_deref()) {
    | Ok(_) => ExitCode::SUCCESS,
    | Err(_) => ExitCode::FAILURE,
  }
}
