use std::env;
use std::process::ExitCode;

use contactform_cli::run_cli;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    run_cli(args).await
}
