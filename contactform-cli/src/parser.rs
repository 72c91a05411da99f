use std::collections::HashMap;
use std::process::ExitCode;

use clap::{Arg, Command};
use contactform::EnvironmentConfig;

use super::subcommands::send::*;

const PROGRAM_NAME: &str = "contactform";

fn build_cli() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .about(format!(
            "{}: send a contact message through a hosted form relay",
            PROGRAM_NAME
        ))
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .global(true)
                .help("Relay endpoint URL [env: CONTACTFORM_ENDPOINT]"),
        )
        .arg(
            Arg::new("access-key")
                .long("access-key")
                .short('k')
                .global(true)
                .help("Relay access key [env: CONTACTFORM_ACCESS_KEY]"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .short('t')
                .global(true)
                .help(
                    "Give up after this many seconds [env: \
                     CONTACTFORM_TIMEOUT_SECS]",
                ),
        )
        .subcommand(send_subcommand()) // "send --name N --email E --message M"
}

pub async fn run_cli(args: Vec<String>) -> ExitCode {
    env_logger::init();
    let matches = build_cli().try_get_matches_from(args);

    match matches {
        Ok(matches) => {
            let config = create_initial_config(&matches);

            match matches.subcommand() {
                Some(("send", matches)) => handle_send(matches, config).await,
                _ => {
                    // given the `arg_required_else_help(true)` is defined,
                    // this branch should never be reached
                    unreachable!("arg_required_else_help(true) not defined")
                }
            }
        }
        Err(e) => {
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion
            ) {
                print!("{}", e);
                ExitCode::SUCCESS
            } else if e.kind()
                == clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            {
                eprint!("{}", e);
                ExitCode::FAILURE
            } else {
                eprintln!("Error parsing command-line arguments: {}", e);
                eprintln!(
                    "For more detailed help, try running '--help' or \
                     '<subcommand> --help'."
                );
                ExitCode::FAILURE
            }
        }
    }
}

fn create_initial_config(matches: &clap::ArgMatches) -> EnvironmentConfig {
    let mut config_hashmap = HashMap::new();
    for (arg, key) in [
        ("endpoint", "endpoint"),
        ("access-key", "access_key"),
        ("timeout", "timeout_secs"),
    ] {
        if let Some(value) = find_global(matches, arg) {
            config_hashmap.insert(key.to_string(), value);
        }
    }
    // command-line values take precedence over the environment
    EnvironmentConfig::new(config_hashmap).with_env_fallback()
}

// global args can be given before or after the subcommand
fn find_global(matches: &clap::ArgMatches, arg: &str) -> Option<String> {
    if let Some(value) = matches.get_one::<String>(arg) {
        return Some(value.to_string());
    }
    matches
        .subcommand()
        .and_then(|(_, sub)| sub.get_one::<String>(arg))
        .map(|value| value.to_string())
}
