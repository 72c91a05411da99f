use clap::{Arg, ArgAction, Command};

pub use super::send_handler::handle_send;

pub fn send_subcommand() -> Command {
    Command::new("send")
        .about("Sends a contact message to the relay")
        .arg_required_else_help(true)
        .after_help("Use --message - to read the message from stdin")
        .arg(
            Arg::new("name")
                .long("name")
                .short('n')
                .required(true)
                .help("Sender name"),
        )
        .arg(
            Arg::new("email")
                .long("email")
                .short('E')
                .required(true)
                .help("Sender email address"),
        )
        .arg(
            Arg::new("message")
                .long("message")
                .short('m')
                .required(true)
                .help("Message text, or - for stdin"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Validate and print the payload without sending it"),
        )
}
