use std::io::{self, Read};
use std::process::ExitCode;

use contactform::{
    is_submittable, ContactForm, ContactFormError, EnvironmentConfig,
    MemoryStore, Notification, NotificationKind, Notifier, Outcome,
    RelayConfig, RelayRequestPayload, SubmissionClient, SubmissionDraft,
};

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Successes go to stdout, failures to stderr.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind() {
            NotificationKind::Success => println!("{}", notification),
            NotificationKind::Error => eprintln!("{}", notification),
        }
    }
}

pub async fn handle_send(
    matches: &clap::ArgMatches,
    config: EnvironmentConfig,
) -> ExitCode {
    ExitCode::from(run_send(matches, config, io::stdin()).await)
}

async fn run_send<R: Read>(
    matches: &clap::ArgMatches,
    config: EnvironmentConfig,
    input: R,
) -> u8 {
    let draft = match draft_from_matches(matches, input) {
        Ok(draft) => draft,
        Err(e) => {
            eprintln!("Error reading message from stdin: {}", e);
            return EXIT_FAILURE;
        }
    };

    let relay_config = match RelayConfig::from_config(&config) {
        Ok(relay_config) => relay_config,
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_FAILURE;
        }
    };
    log::debug!("using {:?}", relay_config);

    if matches.get_flag("dry-run") {
        return dry_run(&relay_config, &draft);
    }

    let form = ContactForm::new(
        MemoryStore::with_draft(draft),
        SubmissionClient::from_config(relay_config),
        ConsoleNotifier,
    );
    exit_status(form.submit().await)
}

fn exit_status(outcome: Outcome) -> u8 {
    if outcome.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}

/// Draft from the command line; a message of `-` is read from `input`.
fn draft_from_matches<R: Read>(
    matches: &clap::ArgMatches,
    mut input: R,
) -> Result<SubmissionDraft, io::Error> {
    let value = |arg: &str| {
        matches
            .get_one::<String>(arg)
            .cloned()
            .unwrap_or_default()
    };

    let mut message = value("message");
    if message == "-" {
        message.clear();
        input.read_to_string(&mut message)?;
    }
    Ok(SubmissionDraft {
        name: value("name"),
        email: value("email"),
        message,
    })
}

fn dry_run_report(
    relay_config: &RelayConfig,
    draft: &SubmissionDraft,
) -> Result<String, ContactFormError> {
    let masked_key = relay_config.masked_access_key();
    let json = RelayRequestPayload::new(&masked_key, draft).to_json()?;
    Ok(format!("POST {}\n{}", relay_config.endpoint(), json))
}

fn dry_run(relay_config: &RelayConfig, draft: &SubmissionDraft) -> u8 {
    match dry_run_report(relay_config, draft) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("Error encoding payload: {}", e);
            return EXIT_FAILURE;
        }
    }

    if is_submittable(draft) {
        EXIT_SUCCESS
    } else {
        if let Some(notification) = Outcome::Incomplete.notification() {
            ConsoleNotifier.notify(notification);
        }
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::super::send::send_subcommand;
    use super::*;

    const ACCESS_KEY: &str = "3f1c9a7e-key-for-tests";
    // nothing listens here, any request would fail
    const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/submit";

    fn send_matches(args: &[&str]) -> clap::ArgMatches {
        let mut argv = vec!["send"];
        argv.extend_from_slice(args);
        send_subcommand().try_get_matches_from(argv).unwrap()
    }

    fn config(pairs: &[(&str, &str)]) -> EnvironmentConfig {
        let settings: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentConfig::new(settings)
    }

    #[test]
    fn test_message_read_from_input() {
        let matches = send_matches(&["-n", "Ana", "-E", "ana@x.com", "-m", "-"]);
        let draft =
            draft_from_matches(&matches, &b"line one\nline two\n"[..]).unwrap();
        assert_eq!(draft.name, "Ana");
        assert_eq!(draft.email, "ana@x.com");
        assert_eq!(draft.message, "line one\nline two\n");
    }

    #[test]
    fn test_message_argument_ignores_input() {
        let matches = send_matches(&["-n", "Ana", "-E", "ana@x.com", "-m", "Hi"]);
        let draft = draft_from_matches(&matches, &b"unused"[..]).unwrap();
        assert_eq!(draft.message, "Hi");
    }

    #[test]
    fn test_dry_run_report_masks_access_key() {
        let relay_config = RelayConfig::new(ACCESS_KEY).unwrap();
        let draft = SubmissionDraft::new("Ana", "ana@x.com", "Hi");

        let report = dry_run_report(&relay_config, &draft).unwrap();
        let (request_line, json) = report.split_once('\n').unwrap();
        assert_eq!(request_line, "POST https://api.web3forms.com/submit");
        assert!(!report.contains(ACCESS_KEY));

        let payload: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(payload["access_key"], "3f1c****");
        assert_eq!(payload["name"], "Ana");
        assert_eq!(payload["email"], "ana@x.com");
        assert_eq!(payload["message"], "Hi");
    }

    #[test]
    fn test_exit_status_per_outcome() {
        assert_eq!(exit_status(Outcome::Success), EXIT_SUCCESS);
        for outcome in [
            Outcome::RejectedByServer,
            Outcome::NetworkError,
            Outcome::Incomplete,
            Outcome::AlreadyInFlight,
        ] {
            assert_eq!(exit_status(outcome), EXIT_FAILURE, "{:?}", outcome);
        }
    }

    #[tokio::test]
    async fn test_dry_run_sends_nothing() {
        let matches = send_matches(&[
            "-n", "Ana", "-E", "ana@x.com", "-m", "Hi", "--dry-run",
        ]);
        let config =
            config(&[("access_key", ACCESS_KEY), ("endpoint", DEAD_ENDPOINT)]);
        assert_eq!(run_send(&matches, config, io::empty()).await, EXIT_SUCCESS);
    }

    #[tokio::test]
    async fn test_dry_run_with_empty_field_fails() {
        let matches =
            send_matches(&["-n", "Ana", "-E", "", "-m", "Hi", "--dry-run"]);
        let config =
            config(&[("access_key", ACCESS_KEY), ("endpoint", DEAD_ENDPOINT)]);
        assert_eq!(run_send(&matches, config, io::empty()).await, EXIT_FAILURE);
    }

    #[tokio::test]
    async fn test_unreachable_relay_fails() {
        let matches = send_matches(&["-n", "Ana", "-E", "ana@x.com", "-m", "Hi"]);
        let config =
            config(&[("access_key", ACCESS_KEY), ("endpoint", DEAD_ENDPOINT)]);
        assert_eq!(run_send(&matches, config, io::empty()).await, EXIT_FAILURE);
    }

    #[tokio::test]
    async fn test_missing_access_key_fails() {
        let matches = send_matches(&["-n", "Ana", "-E", "ana@x.com", "-m", "Hi"]);
        assert_eq!(run_send(&matches, config(&[]), io::empty()).await, EXIT_FAILURE);
    }
}
