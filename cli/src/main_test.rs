use super::*;
use session::Credentials;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["wt", "--session-file", "/tmp/unused.json"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("arguments should parse")
}

fn logged_in(role: Role) -> Session {
    let mut session = Session::default();
    session.login(Credentials::new("tok", "alice", role).unwrap());
    session
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn login_parses_role_value_enum() {
    let cli = parse(&["login", "--email", "a@b.c", "--password", "pw", "--role", "technician"]);
    match cli.command {
        Command::Login { email, role, .. } => {
            assert_eq!(email, "a@b.c");
            assert_eq!(Role::from(role), Role::Technician);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn login_rejects_unknown_role() {
    let err = Cli::try_parse_from(["wt", "login", "--email", "a", "--password", "p", "--role", "plumber"]);
    assert!(err.is_err());
}

#[test]
fn request_complete_parses_numbers() {
    let cli = parse(&[
        "request",
        "complete",
        "r-1",
        "--notes",
        "replaced pump",
        "--labor-hours",
        "1.5",
        "--completed-on",
        "2026-10-01",
    ]);
    let Command::Request(RequestCommand {
        command: RequestSubcommand::Complete { labor_hours, parts_cost, .. },
    }) = cli.command
    else {
        panic!("expected request complete");
    };
    assert!((labor_hours - 1.5).abs() < f64::EPSILON);
    assert!(parts_cost.abs() < f64::EPSILON);
}

// =============================================================
// Command authorization
// =============================================================

#[test]
fn session_commands_need_no_login() {
    for args in [&["logout"][..], &["whoami"][..]] {
        assert!(authorize(&Session::Anonymous, &parse(args).command).is_ok());
    }
}

#[test]
fn protected_command_without_session_is_not_logged_in() {
    let err = authorize(&Session::Anonymous, &parse(&["appliance", "list"]).command).unwrap_err();
    assert!(matches!(err, CliError::NotLoggedIn));
}

#[test]
fn failures_print_their_display_text() {
    assert_eq!(
        failure_message(&CliError::Auth(AuthError::NetworkUnavailable)),
        "wt: Unable to reach the server. Please try again later."
    );
    assert_eq!(failure_message(&CliError::NotLoggedIn), "wt: not logged in; run `wt login` first");
    assert_eq!(
        failure_message(&CliError::Api {
            status: 500,
            message: "boom".to_owned()
        }),
        "wt: server returned 500: boom"
    );
}

#[test]
fn commands_are_limited_to_their_roles() {
    let cases: [(&[&str], Role); 5] = [
        (&["appliance", "list"], Role::Homeowner),
        (&["request", "list"], Role::Homeowner),
        (&["request", "assigned"], Role::Technician),
        (&["admin", "technicians"], Role::Admin),
        (&["admin", "notify", "--days", "7"], Role::Admin),
    ];
    for (args, owner) in cases {
        let command = parse(args).command;
        for role in Role::ALL {
            let result = authorize(&logged_in(role), &command);
            assert_eq!(result.is_ok(), role == owner, "{args:?} as {role}");
        }
    }
}

#[test]
fn expiring_is_shared_by_homeowner_and_admin() {
    let command = parse(&["expiring"]).command;
    assert!(authorize(&logged_in(Role::Homeowner), &command).is_ok());
    assert!(authorize(&logged_in(Role::Admin), &command).is_ok());
    let err = authorize(&logged_in(Role::Technician), &command).unwrap_err();
    assert_eq!(err.to_string(), "`expiring` is not available to Technician");
}

#[test]
fn appliance_body_uses_camel_case_keys() {
    let cli = parse(&[
        "appliance",
        "add",
        "--name",
        "Fridge",
        "--brand",
        "Acme",
        "--model",
        "F1",
        "--serial-number",
        "SN1",
        "--purchase-date",
        "2025-01-01",
        "--warranty-expiry-date",
        "2027-01-01",
    ]);
    let Command::Appliance(ApplianceCommand {
        command: ApplianceSubcommand::Add(fields),
    }) = cli.command
    else {
        panic!("expected appliance add");
    };
    let body = appliance_body(fields);
    assert_eq!(body["serialNumber"], "SN1");
    assert_eq!(body["warrantyExpiryDate"], "2027-01-01");
}
