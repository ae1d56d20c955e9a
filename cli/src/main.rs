//! `wt`: terminal client for the Warranty Tracker REST API.
//!
//! Shares the session model with the web client: the same three credential
//! keys, persisted to a JSON file instead of browser storage, and the same
//! role guard deciding which commands a session may run.

mod api;
mod store;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use reqwest::Method;
use serde_json::{Map, Value};
use session::{AuthError, Denial, GuardDecision, Role, Session, SessionContainer, check_access, dashboard_for, sync_store};

use crate::api::ApiClient;
use crate::store::{FileCredentialStore, default_session_file};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `wt login` first")]
    NotLoggedIn,
    #[error("`{command}` is not available to {role}")]
    NotPermitted { command: &'static str, role: &'static str },
    #[error("`{0}` is not available to anyone")]
    Disabled(&'static str),
    #[error("session expired; log in again")]
    SessionExpired,
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("login response was missing token, username, or role")]
    MalformedLoginResponse,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "wt", about = "Warranty Tracker / Service Pro command-line client")]
struct Cli {
    #[arg(long, env = "WT_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    /// Where credentials are kept between runs.
    #[arg(long, env = "WT_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    Homeowner,
    Technician,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Homeowner => Role::Homeowner,
            RoleArg::Technician => Role::Technician,
            RoleArg::Admin => Role::Admin,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and remember the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "WT_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, value_enum)]
        role: RoleArg,
    },
    /// Create an account.
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "WT_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, value_enum)]
        role: RoleArg,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Forget the stored session.
    Logout,
    /// Show the current session and its dashboard.
    Whoami,
    Appliance(ApplianceCommand),
    Request(RequestCommand),
    Admin(AdminCommand),
    /// Warranties expiring within a window.
    Expiring {
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
}

#[derive(Args, Debug)]
struct ApplianceCommand {
    #[command(subcommand)]
    command: ApplianceSubcommand,
}

#[derive(Subcommand, Debug)]
enum ApplianceSubcommand {
    List,
    Add(ApplianceFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: ApplianceFields,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct ApplianceFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    brand: String,
    #[arg(long)]
    model: String,
    #[arg(long)]
    serial_number: String,
    /// `YYYY-MM-DD`
    #[arg(long)]
    purchase_date: String,
    /// `YYYY-MM-DD`
    #[arg(long)]
    warranty_expiry_date: String,
}

#[derive(Args, Debug)]
struct RequestCommand {
    #[command(subcommand)]
    command: RequestSubcommand,
}

#[derive(Subcommand, Debug)]
enum RequestSubcommand {
    /// Homeowner: list own service requests.
    List,
    /// Homeowner: open a service request.
    Open {
        #[arg(long)]
        appliance_id: String,
        #[arg(long)]
        description: String,
    },
    /// Technician: list assigned requests.
    Assigned,
    /// Technician: mark a request in progress.
    Start { id: String },
    /// Technician: submit the completion form.
    Complete {
        id: String,
        #[arg(long)]
        notes: String,
        #[arg(long)]
        labor_hours: f64,
        #[arg(long, default_value_t = 0.0)]
        parts_cost: f64,
        /// `YYYY-MM-DD`
        #[arg(long)]
        completed_on: String,
    },
}

#[derive(Args, Debug)]
struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
enum AdminSubcommand {
    Requests,
    Technicians,
    Appliances,
    Assign {
        request_id: String,
        #[arg(long)]
        technician_id: String,
    },
    /// Send expiry notifications for warranties ending within `days`.
    Notify {
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
}

const HOMEOWNER: &[Role] = &[Role::Homeowner];
const TECHNICIAN: &[Role] = &[Role::Technician];
const ADMIN: &[Role] = &[Role::Admin];
const HOMEOWNER_OR_ADMIN: &[Role] = &[Role::Homeowner, Role::Admin];

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Signup { .. } => "signup",
            Self::Logout => "logout",
            Self::Whoami => "whoami",
            Self::Appliance(_) => "appliance",
            Self::Request(cmd) => match cmd.command {
                RequestSubcommand::List | RequestSubcommand::Open { .. } => "request list/open",
                RequestSubcommand::Assigned | RequestSubcommand::Start { .. } | RequestSubcommand::Complete { .. } => {
                    "request assigned/start/complete"
                }
            },
            Self::Admin(_) => "admin",
            Self::Expiring { .. } => "expiring",
        }
    }

    /// Roles allowed to run this command; `None` for session management.
    fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Self::Login { .. } | Self::Signup { .. } | Self::Logout | Self::Whoami => None,
            Self::Appliance(_) => Some(HOMEOWNER),
            Self::Request(cmd) => match cmd.command {
                RequestSubcommand::List | RequestSubcommand::Open { .. } => Some(HOMEOWNER),
                RequestSubcommand::Assigned | RequestSubcommand::Start { .. } | RequestSubcommand::Complete { .. } => {
                    Some(TECHNICIAN)
                }
            },
            Self::Admin(_) => Some(ADMIN),
            Self::Expiring { .. } => Some(HOMEOWNER_OR_ADMIN),
        }
    }
}

/// Refuse a command locally when the session's role may not run it.
fn authorize(session: &Session, command: &Command) -> Result<(), CliError> {
    let Some(allowed) = command.allowed_roles() else {
        return Ok(());
    };
    match check_access(session, allowed) {
        GuardDecision::Render => Ok(()),
        GuardDecision::Redirect { reason: Denial::Unauthenticated, .. } => Err(CliError::NotLoggedIn),
        GuardDecision::Redirect { reason: Denial::NobodyAllowed, .. } => Err(CliError::Disabled(command.name())),
        GuardDecision::Redirect { reason: Denial::RoleNotAllowed(role), .. } => Err(CliError::NotPermitted {
            command: command.name(),
            role: role.label(),
        }),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Line printed to stderr when a command fails.
fn failure_message(err: &CliError) -> String {
    format!("wt: {err}")
}

async fn try_main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN })
        .init();

    let session_path = cli.session_file.clone().unwrap_or_else(default_session_file);
    let mut store = FileCredentialStore::open(&session_path);
    let mut container = SessionContainer::new();
    container.initialize(&store);
    tracing::debug!(path = %store.path().display(), authenticated = container.session().is_authenticated(), "session loaded");
    container.persist_with(move |session| sync_store(&mut store, session));

    authorize(container.session(), &cli.command)?;
    let client = ApiClient::new(&cli.base_url, container.session().token().map(str::to_owned));

    let result = run(&client, &mut container, cli.command).await;
    if matches!(result, Err(CliError::SessionExpired)) {
        container.logout();
    }
    result
}

async fn run(client: &ApiClient, container: &mut SessionContainer, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password, role } => {
            let creds = client.login(email.trim(), &password, role.into()).await?;
            println!("logged in as {} ({})", creds.username(), creds.role().label());
            container.login(creds);
            Ok(())
        }
        Command::Signup {
            username,
            email,
            password,
            role,
            phone,
        } => {
            let mut body = Map::new();
            body.insert("username".to_owned(), Value::String(username));
            body.insert("email".to_owned(), Value::String(email));
            body.insert("password".to_owned(), Value::String(password));
            body.insert("role".to_owned(), Value::String(Role::from(role).as_str().to_owned()));
            if let Some(phone) = phone {
                body.insert("phone".to_owned(), Value::String(phone));
            }
            client.signup(Value::Object(body)).await?;
            println!("account created; run `wt login` to sign in");
            Ok(())
        }
        Command::Logout => {
            container.logout();
            println!("logged out");
            Ok(())
        }
        Command::Whoami => {
            print_whoami(container.session());
            Ok(())
        }
        Command::Appliance(cmd) => run_appliance(client, cmd).await,
        Command::Request(cmd) => run_request(client, cmd).await,
        Command::Admin(cmd) => run_admin(client, cmd).await,
        Command::Expiring { days } => {
            let path = format!("/api/notifications/expiring?days={days}");
            print_json(&client.request(Method::GET, &path, None).await?)
        }
    }
}

fn print_whoami(session: &Session) {
    match session {
        Session::Anonymous => println!("anonymous"),
        Session::Authenticated(creds) => {
            println!("{} ({})", creds.username(), creds.role().label());
            println!("dashboard: {}", dashboard_for(Some(creds.role())));
        }
    }
}

fn appliance_body(fields: ApplianceFields) -> Value {
    serde_json::json!({
        "name": fields.name,
        "brand": fields.brand,
        "model": fields.model,
        "serialNumber": fields.serial_number,
        "purchaseDate": fields.purchase_date,
        "warrantyExpiryDate": fields.warranty_expiry_date,
    })
}

async fn run_appliance(client: &ApiClient, cmd: ApplianceCommand) -> Result<(), CliError> {
    let json = match cmd.command {
        ApplianceSubcommand::List => client.request(Method::GET, "/api/appliances", None).await?,
        ApplianceSubcommand::Add(fields) => {
            client
                .request(Method::POST, "/api/appliances", Some(appliance_body(fields)))
                .await?
        }
        ApplianceSubcommand::Update { id, fields } => {
            let path = format!("/api/appliances/{id}");
            client.request(Method::PUT, &path, Some(appliance_body(fields))).await?
        }
        ApplianceSubcommand::Delete { id } => {
            let path = format!("/api/appliances/{id}");
            client.request(Method::DELETE, &path, None).await?
        }
    };
    print_json(&json)
}

async fn run_request(client: &ApiClient, cmd: RequestCommand) -> Result<(), CliError> {
    let json = match cmd.command {
        RequestSubcommand::List => client.request(Method::GET, "/api/service-requests", None).await?,
        RequestSubcommand::Open {
            appliance_id,
            description,
        } => {
            let body = serde_json::json!({ "applianceId": appliance_id, "description": description });
            client.request(Method::POST, "/api/service-requests", Some(body)).await?
        }
        RequestSubcommand::Assigned => {
            client
                .request(Method::GET, "/api/service-requests/assigned", None)
                .await?
        }
        RequestSubcommand::Start { id } => {
            let path = format!("/api/service-requests/{id}/status");
            let body = serde_json::json!({ "status": "IN_PROGRESS" });
            client.request(Method::PUT, &path, Some(body)).await?
        }
        RequestSubcommand::Complete {
            id,
            notes,
            labor_hours,
            parts_cost,
            completed_on,
        } => {
            let path = format!("/api/service-requests/{id}/complete");
            let body = serde_json::json!({
                "notes": notes,
                "laborHours": labor_hours,
                "partsCost": parts_cost,
                "completedOn": completed_on,
            });
            client.request(Method::POST, &path, Some(body)).await?
        }
    };
    print_json(&json)
}

async fn run_admin(client: &ApiClient, cmd: AdminCommand) -> Result<(), CliError> {
    let json = match cmd.command {
        AdminSubcommand::Requests => {
            client
                .request(Method::GET, "/api/admin/service-requests", None)
                .await?
        }
        AdminSubcommand::Technicians => client.request(Method::GET, "/api/admin/technicians", None).await?,
        AdminSubcommand::Appliances => client.request(Method::GET, "/api/admin/appliances", None).await?,
        AdminSubcommand::Assign {
            request_id,
            technician_id,
        } => {
            let path = format!("/api/admin/service-requests/{request_id}/assign");
            let body = serde_json::json!({ "technicianId": technician_id });
            client.request(Method::PUT, &path, Some(body)).await?
        }
        AdminSubcommand::Notify { days } => {
            let body = serde_json::json!({ "days": days });
            client
                .request(Method::POST, "/api/admin/notifications/send", Some(body))
                .await?
        }
    };
    print_json(&json)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    if value.is_null() {
        println!("ok");
        return Ok(());
    }
    let pretty = serde_json::to_string_pretty(value)?;
    println!("{pretty}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
