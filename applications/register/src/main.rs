/// Roster Register - fill in and submit the registration form from a terminal
use clap::Parser;
use dialoguer::{Input, Password};
use roster_client::{
    ClientConfig, FormField, RegistrationForm, RosterClient, DEFAULT_SERVER_URL,
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-register")]
#[command(about = "Create a Roster user", long_about = None)]
struct Cli {
    /// Server base URL
    #[arg(long, env = "ROSTER_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    last_name: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    password: Option<String>,

    /// Leave fields not given on the command line empty instead of prompting
    #[arg(long)]
    no_prompt: bool,
}

impl Cli {
    fn preset(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::LastName => self.last_name.as_deref(),
            FormField::City => self.city.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Password => self.password.as_deref(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let client = RosterClient::new(ClientConfig::new(cli.server.clone()))?;
    let mut form = RegistrationForm::new(client);

    for field in FormField::ALL {
        let value = match cli.preset(field) {
            Some(value) => value.to_string(),
            None if cli.no_prompt => continue,
            None => prompt(field)?,
        };
        form.state_mut().change(field.name(), value);
    }

    let outcome = form.submit().await;

    Ok(if outcome.is_created() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn prompt(field: FormField) -> anyhow::Result<String> {
    let value = if field.is_secret() {
        Password::new()
            .with_prompt(field.label())
            .allow_empty_password(true)
            .interact()?
    } else {
        Input::<String>::new()
            .with_prompt(field.label())
            .allow_empty(true)
            .interact_text()?
    };

    Ok(value)
}
