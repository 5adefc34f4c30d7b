use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
use commands::{execute_envelope_command, execute_serve_command, execute_trigger_command, init_tracing};

#[derive(Parser)]
#[command(name = "userhooks")]
#[command(about = "Userhooks - forward created user records to HostedHooks")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the ingress server that receives created-record events
    Serve(ServeArgs),
    /// Fire one created-record event through the triggers
    Trigger(TriggerArgs),
    /// Print the envelope that would be sent, without sending it
    Envelope(EnvelopeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,
    /// Store path pattern to watch
    #[arg(long, default_value = userhooks_adapters::USERS_PATTERN)]
    pub pattern: String,
}

#[derive(Args)]
pub struct TriggerArgs {
    /// Store path of the created record, e.g. /users/u1
    pub path: String,
    /// Record JSON
    pub record: String,
    /// Store path pattern to watch
    #[arg(long, default_value = userhooks_adapters::USERS_PATTERN)]
    pub pattern: String,
}

#[derive(Args)]
pub struct EnvelopeArgs {
    /// Record JSON
    pub record: String,
    /// Event tag
    #[arg(short, long, default_value = userhooks_protocol::USER_CREATED)]
    pub event_type: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            init_tracing();
            execute_serve_command(commands::ServeArgs {
                host: args.host,
                port: args.port,
                pattern: args.pattern,
            })
            .await
        }
        Commands::Trigger(args) => {
            init_tracing();
            execute_trigger_command(commands::TriggerArgs {
                path: args.path,
                record: args.record,
                pattern: args.pattern,
            })
            .await
        }
        Commands::Envelope(args) => execute_envelope_command(&args.event_type, &args.record),
    }
}
