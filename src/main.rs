use anyhow::Result;
use clap::Parser;
use rspamd_client::commands::{Operation, read_message, run};
use rspamd_client::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_MS};
use rspamd_client::logger::{FileLogger, LogLevel};
use rspamd_client::{ClientConfig, RspamdClient};
use std::path::PathBuf;
use std::sync::Arc;

/// rspamd-client - talk to an Rspamd server
///
/// Reads a message from FILE (or stdin), sends it to Rspamd and prints the
/// JSON reply.
///
/// Examples:
///   rspamd-client check mail.eml
///   cat mail.eml | rspamd-client --host mx1 learn-spam
#[derive(Parser, Debug)]
#[command(author, version = env!("RSPAMD_CLIENT_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Rspamd host
    #[arg(long, env = "RSPAMD_HOST", default_value = DEFAULT_HOST, global = true)]
    host: String,

    /// Rspamd port
    #[arg(long, short = 'p', env = "RSPAMD_PORT", default_value_t = DEFAULT_PORT, global = true)]
    port: u16,

    /// Connect over HTTPS
    #[arg(long, env = "RSPAMD_HTTPS", global = true)]
    https: bool,

    /// Request timeout in milliseconds
    #[arg(long, short = 't', env = "RSPAMD_TIMEOUT", value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS, global = true)]
    timeout: u64,

    /// Log every request URL
    #[arg(long, short = 'd', env = "RSPAMD_DEBUG", global = true)]
    debug: bool,

    /// Also append logs to combined.log / error.log in this directory
    #[arg(long, value_name = "DIR", global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Scan a message (/checkv2)
    Check(CheckArgs),

    /// List the symbols a message triggers (/symbols)
    Symbols(MessageArgs),

    /// Train the message as spam (/learnspam)
    LearnSpam(MessageArgs),

    /// Train the message as ham (/learnham)
    LearnHam(MessageArgs),
}

#[derive(clap::Args, Debug)]
struct MessageArgs {
    /// Message file; stdin when omitted or "-"
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct CheckArgs {
    #[command(flatten)]
    message: MessageArgs,

    /// Print action, score and symbols instead of the raw JSON
    #[arg(long, short = 's')]
    summary: bool,
}

impl Cli {
    fn config(&self) -> ClientConfig {
        ClientConfig {
            host: self.host.clone(),
            port: self.port,
            https: self.https,
            timeout_ms: self.timeout,
            debug: self.debug,
            ..Default::default()
        }
    }

    fn operation(&self) -> (Operation, Option<&PathBuf>, bool) {
        match &self.command {
            Commands::Check(args) => (Operation::Check, args.message.file.as_ref(), args.summary),
            Commands::Symbols(args) => (Operation::Symbols, args.file.as_ref(), false),
            Commands::LearnSpam(args) => (Operation::LearnSpam, args.file.as_ref(), false),
            Commands::LearnHam(args) => (Operation::LearnHam, args.file.as_ref(), false),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.debug { "rspamd_client=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut client = RspamdClient::new(&cli.config())?;
    if let Some(dir) = &cli.log_dir {
        let level = if cli.debug { LogLevel::Debug } else { LogLevel::Info };
        client = client.with_logger(Arc::new(FileLogger::open(dir, level)?));
    }

    let (operation, file, summary) = cli.operation();
    let message = read_message(file.map(PathBuf::as_path)).await?;
    let output = run(&client, operation, &message, summary).await?;
    println!("{}", output);

    Ok(())
}
