//! Terminal client for the joke service
//!
//! Fetches jokes or types and prints them, optionally counting down before
//! each punchline. The `submit` subcommand sends a new joke to the
//! submission microservice.

use std::io::{self, Write};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use joke_service::client::JokeClient;
use joke_service::config::{DEFAULT_JOKES_URL, DEFAULT_SUBMIT_URL};
use joke_service::logging::init_tracing;
use joke_service::models::SubmissionRequest;
use joke_service::render::{
    show_all_jokes, show_jokes, submit_joke, Renderer, Reveal, FETCH_FAILED,
};

#[derive(Debug, Parser)]
#[command(name = "joke-client", about = "Fetch and display jokes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Joke service base URL
    #[arg(long, env = "JOKES_URL", default_value = DEFAULT_JOKES_URL)]
    url: String,

    /// Joke type, or `any`
    #[arg(short = 't', long = "type", default_value = "any")]
    joke_type: String,

    /// Number of jokes (1-100)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    count: i64,

    /// Count down before each punchline
    #[arg(long)]
    countdown: bool,

    /// Milliseconds per countdown tick
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Fetch as many jokes of any type as allowed
    #[arg(long, conflicts_with = "types")]
    all: bool,

    /// List the available joke types instead
    #[arg(long)]
    types: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit a joke to the submission service
    Submit(SubmitArgs),
}

#[derive(Debug, Args)]
struct SubmitArgs {
    /// Submission service base URL
    #[arg(long, env = "SUBMIT_URL", default_value = DEFAULT_SUBMIT_URL)]
    url: String,

    /// List the types the submission service knows instead
    #[arg(long, conflicts_with_all = ["setup", "punchline"])]
    types: bool,

    #[arg(long, default_value = "")]
    setup: String,

    #[arg(long, default_value = "")]
    punchline: String,

    /// Existing joke type
    #[arg(short = 't', long = "type")]
    joke_type: Option<String>,

    /// New joke type; wins over --type
    #[arg(long)]
    new_type: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("warn");
    let cli = Cli::parse();

    let reveal = if cli.countdown {
        Reveal::Countdown(Duration::from_millis(cli.tick_ms))
    } else {
        Reveal::Immediate
    };
    let mut renderer = Renderer::new(io::stdout(), reveal);

    if let Some(Command::Submit(args)) = cli.command {
        let client = JokeClient::new(&args.url)?;
        if args.types {
            list_types(&client, &mut renderer).await?;
        } else {
            let request = SubmissionRequest {
                setup: Some(args.setup),
                punchline: Some(args.punchline),
                joke_type: args.joke_type,
                new_type: args.new_type,
            };
            submit_joke(&client, &mut renderer, request).await?;
        }
        return Ok(());
    }

    let client = JokeClient::new(&cli.url)?;
    if cli.types {
        list_types(&client, &mut renderer).await?;
    } else if cli.all {
        show_all_jokes(&client, &mut renderer).await?;
    } else {
        show_jokes(&client, &mut renderer, &cli.joke_type, cli.count).await?;
    }

    Ok(())
}

async fn list_types<W: Write>(client: &JokeClient, renderer: &mut Renderer<W>) -> io::Result<()> {
    match client.types().await {
        Ok(types) => {
            for joke_type in types {
                renderer.message(&capitalize(&joke_type))?;
            }
            Ok(())
        }
        Err(_) => renderer.message(FETCH_FAILED),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
