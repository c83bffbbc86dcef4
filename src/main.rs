use agenthub::cli::{parse_arguments, Cli, Commands};
use agenthub::{utils, Settings, TaskDispatcher};
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let (settings, load_error) = Settings::load_or_default();
    init_tracing(&settings.logging.level);
    if let Some(e) = load_error {
        tracing::warn!("Ignoring invalid configuration, using defaults: {}", e);
    }

    let cli = Cli::parse();
    let dispatcher = TaskDispatcher::from_settings(&settings);

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => handle_demo(&dispatcher, &settings).await?,
        Commands::Setup => handle_setup(&dispatcher).await?,
        Commands::Exec {
            provider,
            operation,
            args,
            json,
        } => return handle_exec(&dispatcher, provider, operation, args, json).await,
        Commands::List => handle_list(&dispatcher)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn handle_demo(dispatcher: &TaskDispatcher, settings: &Settings) -> Result<()> {
    handle_setup(dispatcher).await?;

    let results =
        agenthub::demo_sequence(dispatcher, settings.dispatch.batch_concurrency).await;
    for result in results {
        utils::print_result(&result);
    }

    Ok(())
}

async fn handle_setup(dispatcher: &TaskDispatcher) -> Result<()> {
    let report = agenthub::one_click_setup_with(dispatcher).await;
    utils::print_result(&report);
    Ok(())
}

async fn handle_exec(
    dispatcher: &TaskDispatcher,
    provider: String,
    operation: String,
    args: Vec<String>,
    json: Option<String>,
) -> Result<ExitCode> {
    let arguments = parse_arguments(&args, json.as_deref())?;

    match dispatcher.execute(&provider, &operation, arguments).await {
        Ok(output) => {
            utils::print_result(&output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            utils::print_error(&e.to_string());
            if e.is_not_found() {
                utils::print_hint("run `agenthub list` to see available agents and tasks");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_list(dispatcher: &TaskDispatcher) -> Result<()> {
    let registry = dispatcher.registry();

    utils::print_header("Registered Agents");
    println!("{}", registry.providers_description());
    utils::print_success(&format!("\n{} agents available", registry.len()));

    Ok(())
}
