/*
[INPUT]:  CLI arguments, YAML configuration file, OS interrupt signal
[OUTPUT]: Submitted tasks watched to completion, history snapshots
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or watch handling
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use obelisk_adapter::{AgentKind, ObeliskClient, TaskStatus};
use obelisk_console::session::{ObservePhase, TaskView};
use obelisk_console::{ConsoleConfig, HistoryViewer, TaskSession};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "obelisk-console", version, about = "Operator console for the Obelisk task service")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a task and watch it to completion
    Submit {
        /// Agent to run (e.g. IdeasAgent, QCChecker)
        #[arg(long)]
        agent: String,
        /// Task params as a JSON document
        #[arg(long, default_value = "{}")]
        params: String,
        /// Print the task id and exit without polling
        #[arg(long = "no-watch")]
        no_watch: bool,
    },
    /// Fetch and print the task history snapshot
    History,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = load_config(args.config_path.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.service.base_url = base_url;
    }

    let client = Arc::new(
        ObeliskClient::with_config_and_base_url(config.client_config(), &config.service.base_url)
            .context("create task service client")?,
    );

    match args.command {
        Command::Submit {
            agent,
            params,
            no_watch,
        } => run_submit(client, &config, &agent, &params, no_watch).await,
        Command::History => run_history(client).await,
    }
}

async fn run_submit(
    client: Arc<ObeliskClient>,
    config: &ConsoleConfig,
    agent: &str,
    params: &str,
    no_watch: bool,
) -> Result<()> {
    let agent: AgentKind = agent
        .parse()
        .map_err(|err: String| anyhow!("{err} (known agents: {})", agent_roster()))?;

    let mut session = TaskSession::new(client, config.poll_interval());
    let mut rx = session.subscribe();

    let handle = session.submit(agent, params).await.context("submit task")?;
    println!("task id: {}", handle.id);

    if no_watch {
        return Ok(());
    }

    let final_view = tokio::select! {
        view = watch_until_terminal(&mut rx) => view,
        _ = tokio::signal::ctrl_c() => {
            session.teardown();
            info!("interrupted; polling cancelled");
            return Ok(());
        }
    };

    if let Some(result) = &final_view.result {
        println!("{}", serde_json::to_string_pretty(result)?);
    }

    if final_view.status == Some(TaskStatus::Failure) {
        bail!("task {} failed", handle.id);
    }

    Ok(())
}

/// Print each status transition until the task is terminal
async fn watch_until_terminal(rx: &mut watch::Receiver<TaskView>) -> TaskView {
    let mut last_printed: Option<TaskStatus> = None;
    loop {
        {
            let view = rx.borrow_and_update();
            if view.status != last_printed {
                if let Some(status) = &view.status {
                    println!("status: {status}");
                }
                last_printed = view.status.clone();
            }
            if view.phase == ObservePhase::Terminal {
                return view.clone();
            }
        }
        if rx.changed().await.is_err() {
            return rx.borrow().clone();
        }
    }
}

async fn run_history(client: Arc<ObeliskClient>) -> Result<()> {
    let mut viewer = HistoryViewer::new(client);
    let entries = viewer.refresh().await.context("fetch task history")?;

    if entries.is_empty() {
        println!("no tasks recorded");
        return Ok(());
    }

    for entry in entries {
        let result = entry
            .result
            .as_ref()
            .map(|value| value.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{}\t{}\t{}\t{}", entry.id, entry.agent, entry.status, result);
    }

    Ok(())
}

fn agent_roster() -> String {
    AgentKind::ALL
        .iter()
        .map(|agent| agent.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<ConsoleConfig> {
    let Some(path) = path else {
        return Ok(ConsoleConfig::default());
    };
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    ConsoleConfig::from_file(path_str).context("load config")
}
