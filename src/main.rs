mod cli;
mod client;
mod config;
mod error;
mod models;
mod theme;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use crossterm::{
    event::{Event as TermEvent, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::client::AnalysisClient;
use crate::config::{Config, LoggingConfig};
use crate::ui::{
    Action, App, Event, Flow, handle_key_event, perform_analysis, render, spawn_analysis,
};

/// 获取数据目录路径 (~/.local/share/vibecheck/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "cannot locate user data directory")
        })?
        .join("vibecheck");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        return init_config(&args);
    }

    let mut config = match args.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    config.merge_with_args(&args);

    // 终端被界面占用，日志写入文件
    let log_path = init_logging(&config.logging)?;
    let client = AnalysisClient::new(config.api.endpoint.clone());
    info!("vibecheck v{}", env!("CARGO_PKG_VERSION"));
    debug!(endpoint = client.endpoint(), log = %log_path.display(), "configuration loaded");

    if let Some(note) = args.once {
        return run_once(&client, note).await;
    }

    // 设置终端
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app, &client, config.ui.tick_rate_ms).await;

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

/// 写出默认配置文件
fn init_config(args: &Args) -> Result<()> {
    let path = args
        .config
        .clone()
        .or_else(Config::default_path)
        .ok_or_else(|| anyhow!("cannot locate user config directory"))?;

    if path.exists() {
        eprintln!("{} already exists, remove it first or edit it manually.", path.display());
        std::process::exit(1);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, Config::default_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created {} with default settings.", path.display());
    Ok(())
}

/// 初始化文件日志，返回日志文件路径
fn init_logging(logging: &LoggingConfig) -> Result<PathBuf> {
    let path = match &logging.file {
        Some(path) => path.clone(),
        None => get_data_dir()?.join("vibecheck.log"),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))?;

    Ok(path)
}

/// 界面崩溃时先恢复终端
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// 非交互模式：失败时错误信息写到 stderr，退出码 1
async fn run_once(client: &AnalysisClient, note: String) -> Result<()> {
    match check_once(client, note).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// 走同一个 reducer 分析一句话，返回要打印的标题与结果
async fn check_once(client: &AnalysisClient, note: String) -> Result<String> {
    let mut app = App::new();
    app.apply(Event::InputChanged(note));

    let Flow::Analyze(note) = app.dispatch(Action::Submit) else {
        return Err(anyhow!("nothing to analyze: the sentence is blank"));
    };
    let event = perform_analysis(client, &note).await;
    app.apply(event);

    let state = &app.state;
    if let Some(error) = &state.error {
        return Err(anyhow!("{}", error));
    }

    let mut output = format!("{} ({})", state.title, state.title_color.hex());
    if let Some(result) = &state.result {
        output.push('\n');
        output.push_str(&result.message);
    }
    Ok(output)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &AnalysisClient,
    tick_rate_ms: u64,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut term_events = EventStream::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(tick_rate_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            _ = ticker.tick() => app.tick(),

            Some(event) = rx.recv() => app.apply(event),

            maybe_event = term_events.next() => match maybe_event {
                Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    match handle_key_event(app, key) {
                        Flow::Quit => break,
                        Flow::Analyze(note) => {
                            debug!("submitting note");
                            spawn_analysis(client.clone(), note, tx.clone());
                        }
                        Flow::Continue => {}
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }
    Ok(())
}
