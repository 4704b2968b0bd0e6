use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder, use_wry_event_handler};
use dioxus::prelude::*;
use lesson_core::model::ContentStore;
use services::{AppServices, ProgressStore};
use storage::{bundled_content, load_content_dir};
use ui::{App, UiApp, build_app_context};

const DB_URL_ENV: &str = "MOVIE_ENGLISH_DB_URL";
const CONTENT_DIR_ENV: &str = "MOVIE_ENGLISH_CONTENT_DIR";
const DEFAULT_DB_PATH: &str = "movie-english.sqlite3";
const FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidContentDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidContentDir { raw } => {
                write!(f, "invalid --content-dir value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: Arc<AppServices>,
}

impl UiApp for DesktopApp {
    fn content(&self) -> Arc<ContentStore> {
        self.services.content()
    }

    fn progress(&self) -> Arc<ProgressStore> {
        self.services.progress()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    content_dir: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--content-dir <dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:{DEFAULT_DB_PATH}");
    eprintln!("  --content-dir <bundled lessons>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_URL_ENV}, {CONTENT_DIR_ENV}, RUST_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut db_url = env(DB_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| normalize_sqlite_url(DEFAULT_DB_PATH.into()), normalize_sqlite_url);
        let mut content_dir = env(CONTENT_DIR_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--content-dir" => {
                    let value = require_value(args, "--content-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidContentDir { raw: value });
                    }
                    content_dir = Some(PathBuf::from(value));
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            db_url,
            content_dir,
        }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn load_content(dir: Option<&PathBuf>) -> Result<ContentStore, storage::ContentError> {
    match dir {
        Some(dir) => load_content_dir(dir),
        None => bundled_content(),
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, |key| std::env::var(key).ok()) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    let content = load_content(parsed.content_dir.as_ref())?;
    log::info!("{} movies available", content.movies().len());

    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, content).await?;
    log::info!(
        "progress restored from {} ({} entries)",
        parsed.db_url,
        services.progress().get().len()
    );

    let services = Arc::new(services);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services: Arc::clone(&services),
    });
    let context = build_app_context(&app);

    // Some tao setups default to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Movie English")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .with_context(services)
        .launch(DesktopRoot);
    Ok(())
}

/// Wraps the app so queued progress writes land before the window goes away.
#[component]
fn DesktopRoot() -> Element {
    let services = use_context::<Arc<AppServices>>();
    use_wry_event_handler(move |event, _| {
        let closing = matches!(
            event,
            Event::WindowEvent {
                event: WindowEvent::CloseRequested | WindowEvent::Destroyed,
                ..
            } | Event::LoopDestroyed
        );
        if closing && !services.flush(FLUSH_TIMEOUT) {
            log::warn!("progress writes still pending after {FLUSH_TIMEOUT:?}");
        }
    });

    rsx! { App {} }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        log::error!("{err}");
        std::process::exit(2);
    }
}
