use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use flashcards_core::model::{QuizSettings, QuizSettingsDraft, SettingsError};
use services::{Clock, DeckService, SessionLoopService};
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const APP_TITLE: &str = "🌸 Flashcards";
const DEFAULT_DECK_PATH: &str = "flashcards.json";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidFeedbackMs { raw: String },
    InvalidDeckPath { raw: String },
    Settings(SettingsError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidFeedbackMs { raw } => {
                write!(f, "invalid --feedback-ms value: {raw}")
            }
            ArgsError::InvalidDeckPath { raw } => write!(f, "invalid --deck value: {raw:?}"),
            ArgsError::Settings(err) => write!(f, "{err}"),
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
    session_loop: Arc<SessionLoopService>,
}

impl UiApp for DesktopApp {
    fn app_title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }
}

#[derive(Debug)]
struct Args {
    deck_path: PathBuf,
    settings: QuizSettings,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--deck <path>] [--feedback-ms <n>] [--no-shuffle]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --deck {DEFAULT_DECK_PATH}");
    eprintln!("  --feedback-ms 1500");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLASHCARDS_DECK, FLASHCARDS_FEEDBACK_MS, FLASHCARDS_NO_SHUFFLE, RUST_LOG");
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Args {
    /// Flags win over the environment; unparsable environment values are ignored.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut deck_path = env("FLASHCARDS_DECK")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DECK_PATH), PathBuf::from);
        let mut draft = QuizSettingsDraft {
            feedback_delay_ms: env("FLASHCARDS_FEEDBACK_MS")
                .and_then(|value| value.trim().parse::<u64>().ok()),
            shuffle_options: env("FLASHCARDS_NO_SHUFFLE")
                .filter(|value| is_truthy(value))
                .map(|_| false),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--deck" => {
                    let value = require_value(args, "--deck")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDeckPath { raw: value });
                    }
                    deck_path = PathBuf::from(value);
                }
                "--feedback-ms" => {
                    let value = require_value(args, "--feedback-ms")?;
                    let parsed: u64 = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidFeedbackMs { raw: value.clone() })?;
                    draft.feedback_delay_ms = Some(parsed);
                }
                "--no-shuffle" => draft.shuffle_options = Some(false),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let settings = draft.validate().map_err(ArgsError::Settings)?;
        Ok(Self {
            deck_path,
            settings,
        })
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

async fn load_session_loop(args: &Args) -> Result<SessionLoopService, Box<dyn std::error::Error>> {
    let storage = Storage::json_file(args.deck_path.clone());
    let decks = DeckService::new(Arc::clone(&storage.decks));
    let session_loop = SessionLoopService::load(Clock::system(), &decks, args.settings).await?;
    Ok(session_loop)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Load before opening a window so a bad deck never reaches the UI.
    let runtime = tokio::runtime::Runtime::new()?;
    let session_loop = runtime.block_on(load_session_loop(&parsed))?;
    drop(runtime);
    info!(
        deck = %parsed.deck_path.display(),
        cards = session_loop.deck().len(),
        feedback = ?parsed.settings.feedback_delay(),
        shuffle = parsed.settings.shuffle_options(),
        "starting quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        session_loop: Arc::new(session_loop),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(APP_TITLE)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
