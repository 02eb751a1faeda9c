mod config;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use phono_core::model::NotationSystem;
use services::{AppServices, Clock, NotationService};
use tracing_subscriber::EnvFilter;
use ui::{App, ServicesApp, Tab, UiApp, build_app_context};

use crate::config::{AppConfig, Command, ENV_QUESTIONS, ENV_START_TAB};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--questions <n>] [--tab <name>]");
    eprintln!("  cargo run -p app -- table [query]");
    eprintln!("  cargo run -p app -- convert <from> <value> <to>");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --questions 10");
    eprintln!("  --tab explorer");
    eprintln!();
    eprintln!("Tabs:");
    let tabs = Tab::ALL.map(Tab::id);
    eprintln!("  {}", tabs.join(", "));
    eprintln!();
    eprintln!("Notation systems:");
    let systems = NotationSystem::ALL.map(NotationSystem::id);
    eprintln!("  {}", systems.join(", "));
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_QUESTIONS}, {ENV_START_TAB}, RUST_LOG");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_table(notation: &NotationService, query: &str) {
    let header = notation
        .systems()
        .iter()
        .map(|system| system.label())
        .collect::<Vec<_>>();
    println!("{}", header.join("\t"));
    let rows = notation.filter(query);
    for row in &rows {
        let cells = NotationSystem::ALL
            .iter()
            .map(|system| row.get(*system).unwrap_or("-"))
            .collect::<Vec<_>>();
        println!("{}", cells.join("\t"));
    }
    eprintln!("{} of {} rows", rows.len(), notation.rows().len());
}

fn print_conversions(
    notation: &NotationService,
    from: NotationSystem,
    value: &str,
    to: NotationSystem,
) -> Result<(), Box<dyn std::error::Error>> {
    let found = notation.convert(from, value, to);
    if found.is_empty() {
        return Err(format!("no {to} spelling for {value:?} in {from}").into());
    }
    for spelling in found {
        println!("{spelling}");
    }
    Ok(())
}

fn launch_ui(config: AppConfig) {
    tracing::info!(
        start_tab = %config.start_tab,
        questions = config.quiz.total_questions(),
        "launching ui"
    );
    let services = AppServices::builtin(Clock::system(), config.quiz);
    let app: Arc<dyn UiApp> = Arc::new(ServicesApp::new(services, config.start_tab));
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("PhonoLab")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let base = AppConfig::from_env(|key| std::env::var(key).ok());
    let cmd = base
        .and_then(|base| Command::parse(argv, base))
        .inspect_err(|_| print_usage())?;

    match cmd {
        Command::Help => print_usage(),
        Command::Table { query } => print_table(&NotationService::default(), &query),
        Command::Convert { from, value, to } => {
            print_conversions(&NotationService::default(), from, &value, to)?;
        }
        Command::Ui(config) => launch_ui(config),
    }
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
