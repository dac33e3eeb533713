use chrono::Local;
use clap::Parser;
use moodlog::application::{
    ConfigService, OnboardingService, RecordEmotionService, ReviewService, SettingsService,
};
use moodlog::cli::{self, Cli, Commands};
use moodlog::domain::{translate, Emotion, Intensity, Language, RecordMode};
use moodlog::error::Result;
use moodlog::infrastructure::{Config, EmotionJournalStore, FileStorage};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("MOODLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let storage = match cli.root {
        Some(root) => FileStorage::new(root),
        None => FileStorage::discover()?,
    };
    tracing::debug!(root = %storage.root.display(), "using journal");

    let Some(command) = cli.command else {
        println!("moodlog - Terminal emotion journal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Setup { language, mode } => {
            let language = language.as_deref().map(Language::from_str).transpose()?;
            let mode = mode.as_deref().map(RecordMode::from_str).transpose()?;

            let mut store = EmotionJournalStore::load(storage);
            let mut onboarding = OnboardingService::new(&mut store);
            if let Some(language) = language {
                onboarding.choose_language(language);
            }
            if let Some(mode) = mode {
                onboarding.choose_mode(mode);
            }

            let state = store.onboarding_state();
            println!("Onboarding: {}", state.describe());
            if state.is_ready() {
                if let Some(mode) = store.record_mode() {
                    println!("{}", translate(store.language(), mode.reminder_key()));
                }
            }
            Ok(())
        }
        Commands::Status => {
            let store = EmotionJournalStore::load(storage);
            print!(
                "{}",
                cli::format_status(
                    store.language(),
                    store.record_mode(),
                    store.onboarding_state(),
                    store.records().len()
                )
            );
            Ok(())
        }
        Commands::Record {
            emotion,
            intensity,
            trigger,
        } => {
            let emotion = Emotion::from_str(&emotion)?;
            let intensity = Intensity::new(intensity)?;
            let config = Config::load_from_dir(&storage.root)?;

            let mut store = EmotionJournalStore::load(storage);
            let record =
                RecordEmotionService::new(&mut store).execute(emotion, intensity, &trigger, Local::now())?;

            let language = store.language();
            println!("{}:", translate(language, "saved"));
            println!("{}", cli::format_record(&record, language, config.time_pattern()));
            if let Some(mode) = store.record_mode() {
                println!("\n{}", translate(language, mode.reminder_key()));
            }
            Ok(())
        }
        Commands::Today => {
            let config = Config::load_from_dir(&storage.root)?;
            let store = EmotionJournalStore::load(storage);
            let overview =
                ReviewService::new(&store).today(Local::now().date_naive(), config.recent_limit);
            println!(
                "{}",
                cli::format_today(&overview, store.language(), config.time_pattern())
            );
            Ok(())
        }
        Commands::Past => {
            let config = Config::load_from_dir(&storage.root)?;
            let store = EmotionJournalStore::load(storage);
            let days = ReviewService::new(&store).past(Local::now().date_naive());
            println!(
                "{}",
                cli::format_past(&days, store.language(), config.time_pattern())
            );
            Ok(())
        }
        Commands::Language { code } => {
            let language = Language::from_str(&code)?;
            let mut store = EmotionJournalStore::load(storage);
            SettingsService::new(&mut store).change_language(language)?;
            println!("Language set to {} ({})", language.native_name(), language);
            Ok(())
        }
        Commands::Emotions => {
            let store = EmotionJournalStore::load(storage);
            print!("{}", cli::format_emotions(store.language()));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(storage.root);

            if list {
                let config = service.list()?;
                println!("recent_limit = {}", config.recent_limit);
                println!("time_format = {}", config.time_format);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: recent_limit, time_format");
                Ok(())
            }
        }
    }
}
