//! CLI entrypoint for tripmate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tripmate_application::{
    BookmarksUseCase, LoadRecommendationsUseCase, LocalCatalog, NoSurveyLogger,
    PlaceDetailsLoader, PlaceDetailsUseCase, SendFeedbackUseCase, SubmitSurveyUseCase,
    SurveyLogger, SurveySession, UserLocationUseCase,
};
use tripmate_domain::{OutputFormat, Place, PlaceId};
use tripmate_infrastructure::{
    ConfigLoader, FileConfig, HttpPlaceCatalog, JsonFileStore, JsonlSurveyLogger, StaticCatalog,
};
use tripmate_presentation::{
    Cli, Command, ConsoleFormatter, JsonFormatter, OutputConfig, OutputFormatter, ReplConfig,
    SurveyRepl, formatter_for,
};

const FALLBACK_STORE_PATH: &str = ".tripmate/store.json";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    info!("Starting tripmate");

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let gateway = Arc::new(HttpPlaceCatalog::from_config(&config.api)?.with_enabled(
        config.api.enabled && !cli.offline,
    ));
    let catalog: Arc<dyn LocalCatalog> = Arc::new(StaticCatalog::seoul()?);
    let store_path = config
        .storage
        .resolved_path()
        .unwrap_or_else(|| PathBuf::from(FALLBACK_STORE_PATH));
    let store = Arc::new(JsonFileStore::open(&store_path));
    let logger = survey_logger(&config);

    match cli.subcommand() {
        Command::Survey => {
            let use_case = SubmitSurveyUseCase::new(gateway, store, catalog)
                .with_logger(logger.clone())
                .with_params(config.survey.to_survey_params());
            let session = SurveySession::default().with_logger(logger);
            let repl_config = ReplConfig {
                show_progress: !cli.quiet,
                pacing: Duration::from_millis(config.survey.pacing_ms),
                history_file: Some(store_path.with_file_name("history.txt")),
            };

            let mut repl = SurveyRepl::new(session, use_case).with_config(repl_config);
            if let Some(submitted) = repl.run().await? {
                if !submitted.persisted {
                    warn!("Recommendations were not saved; `tripmate results` will not show them");
                }
                println!("{}", formatter_for(output.format).format_results(&submitted.result));
            }
        }

        Command::Results => {
            match LoadRecommendationsUseCase::new(store).execute() {
                Some(result) => {
                    println!("{}", formatter_for(output.format).format_results(&result))
                }
                None if output.format == OutputFormat::Json => println!("null"),
                None => print!("{}", ConsoleFormatter::no_results()),
            }
        }

        Command::Place { id } => {
            let id = PlaceId::new(id);
            let loader = PlaceDetailsLoader::new(PlaceDetailsUseCase::new(gateway, catalog));
            let Some(details) = loader.load(id).await else {
                bail!("Loading place {} was cancelled", id);
            };
            let bookmarked = BookmarksUseCase::new(store).is_bookmarked(id);
            println!(
                "{}",
                formatter_for(output.format).format_details(&details, bookmarked)
            );
        }

        Command::Bookmark { id } => {
            let id = PlaceId::new(id);
            let added = BookmarksUseCase::new(store).toggle(id)?;
            match output.format {
                OutputFormat::Json => println!(
                    "{}",
                    JsonFormatter::to_json(&serde_json::json!({ "id": id, "bookmarked": added }))
                ),
                OutputFormat::Text if added => println!("❤️  {}번 장소를 북마크했어요", id),
                OutputFormat::Text => println!("🤍 {}번 장소의 북마크를 해제했어요", id),
            }
        }

        Command::Bookmarks => {
            let bookmarks = BookmarksUseCase::new(store.clone()).list();
            let last_result = LoadRecommendationsUseCase::new(store).execute();
            let details = PlaceDetailsUseCase::new(gateway, catalog.clone());

            let mut places: Vec<Place> = Vec::with_capacity(bookmarks.len());
            for &id in bookmarks.ids() {
                let known = catalog
                    .places()
                    .iter()
                    .chain(last_result.iter().flat_map(|r| r.places.iter()))
                    .find(|p| p.id == id)
                    .cloned();
                match known {
                    Some(place) => places.push(place),
                    None => places.push(details.execute(id).await.place),
                }
            }
            println!("{}", formatter_for(output.format).format_bookmarks(&places));
        }

        Command::Feedback {
            id,
            rating,
            comment,
        } => {
            let use_case = SendFeedbackUseCase::new(gateway).with_logger(logger);
            let receipt = use_case.execute(PlaceId::new(id), rating, &comment).await?;
            match output.format {
                OutputFormat::Json => println!("{}", JsonFormatter::to_json(&receipt)),
                OutputFormat::Text if receipt.success => println!("소중한 의견 감사합니다!"),
                OutputFormat::Text => println!(
                    "피드백을 보내지 못했어요: {}",
                    receipt.error.as_deref().unwrap_or("알 수 없는 오류")
                ),
            }
        }

        Command::Location { name } => {
            let location = UserLocationUseCase::new(store)
                .with_default_location(config.survey.default_location.clone());
            if let Some(name) = name {
                location.set(&name)?;
            }
            println!("📍 {}", location.get()?);
        }
    }

    Ok(())
}

/// Survey event log from `[logging]`, or a no-op logger
fn survey_logger(config: &FileConfig) -> Arc<dyn SurveyLogger> {
    let Some(path) = &config.logging.conversation_log else {
        return Arc::new(NoSurveyLogger);
    };
    match JsonlSurveyLogger::new(path) {
        Some(logger) => {
            info!("Survey events are logged to {}", logger.path().display());
            Arc::new(logger)
        }
        None => {
            warn!("Could not open survey log {}", path.display());
            Arc::new(NoSurveyLogger)
        }
    }
}
