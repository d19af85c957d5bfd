use clap::Parser;
use std::sync::Arc;
use venue_finder::app::render::{JsonRenderer, Renderer, TextRenderer};
use venue_finder::core::session::SessionEvent;
use venue_finder::utils::{logger, validation::Validate};
use venue_finder::{
    AppConfig, CapacityBracket, CliArgs, NominatimGeocoder, SearchController, SearchEngine,
    SearchMode, VenueCatalog, VenueError,
};

fn exit_with(e: VenueError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 載入配置，未指定時使用預設值
    let mut config = match args.config.as_deref() {
        Some(path) => AppConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("❌ Failed to load config file '{}': {}", path, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }),
        None => AppConfig::default(),
    };

    if let Some(endpoint) = args.endpoint.clone() {
        config.geocoder.endpoint = endpoint;
    }

    if config.logging.json {
        logger::init_json_logger(args.verbose, &config.logging.level);
    } else {
        logger::init_cli_logger(args.verbose, &config.logging.level);
    }

    if let Err(e) = config.validate() {
        exit_with(e);
    }
    tracing::debug!("Config: {:?}", config);

    let renderer: Box<dyn Renderer> = if args.json {
        Box::new(JsonRenderer { pretty: true })
    } else {
        Box::new(TextRenderer)
    };

    let catalog = VenueCatalog::sample();

    if let Some(id) = args.details {
        let venue = catalog
            .get(id)
            .cloned()
            .unwrap_or_else(|| exit_with(VenueError::VenueNotFound { id }));
        let output = if args.json {
            serde_json::to_string_pretty(&venue)?
        } else {
            TextRenderer.details(&venue)
        };
        println!("{}", output);
        return Ok(());
    }

    let mode = match args.mode.as_deref() {
        Some(raw) => raw.parse::<SearchMode>().unwrap_or_else(|e| exit_with(e)),
        None => config.search.default_mode,
    };
    let capacity = CapacityBracket::parse_optional(args.capacity.as_deref().unwrap_or_default())
        .unwrap_or_else(|e| exit_with(e));

    let geocoder = NominatimGeocoder::new(&config.geocoder).unwrap_or_else(|e| exit_with(e));
    let engine = SearchEngine::new(catalog, geocoder, config.search_policy());
    let controller = SearchController::new(Arc::new(engine));

    controller.dispatch(SessionEvent::SwitchMode(mode)).await;
    controller
        .dispatch(SessionEvent::EditTerm(args.term.unwrap_or_default()))
        .await;
    controller
        .dispatch(SessionEvent::SelectCapacity(capacity))
        .await;

    let outcome = controller.submit().await;
    println!("{}", renderer.render(&outcome.venues)?);

    Ok(())
}
