//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use lead_scout::adapters::ai::{GeminiAdapter, MockSearchAdapter};
use lead_scout::adapters::export::FsExporter;
use lead_scout::adapters::ui::tui::TuiInputPort;
use lead_scout::ports::{ExportPort, GroundedSearchPort, InputPort};
use lead_scout::shared::config::AppConfig;
use lead_scout::usecases::{ExportService, LeadSearchService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // Logs go to stderr at warn by default so prompts stay readable; raise with RUST_LOG
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    lead_scout::adapters::ui::init_ui();

    // --- Generative search adapter ---
    let ai: Arc<dyn GroundedSearchPort> = if cfg.use_mock_ai() {
        warn!("LEAD_SCOUT_MOCK_AI set, using mock search adapter");
        Arc::new(MockSearchAdapter::new())
    } else {
        let api_key = cfg.api_key();
        if api_key.is_none() {
            // Not fatal at startup: each search reports the missing key
            warn!("LEAD_SCOUT_API_KEY is not set; searches will fail until it is configured");
        }
        info!(
            model = %cfg.model_or_default(),
            url = %cfg.api_url_or_default(),
            "Gemini search grounding enabled"
        );
        Arc::new(GeminiAdapter::new(
            cfg.api_url_or_default(),
            api_key,
            cfg.model_or_default(),
        ))
    };

    // --- Export sink ---
    let export_dir = PathBuf::from(cfg.export_dir_or_default());
    info!(path = %export_dir.display(), quoting = ?cfg.csv_quoting_or_default(), "export directory");
    let sink: Arc<dyn ExportPort> = Arc::new(FsExporter::new(&export_dir));

    // --- Services ---
    let search_service = Arc::new(LeadSearchService::new(ai));
    let export_service = Arc::new(ExportService::new(sink, cfg.csv_quoting_or_default()));

    let input_port: Arc<dyn InputPort> =
        Arc::new(TuiInputPort::new(search_service, export_service));

    // --- Run (menu -> edit inputs / Find / Export CSV) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
