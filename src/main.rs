use stockcast::application::client::PredictionClient;
use stockcast::application::predictor::PredictorApp;
use stockcast::application::system::Application;
use stockcast::config::Config;
use stockcast::interfaces::design_system::DesignSystem;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // 1. Setup Logging (stdout only; failures never reach the UI)
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Initializing Stockcast...");

    // 2. Create Tokio Runtime in a background thread. The UI owns the
    // main thread, so the async side lives on its own runtime and
    // hands its channel ends back over a bounded channel.
    let (system_tx, system_rx) = crossbeam_channel::bounded(1);

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to build Tokio runtime");

        rt.block_on(async move {
            info!("Background runtime started.");

            let config = match Config::from_env() {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!("Failed to load config: {}", e);
                    return;
                }
            };

            let app = match Application::build(config) {
                Ok(app) => app,
                Err(e) => {
                    tracing::error!("Failed to build application: {}", e);
                    return;
                }
            };

            let handle = app.start();
            let _ = system_tx.send(handle);

            // start() detached the worker task; keep the runtime alive
            // for it.
            std::future::pending::<()>().await;
        });
    });

    // 3. Wait for the system handle before launching the UI
    let system_handle = system_rx
        .recv()
        .expect("Background system thread exited before handing over its channels");
    info!("System connected. Launching UI.");

    let client = PredictionClient::new(system_handle);
    let app = PredictorApp::new(client);

    // 4. Run UI (blocks the main thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 680.0])
            .with_title("Stock Price Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Price Predictor",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
