//! Demo: load the directory, print the first two pages, shut down.

use std::sync::Arc;

use tracing::{error, info, Instrument};
use user_dashboard::config::DashboardConfig;
use user_dashboard::directory::HttpDirectory;
use user_dashboard::lifecycle::{setup_tracing, DashboardSystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = DashboardConfig::load().map_err(|e| e.to_string())?;
    info!(base_url = %config.base_url, page_size = config.page_size, "Starting dashboard");

    let directory = HttpDirectory::new(&config.base_url).map_err(|e| e.to_string())?;
    let system = DashboardSystem::new(Arc::new(directory), &config);
    let mut controller = system.controller();

    let span = tracing::info_span!("initial_load");
    async {
        info!("Loading users");
        controller.start().await.settled().await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    println!("{}", controller.view());

    if controller.view().table().is_some() {
        controller.page_clicked(2);
        println!("{}", controller.view());
    } else {
        error!("Initial load failed, nothing to page through");
    }

    drop(controller);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Dashboard closed");
    Ok(())
}
