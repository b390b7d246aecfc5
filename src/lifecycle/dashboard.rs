use std::sync::Arc;
use tracing::{error, info};

use crate::clients::RecordStoreClient;
use crate::config::DashboardConfig;
use crate::controller::InteractionController;
use crate::directory::DirectoryService;
use crate::framework::FrameworkError;

/// The runtime orchestrator for one dashboard session.
///
/// `DashboardSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the record store actor
/// - **Dependency Wiring**: handing the directory service to the store client
/// - **Controller Construction**: building controllers that share the store
///
/// Nothing here is global: several systems can run side by side, each with its own
/// store and directory.
///
/// # Example
///
/// ```ignore
/// let directory = Arc::new(HttpDirectory::new(&config.base_url)?);
/// let system = DashboardSystem::new(directory, &config);
///
/// let mut controller = system.controller();
/// controller.start().await.settled().await?;
/// println!("{}", controller.view());
///
/// drop(controller);
/// system.shutdown().await?;
/// ```
pub struct DashboardSystem {
    /// Client for the record store actor
    pub store: RecordStoreClient,

    page_size: usize,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl DashboardSystem {
    /// Creates the record store and spawns its actor on the current Tokio runtime.
    pub fn new(directory: Arc<dyn DirectoryService>, config: &DashboardConfig) -> Self {
        let (actor, store) = crate::record_store::new(config.channel_buffer, directory);
        let handle = tokio::spawn(actor.run());

        Self {
            store,
            page_size: config.page_size,
            handle,
        }
    }

    /// A fresh controller (default navigation state) over this system's store.
    pub fn controller(&self) -> InteractionController {
        InteractionController::new(self.store.clone(), self.page_size)
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client and waits for the actor to exit. The actor only exits
    /// once *every* clone of the client is gone, so drop controllers first; operations
    /// still in flight finish before the actor stops.
    pub async fn shutdown(self) -> Result<(), FrameworkError> {
        info!("Shutting down dashboard...");
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Record store task failed: {:?}", e);
            return Err(FrameworkError::TaskFailed(e.to_string()));
        }

        info!("Dashboard shutdown complete.");
        Ok(())
    }
}
