use crate::catalog::{Catalog, CatalogError};
use crate::chef::{ChefConcierge, ChefError, GeminiModel, RecommendationModel};
use crate::clients::SessionClient;
use crate::framework::ActorClient;
use crate::config::{AppConfig, ConfigError, SessionConfig};
use crate::session_actor::{self, SessionContext};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Chef(#[from] ChefError),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The runtime orchestrator for the ordering core.
///
/// `RestaurantSystem` owns:
/// - the session actor (started on construction) and the [`SessionClient`] views use,
/// - the shared menu [`Catalog`],
/// - the chef model, when one is configured.
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(SessionConfig::default(), Catalog::default_menu())?;
/// let session = system.sessions.open_session(None).await?;
/// system.sessions.add_item(session, dish).await?;
/// system.sessions.place_order(session).await?;
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the Session actor
    pub sessions: SessionClient,

    pub catalog: Arc<Catalog>,

    chef: Option<(Arc<dyn RecommendationModel>, Duration)>,

    handle: tokio::task::JoinHandle<()>,
}

impl RestaurantSystem {
    /// Starts the session actor. Must be called inside a Tokio runtime.
    ///
    /// Fails without spawning anything if `config` does not validate.
    pub fn new(config: SessionConfig, catalog: Catalog) -> Result<Self, SystemError> {
        config.validate()?;

        // 1. Create the actor (no dependencies yet)
        let (actor, client) = session_actor::new(config.actor_buffer);

        // 2. Late-bind its context: a weak handle back to itself for the trackers
        let context = SessionContext::new(client.downgrade(), config)?;
        let handle = tokio::spawn(actor.run(context));

        Ok(Self {
            sessions: SessionClient::new(client),
            catalog: Arc::new(catalog),
            chef: None,
            handle,
        })
    }

    /// Builds the whole system from configuration: catalog file or built-in menu, and the
    /// Gemini chef when an API key is set.
    pub fn from_config(config: AppConfig) -> Result<Self, SystemError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::default_menu(),
        };
        let chef = GeminiModel::from_config(&config.chef)?;
        if chef.is_none() {
            info!("GEMINI_API_KEY not set, chef disabled");
        }

        let mut system = Self::new(config.session, catalog)?;
        if let Some(model) = chef {
            system = system.with_chef(Arc::new(model), config.chef.timeout);
        }
        Ok(system)
    }

    pub fn with_chef(mut self, model: Arc<dyn RecommendationModel>, timeout: Duration) -> Self {
        self.chef = Some((model, timeout));
        self
    }

    /// A fresh chef conversation, or `None` if no model is configured.
    pub fn concierge(&self) -> Option<ChefConcierge> {
        self.chef.as_ref().map(|(model, timeout)| {
            ChefConcierge::new(model.clone(), self.catalog.clone(), *timeout)
        })
    }

    /// Gracefully shuts down the session actor.
    ///
    /// The actor answers what is already queued, aborts every remaining tracker and exits.
    /// Clones of [`SessionClient`] held elsewhere do not delay this; their later calls fail
    /// with `ActorCommunicationError`.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        if let Err(e) = self.sessions.inner().shutdown().await {
            // already stopped; joining the task below still reports how it ended
            debug!(error = %e, "Shutdown request not delivered");
        }
        drop(self.sessions);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(SystemError::ActorTask(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
