use std::sync::Arc;

use crate::core::config::Config;
use crate::core::error::{AppError, Result};
use crate::features::assets::AssetIngestor;
use crate::features::auth::AccessGate;
use crate::features::geo::GeoProjector;
use crate::features::sync::PersistenceGateway;
use crate::modules::cache::FileCache;
use crate::modules::remote::HttpRemoteStore;

/// Installs the default tracing subscriber, honoring `RUST_LOG`. For
/// embedding applications that do not bring their own subscriber.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Fully wired engine: every service the view layers call, built from one
/// configuration and sharing one remote client.
pub struct MapCore {
    pub gateway: PersistenceGateway,
    pub assets: AssetIngestor,
    pub projector: GeoProjector,
    pub gate: AccessGate,
}

impl MapCore {
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env().map_err(AppError::Config)?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let remote = Arc::new(HttpRemoteStore::new(
            &config.api.base_url,
            config.api.read_timeout,
        )?);
        let cache = Arc::new(FileCache::new(&config.cache.dir)?);

        let gateway = PersistenceGateway::new(
            remote.clone(),
            cache,
            config.map.default_image_url.clone(),
        );
        let assets = AssetIngestor::new(remote);
        let projector = GeoProjector::new(config.map.bounds)?;
        let gate = AccessGate::new(config.access.secret.clone());

        tracing::info!(
            "Map core initialized: api={}, cache_dir={}",
            config.api.base_url,
            config.cache.dir.display()
        );

        Ok(MapCore {
            gateway,
            assets,
            projector,
            gate,
        })
    }
}
