use crate::store::CatalogStore;
use anyhow::Result;
use cakecalc_pricing::{config, RateCard};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// AppState — shared resources for the API service: env config, the rate
// card behind the preview estimator, and the catalog store.
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct Config {
    /// Optional YAML file overriding the default rate card.
    pub rate_card_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            rate_card_path: std::env::var("RATE_CARD_PATH").ok(),
        }
    }
}

pub struct AppState {
    pub cfg: Config,
    pub rates: RateCard,
    pub store: CatalogStore,
}

impl AppState {
    pub fn new() -> Result<Arc<Self>> {
        let cfg = Config::from_env();
        let rates = match &cfg.rate_card_path {
            Some(path) => {
                let card = config::load_rate_card(path)?;
                tracing::info!(%path, "rate card loaded");
                card
            }
            None => RateCard::default(),
        };
        Ok(Arc::new(Self {
            cfg,
            rates,
            store: CatalogStore::default(),
        }))
    }
}
