//! The ratings dataset for the lifetime of the process.
//!
//! The catalog performs a one-shot load through a [`RatingsSource`], keeps
//! the mapped items as the base collection and answers view, summary and
//! spotlight queries from it. A failed fetch leaves an empty dataset in the
//! `Failed` state; nothing retries on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::models::{ColumnLayout, RatingItem, map_rows};
use crate::parser::decode;
use crate::services::source::RatingsSource;
use crate::services::spotlight::select_spotlight;
use crate::services::stats::RatingsSummary;
use crate::services::view::{ViewState, derive_view};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("A ratings load is already in progress")]
    LoadInProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub state: LoadState,
    pub count: usize,
    pub layout: Option<ColumnLayout>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStatus {
    pub state: LoadState,
    pub loading: bool,
    pub count: usize,
    pub generation: u64,
    pub layout: Option<ColumnLayout>,
    pub source: String,
    pub last_error: Option<String>,
}

struct Dataset {
    state: LoadState,
    items: Arc<Vec<RatingItem>>,
    layout: Option<ColumnLayout>,
    summary: Arc<RatingsSummary>,
    spotlight: Option<RatingItem>,
    generation: u64,
    last_error: Option<String>,
}

impl Dataset {
    fn empty(state: LoadState, generation: u64) -> Self {
        Self {
            state,
            items: Arc::new(Vec::new()),
            layout: None,
            summary: Arc::new(RatingsSummary::from_items(&[])),
            spotlight: None,
            generation,
            last_error: None,
        }
    }
}

struct CachedView {
    generation: u64,
    state: ViewState,
    items: Arc<Vec<RatingItem>>,
}

pub struct RatingsCatalog {
    source: Arc<dyn RatingsSource>,
    layout_override: Option<ColumnLayout>,
    spotlight_min_score: i32,
    dataset: RwLock<Dataset>,
    view_cache: Mutex<Option<CachedView>>,
    load_guard: tokio::sync::Mutex<()>,
}

impl RatingsCatalog {
    #[must_use]
    pub fn new(
        source: Arc<dyn RatingsSource>,
        layout_override: Option<ColumnLayout>,
        spotlight_min_score: i32,
    ) -> Self {
        Self {
            source,
            layout_override,
            spotlight_min_score,
            dataset: RwLock::new(Dataset::empty(LoadState::Loading, 0)),
            view_cache: Mutex::new(None),
            load_guard: tokio::sync::Mutex::new(()),
        }
    }

    /// Loads the dataset once, picking the spotlight from OS entropy.
    pub async fn load(&self) -> LoadReport {
        self.load_with_rng(&mut StdRng::from_os_rng()).await
    }

    pub async fn load_with_rng<R: Rng + Send>(&self, rng: &mut R) -> LoadReport {
        let _guard = self.load_guard.lock().await;
        self.load_locked(rng).await
    }

    /// Operator-triggered reload. Refuses to overlap a running load.
    pub async fn reload(&self) -> Result<LoadReport, CatalogError> {
        let _guard = self
            .load_guard
            .try_lock()
            .map_err(|_| CatalogError::LoadInProgress)?;
        Ok(self.load_locked(&mut StdRng::from_os_rng()).await)
    }

    async fn load_locked<R: Rng + Send>(&self, rng: &mut R) -> LoadReport {
        let source = self.source.describe();
        let generation = {
            let mut dataset = self.dataset.write().await;
            dataset.state = LoadState::Loading;
            dataset.generation
        } + 1;

        let next = match self.source.fetch().await {
            Ok(text) => {
                let rows = decode(&text);
                let (layout, items) = map_rows(&rows, self.layout_override);
                let spotlight =
                    select_spotlight(&items, self.spotlight_min_score, rng).cloned();

                info!(
                    source = %source,
                    layout = %layout,
                    rows = rows.len().saturating_sub(1),
                    count = items.len(),
                    "Loaded ratings"
                );
                metrics::counter!("ratings_loaded_total").increment(1);

                Dataset {
                    state: LoadState::Ready,
                    summary: Arc::new(RatingsSummary::from_items(&items)),
                    items: Arc::new(items),
                    layout: Some(layout),
                    spotlight,
                    generation,
                    last_error: None,
                }
            }
            Err(e) => {
                error!(source = %source, error = %e, "Error loading CSV");
                metrics::counter!("ratings_load_failures_total").increment(1);

                let mut failed = Dataset::empty(LoadState::Failed, generation);
                failed.last_error = Some(e.to_string());
                failed
            }
        };

        let report = LoadReport {
            state: next.state,
            count: next.items.len(),
            layout: next.layout,
            source,
        };

        *self.dataset.write().await = next;
        self.view_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        report
    }

    /// Derived view for `state`. The last result is cached per dataset
    /// generation.
    pub async fn view(&self, state: &ViewState) -> Arc<Vec<RatingItem>> {
        let dataset = self.dataset.read().await;
        let mut cache = self
            .view_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = cache.as_ref()
            && cached.generation == dataset.generation
            && cached.state == *state
        {
            return Arc::clone(&cached.items);
        }

        let items = Arc::new(derive_view(&dataset.items, state));
        *cache = Some(CachedView {
            generation: dataset.generation,
            state: state.clone(),
            items: Arc::clone(&items),
        });
        items
    }

    pub async fn items(&self) -> Arc<Vec<RatingItem>> {
        Arc::clone(&self.dataset.read().await.items)
    }

    pub async fn summary(&self) -> Arc<RatingsSummary> {
        Arc::clone(&self.dataset.read().await.summary)
    }

    pub async fn spotlight(&self) -> Option<RatingItem> {
        self.dataset.read().await.spotlight.clone()
    }

    pub async fn status(&self) -> CatalogStatus {
        let dataset = self.dataset.read().await;
        CatalogStatus {
            state: dataset.state,
            loading: dataset.state == LoadState::Loading,
            count: dataset.items.len(),
            generation: dataset.generation,
            layout: dataset.layout,
            source: self.source.describe(),
            last_error: dataset.last_error.clone(),
        }
    }

    pub async fn is_loading(&self) -> bool {
        self.dataset.read().await.state == LoadState::Loading
    }
}
