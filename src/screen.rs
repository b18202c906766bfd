//! Per-screen state slots.
//!
//! Each screen owns one [`LoadState`] and fetches exactly once per
//! activation. The fetch can run inline via `activate`, or be split into
//! [`begin`](ListScreen::begin) and [`publish`](ListScreen::publish) when the
//! result arrives later (for example from `AsyncStorefront` with the `async`
//! feature). Whatever is published last replaces the slot.

use crate::error::{ErrorKind, Result, StorefrontError};
use crate::models::{DetailViewModel, ListItemViewModel};
use crate::navigation::Route;
use crate::StorefrontSdk;

// ---------------------------------------------------------------------------
// LoadState
// ---------------------------------------------------------------------------

/// Snapshot of a failed fetch, kept in screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&StorefrontError> for LoadFailure {
    fn from(e: &StorefrontError) -> Self {
        Self {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    NotStarted,
    Loading,
    Ready(T),
    Failed(LoadFailure),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::NotStarted
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            LoadState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Move `NotStarted` to `Loading`. Returns `false` if a fetch was already
    /// started for this activation.
    fn begin(&mut self) -> bool {
        if matches!(self, LoadState::NotStarted) {
            *self = LoadState::Loading;
            true
        } else {
            false
        }
    }

    fn publish(&mut self, screen: &'static str, result: Result<T>) {
        *self = match result {
            Ok(data) => LoadState::Ready(data),
            Err(e) => {
                tracing::warn!(screen, error = %e, "fetch failed");
                LoadState::Failed(LoadFailure::from(&e))
            }
        };
    }
}

// ---------------------------------------------------------------------------
// ListScreen
// ---------------------------------------------------------------------------

/// State of the catalog list destination.
#[derive(Debug, Default)]
pub struct ListScreen {
    state: LoadState<Vec<ListItemViewModel>>,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<Vec<ListItemViewModel>> {
        &self.state
    }

    /// Rows to render; empty until the catalog is ready.
    pub fn items(&self) -> &[ListItemViewModel] {
        self.state.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn begin(&mut self) -> bool {
        self.state.begin()
    }

    pub fn publish(&mut self, result: Result<Vec<ListItemViewModel>>) {
        self.state.publish("list", result);
    }

    /// Fetch the catalog if this activation has not done so yet.
    pub fn activate(&mut self, sdk: &StorefrontSdk) {
        if self.begin() {
            let result = sdk.catalog().fetch();
            self.publish(result);
        }
    }

    /// Route to the detail destination for the row with `id`.
    pub fn select(&self, id: i64) -> Option<Route> {
        self.items()
            .iter()
            .find(|item| item.id == id)
            .map(|item| Route::detail(item.id, item.title.clone()))
    }
}

// ---------------------------------------------------------------------------
// DetailScreen
// ---------------------------------------------------------------------------

/// State of the product detail destination.
#[derive(Debug)]
pub struct DetailScreen {
    item_id: i64,
    item_title: String,
    state: LoadState<DetailViewModel>,
}

impl DetailScreen {
    pub fn new(item_id: i64, item_title: impl Into<String>) -> Self {
        Self {
            item_id,
            item_title: item_title.into(),
            state: LoadState::NotStarted,
        }
    }

    /// Build the screen from a route. Any non-detail route opens the
    /// default detail parameters.
    pub fn from_route(route: &Route) -> Self {
        match route {
            Route::Detail {
                item_id,
                item_title,
            } => Self::new(*item_id, item_title.clone()),
            Route::List => Self::from_route(&Route::detail_default()),
        }
    }

    pub fn item_id(&self) -> i64 {
        self.item_id
    }

    /// Header title passed in by navigation. Not used for fetching.
    pub fn title(&self) -> &str {
        &self.item_title
    }

    pub fn state(&self) -> &LoadState<DetailViewModel> {
        &self.state
    }

    /// The product, absent until the fetch succeeds.
    pub fn detail(&self) -> Option<&DetailViewModel> {
        self.state.data()
    }

    pub fn begin(&mut self) -> bool {
        self.state.begin()
    }

    pub fn publish(&mut self, result: Result<DetailViewModel>) {
        self.state.publish("detail", result);
    }

    /// Fetch the product if this activation has not done so yet.
    pub fn activate(&mut self, sdk: &StorefrontSdk) {
        if self.begin() {
            let result = sdk.detail().fetch(self.item_id);
            self.publish(result);
        }
    }

    /// There is no cart yet; the press is only logged.
    pub fn add_to_cart(&self) {
        tracing::info!(item_id = self.item_id, "Add to cart pressed");
    }
}
