//! Shared, read-only application state handed to every handler.

use std::sync::Arc;

use crate::core::StopwordSet;

/// State shared across requests. The stopword set is loaded once at
/// startup and is immutable afterward, so it's safe to share by reference
/// across concurrently running analyses (spec.md §5).
#[derive(Clone)]
pub struct AppState {
    pub stopwords: Arc<StopwordSet>,
}
