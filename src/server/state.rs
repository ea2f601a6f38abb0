//! Shared state for the REST API handlers.

use crate::services::LibraryService;
use std::sync::Arc;

/// State handed to every handler.
#[derive(Clone)]
pub struct ApiState {
    pub library: Arc<dyn LibraryService>,
}

impl ApiState {
    pub fn new(library: Arc<dyn LibraryService>) -> Self {
        Self { library }
    }
}
