use std::sync::Arc;

use service::{carrier::RateClient, documents::DocumentService, queries::QueryService};

/// Shared handler state; every service is already backend-agnostic.
#[derive(Clone)]
pub struct AppState {
    pub rates: Arc<RateClient>,
    pub documents: Arc<DocumentService>,
    pub queries: Arc<QueryService>,
}

impl AppState {
    pub fn new(rates: RateClient, documents: DocumentService, queries: QueryService) -> Self {
        Self { rates: Arc::new(rates), documents: Arc::new(documents), queries: Arc::new(queries) }
    }
}
