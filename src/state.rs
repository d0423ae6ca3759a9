//! Shared application state for all routes.

use crate::schema::{build_schema, ProfileSchema};
use crate::service::ProfileService;
use crate::store::ProfileStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub schema: ProfileSchema,
    pub service: ProfileService,
}

impl AppState {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        let service = ProfileService::new(store);
        AppState {
            schema: build_schema(service.clone()),
            service,
        }
    }
}
