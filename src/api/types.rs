//! Shared types for the API layer.

use std::sync::Arc;

use crate::simulation::RecoveryModel;

/// Shared context for all API routes.
///
/// Holds only immutable data; per-request form state travels in the
/// request body.
#[derive(Clone, Default)]
pub struct ApiContext {
    pub model: Arc<RecoveryModel>,
}

impl ApiContext {
    pub fn new(model: RecoveryModel) -> Self {
        Self {
            model: Arc::new(model),
        }
    }
}
