use std::sync::Arc;

use crate::{config::Environment, services::Dataset};

/// Read-only context shared by every request
#[derive(Clone)]
pub struct AppState {
    dataset: Arc<Dataset>,
    environment: Environment,
}

impl AppState {
    pub fn new(dataset: Dataset, environment: Environment) -> Self {
        Self {
            dataset: Arc::new(dataset),
            environment,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }
}
