use std::sync::Arc;

use crate::adapters;
use crate::ports::{AlertPort, LoggerPort, RemovalPort};

/// Platform container wiring the dismissal flow to its collaborators.
///
/// Stateless ports are `&'static`; the alert surface and removal gateway
/// are `Arc`s so tests can swap them for scripted implementations.
#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    alerter: Arc<dyn AlertPort>,
    removal: Arc<dyn RemovalPort>,
}

impl Platform {
    /// Platform with the default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: adapters::logger(),
            alerter: adapters::default_alerter(),
            removal: adapters::default_removal(),
        }
    }

    /// Replace the alert surface.
    pub fn with_alerter(mut self, alerter: Arc<dyn AlertPort>) -> Self {
        self.alerter = alerter;
        self
    }

    /// Replace the removal gateway.
    pub fn with_removal(mut self, removal: Arc<dyn RemovalPort>) -> Self {
        self.removal = removal;
        self
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    pub fn alerter(&self) -> &dyn AlertPort {
        self.alerter.as_ref()
    }

    pub fn removal(&self) -> &dyn RemovalPort {
        self.removal.as_ref()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
