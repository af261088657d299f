//! Error types
//!
//! Everything the spawn controller can surface to its host.

use thiserror::Error;

use crate::data::SpawnPeriod;

/// Errors raised by the spawn controller and its collaborators
#[derive(Debug, Error)]
pub enum SpawnError {
    /// A template bucket is empty, so the phase it serves can never spawn
    #[error("no spawn templates are tagged for the {period} period")]
    ConfigurationGap { period: SpawnPeriod },

    /// The world query service failed
    #[error("world query failed: {0}")]
    WorldQuery(String),

    /// The entity lifecycle service could not build an entity
    #[error("entity creation failed for template '{template}': {reason}")]
    EntityCreation { template: String, reason: String },

    /// Invalid or unreadable configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SpawnError {
    /// True for errors that mean the templates on disk need fixing
    pub fn is_configuration(&self) -> bool {
        matches!(self, SpawnError::ConfigurationGap { .. } | SpawnError::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, SpawnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_gap_message() {
        let err = SpawnError::ConfigurationGap { period: SpawnPeriod::Night };
        assert_eq!(err.to_string(), "no spawn templates are tagged for the NIGHT period");
        assert!(err.is_configuration());
    }

    #[test]
    fn test_world_query_is_not_configuration() {
        let err = SpawnError::WorldQuery("chunk store offline".to_string());
        assert!(!err.is_configuration());
        assert_eq!(err.to_string(), "world query failed: chunk store offline");
    }
}
