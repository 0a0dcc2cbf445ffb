//! Error types for setup operations.
//!
//! The drag core itself has no fatal conditions - unrecognized events and
//! redundant unsubscriptions are silent no-ops by design. Errors exist only
//! at setup, where misconfiguration should fail loudly.

use crate::types::ElementId;
use thiserror::Error;

/// Errors that can occur while setting up the instance registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The same element was handed to setup twice.
    #[error("{0} is already registered as draggable")]
    AlreadyRegistered(ElementId),
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
