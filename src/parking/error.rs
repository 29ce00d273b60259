//! Parking lot and configuration errors.

use thiserror::Error;
use uuid::Uuid;

use crate::machine::MachineError;

/// Errors raised by parking lot operations.
#[derive(Debug, Error)]
pub enum ParkingError {
    #[error("Unknown vehicle type: {0}")]
    UnknownVehicleKind(String),

    #[error("No available spots. Entry denied.")]
    LotFull,

    #[error("Vehicle with license plate {0} is already parked")]
    AlreadyParked(String),

    #[error("Ticket {0} was not issued by this lot or has already been used")]
    UnknownTicket(Uuid),

    #[error("Ticket field '{0}' not specified")]
    MissingTicketField(&'static str),

    #[error("Gate failure: {0}")]
    Gate(#[from] MachineError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or checking a lot configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(String),
}
