//! Parking lot built on the gate controller.
//!
//! Vehicles are admitted by kind name, given a [`Ticket`] naming their spot,
//! and let out again on presenting it. Every entry or exit cycles the gate
//! once; lot announcements share the gate's [`EventBus`](crate::bus::EventBus).

mod config;
mod error;
mod lot;
mod spot;
mod ticket;
mod vehicle;

pub use config::{ParkingLotConfig, DEFAULT_CAPACITY, DEFAULT_GATE_HISTORY};
pub use error::{ConfigError, ParkingError};
pub use lot::{ParkingLot, LOT_FULL_MESSAGE};
pub use spot::{ParkingSpot, SpotManager, SpotSize};
pub use ticket::{Ticket, TicketBuilder, TicketKind};
pub use vehicle::{Vehicle, VehicleKind};
