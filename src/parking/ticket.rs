//! Parking tickets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ParkingError;
use super::vehicle::VehicleKind;

/// Class of ticket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketKind {
    #[default]
    Standard,
    Vip,
}

/// Proof of entry handed to a vehicle, required to leave.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    id: Uuid,
    license_plate: String,
    vehicle: VehicleKind,
    kind: TicketKind,
    entry_time: DateTime<Utc>,
    spot: u32,
}

impl Ticket {
    #[must_use]
    pub fn builder() -> TicketBuilder {
        TicketBuilder::new()
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    #[must_use]
    pub fn vehicle(&self) -> VehicleKind {
        self.vehicle
    }

    #[must_use]
    pub fn kind(&self) -> TicketKind {
        self.kind
    }

    /// Entry time as supplied by the caller.
    #[must_use]
    pub fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }

    /// Number of the spot assigned on entry.
    #[must_use]
    pub fn spot(&self) -> u32 {
        self.spot
    }
}

/// Builder for [`Ticket`]s.
///
/// Every field except the ticket kind is required; the kind defaults to
/// [`TicketKind::Standard`]. Each built ticket gets a fresh random id.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use signalbox::parking::{Ticket, TicketKind, VehicleKind};
///
/// let ticket = Ticket::builder()
///     .license_plate("ABC123")
///     .vehicle(VehicleKind::Car)
///     .entry_time(Utc.with_ymd_and_hms(2024, 11, 10, 10, 0, 0).unwrap())
///     .spot(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(ticket.kind(), TicketKind::Standard);
/// assert_eq!(ticket.spot(), 42);
/// ```
#[derive(Debug, Default)]
pub struct TicketBuilder {
    license_plate: Option<String>,
    vehicle: Option<VehicleKind>,
    kind: TicketKind,
    entry_time: Option<DateTime<Utc>>,
    spot: Option<u32>,
}

impl TicketBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn license_plate(mut self, license_plate: impl Into<String>) -> Self {
        self.license_plate = Some(license_plate.into());
        self
    }

    #[must_use]
    pub fn vehicle(mut self, vehicle: VehicleKind) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: TicketKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn entry_time(mut self, entry_time: DateTime<Utc>) -> Self {
        self.entry_time = Some(entry_time);
        self
    }

    #[must_use]
    pub fn spot(mut self, spot: u32) -> Self {
        self.spot = Some(spot);
        self
    }

    pub fn build(self) -> Result<Ticket, ParkingError> {
        Ok(Ticket {
            id: Uuid::new_v4(),
            license_plate: self
                .license_plate
                .ok_or(ParkingError::MissingTicketField("license_plate"))?,
            vehicle: self
                .vehicle
                .ok_or(ParkingError::MissingTicketField("vehicle"))?,
            kind: self.kind,
            entry_time: self
                .entry_time
                .ok_or(ParkingError::MissingTicketField("entry_time"))?,
            spot: self.spot.ok_or(ParkingError::MissingTicketField("spot"))?,
        })
    }
}
