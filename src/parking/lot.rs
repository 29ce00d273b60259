//! A parking lot driving a gate controller.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use super::config::ParkingLotConfig;
use super::error::ParkingError;
use super::spot::SpotManager;
use super::ticket::{Ticket, TicketKind};
use super::vehicle::Vehicle;
use crate::bus::EventBus;
use crate::controller::gate::{self, GateState};
use crate::controller::Controller;
use crate::core::StateHistory;

/// Announcement broadcast when a vehicle is turned away.
pub const LOT_FULL_MESSAGE: &str = "No available spots. Entry denied.";

struct LotInner {
    spots: SpotManager,
    tickets: HashMap<Uuid, Ticket>,
}

/// Parking lot with one gate, a set of spots and the tickets issued for them.
///
/// The lot's gate controller broadcasts on the same bus as the lot, so a
/// subscriber sees the gate transitions interleaved with the lot's own
/// announcements:
///
/// ```text
/// CLOSED->OPENING
/// OPENING->OPEN
/// Car with license plate ABC123 entered. Spot assigned: 1.
/// OPEN->CLOSING
/// CLOSING->CLOSED
/// ```
///
/// # Thread Safety
///
/// Entries and exits are serialized; each one holds the passage lock while
/// the gate cycles. Subscribers may read the lot (`free_spots`, `occupied`,
/// `is_parked`) from inside a notification. They must not call `enter`,
/// `exit`, `gate_state` or `gate_history` there: gate transitions are
/// broadcast while the gate's own lock is held.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use signalbox::bus::EventBus;
/// use signalbox::parking::{ParkingLot, ParkingLotConfig};
/// use std::sync::Arc;
///
/// let lot = ParkingLot::new(ParkingLotConfig::default(), Arc::new(EventBus::new())).unwrap();
///
/// let ticket = lot.enter("car", "ABC123", Utc::now()).unwrap();
/// assert_eq!(lot.free_spots(), 49);
///
/// lot.exit(&ticket).unwrap();
/// assert_eq!(lot.free_spots(), 50);
/// ```
pub struct ParkingLot {
    gate: Controller<GateState>,
    bus: Arc<EventBus>,
    passage: Mutex<()>,
    inner: Mutex<LotInner>,
}

impl ParkingLot {
    pub fn new(config: ParkingLotConfig, bus: Arc<EventBus>) -> Result<Self, ParkingError> {
        config.validate()?;

        tracing::debug!(
            capacity = config.capacity,
            reserved = config.reserved_spots,
            "Opening parking lot"
        );

        Ok(Self {
            gate: gate::controller_with_history(config.gate_history_limit)
                .with_bus(Arc::clone(&bus)),
            bus,
            passage: Mutex::new(()),
            inner: Mutex::new(LotInner {
                spots: SpotManager::from_config(&config),
                tickets: HashMap::new(),
            }),
        })
    }

    /// Admit a vehicle and issue its ticket.
    ///
    /// `kind` is a lowercase vehicle name (`"car"`, `"motorcycle"`,
    /// `"truck"`). A full lot announces [`LOT_FULL_MESSAGE`] and leaves the
    /// gate closed.
    pub fn enter(
        &self,
        kind: &str,
        license_plate: &str,
        entry_time: DateTime<Utc>,
    ) -> Result<Ticket, ParkingError> {
        let vehicle = Vehicle::parse(kind, license_plate)?;
        let _passage = self.passage.lock();

        let ticket = {
            let mut inner = self.inner.lock();
            if inner
                .tickets
                .values()
                .any(|t| t.license_plate() == vehicle.license_plate)
            {
                return Err(ParkingError::AlreadyParked(vehicle.license_plate));
            }

            let Some(spot) = inner.spots.allocate() else {
                drop(inner);
                tracing::info!(plate = %vehicle.license_plate, "Entry denied, lot is full");
                self.bus.broadcast(LOT_FULL_MESSAGE);
                return Err(ParkingError::LotFull);
            };

            let ticket = match Ticket::builder()
                .license_plate(vehicle.license_plate.as_str())
                .vehicle(vehicle.kind)
                .kind(TicketKind::Standard)
                .entry_time(entry_time)
                .spot(spot)
                .build()
            {
                Ok(ticket) => ticket,
                Err(e) => {
                    inner.spots.release(spot);
                    return Err(e);
                }
            };
            inner.tickets.insert(ticket.id(), ticket.clone());
            ticket
        };

        let announcement = format!(
            "{} with license plate {} entered. Spot assigned: {}.",
            vehicle.kind.label(),
            ticket.license_plate(),
            ticket.spot()
        );
        let mut admitted = false;
        let passed = gate::pass_vehicle(&self.gate, || {
            admitted = true;
            self.bus.broadcast(&announcement);
        });

        if let Err(e) = passed {
            if !admitted {
                let mut inner = self.inner.lock();
                inner.tickets.remove(&ticket.id());
                inner.spots.release(ticket.spot());
            }
            tracing::warn!(plate = %ticket.license_plate(), error = %e, "Gate failed during entry");
            return Err(e.into());
        }

        tracing::info!(
            plate = %ticket.license_plate(),
            spot = ticket.spot(),
            ticket = %ticket.id(),
            "Vehicle entered"
        );

        Ok(ticket)
    }

    /// Let the holder of `ticket` out and free its spot.
    pub fn exit(&self, ticket: &Ticket) -> Result<(), ParkingError> {
        let _passage = self.passage.lock();

        // Spot and plate come from the issued ticket, not the presented copy.
        let Some(issued) = self.inner.lock().tickets.get(&ticket.id()).cloned() else {
            return Err(ParkingError::UnknownTicket(ticket.id()));
        };

        let announcement = format!(
            "Vehicle with license plate {} exited. Spot {} is now available.",
            issued.license_plate(),
            issued.spot()
        );
        gate::pass_vehicle(&self.gate, || {
            {
                let mut inner = self.inner.lock();
                if let Some(issued) = inner.tickets.remove(&issued.id()) {
                    inner.spots.release(issued.spot());
                }
            }
            self.bus.broadcast(&announcement);
        })?;

        tracing::info!(
            plate = %issued.license_plate(),
            spot = issued.spot(),
            "Vehicle exited"
        );

        Ok(())
    }

    #[must_use]
    pub fn free_spots(&self) -> usize {
        self.inner.lock().spots.free_spots()
    }

    #[must_use]
    pub fn occupied(&self) -> usize {
        self.inner.lock().spots.occupied()
    }

    pub fn is_parked(&self, license_plate: &str) -> bool {
        self.inner
            .lock()
            .tickets
            .values()
            .any(|t| t.license_plate() == license_plate)
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.current_state()
    }

    /// Most recent gate transitions, bounded by the configured limit.
    pub fn gate_history(&self) -> StateHistory<GateState> {
        self.gate.history()
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }
}
