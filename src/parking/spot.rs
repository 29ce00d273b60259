//! Parking spots and free-spot accounting.

use serde::{Deserialize, Serialize};

use super::config::ParkingLotConfig;

/// Physical size of a spot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// A numbered parking spot.
///
/// Lots create their spots by cloning one prototype and renumbering it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSpot {
    pub number: u32,
    pub size: SpotSize,
    pub reserved: bool,
}

impl ParkingSpot {
    #[must_use]
    pub fn new(number: u32, size: SpotSize, reserved: bool) -> Self {
        Self {
            number,
            size,
            reserved,
        }
    }

    /// Copy of this spot under another number.
    #[must_use]
    pub fn with_number(&self, number: u32) -> Self {
        Self {
            number,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_reserved(mut self, reserved: bool) -> Self {
        self.reserved = reserved;
        self
    }
}

/// Tracks which spots are taken.
///
/// Spots are numbered from 1. Reserved spots are never handed out.
/// Allocation always picks the lowest free number.
#[derive(Clone, Debug)]
pub struct SpotManager {
    spots: Vec<ParkingSpot>,
    occupied: Vec<bool>,
}

impl SpotManager {
    /// Lay out the spots described by `config`; the first
    /// `reserved_spots` numbers are reserved.
    #[must_use]
    pub fn from_config(config: &ParkingLotConfig) -> Self {
        let prototype = ParkingSpot::new(1, config.spot_size, false);
        let spots: Vec<ParkingSpot> = (1..=config.capacity)
            .map(|number| {
                prototype
                    .with_number(number)
                    .with_reserved(number <= config.reserved_spots)
            })
            .collect();
        let occupied = vec![false; spots.len()];
        Self { spots, occupied }
    }

    /// Take the lowest free unreserved spot.
    pub fn allocate(&mut self) -> Option<u32> {
        let index = self
            .spots
            .iter()
            .zip(&self.occupied)
            .position(|(spot, taken)| !spot.reserved && !taken)?;
        self.occupied[index] = true;
        Some(self.spots[index].number)
    }

    /// Free a spot. Returns `false` if it was not taken.
    pub fn release(&mut self, number: u32) -> bool {
        match self.spots.iter().position(|spot| spot.number == number) {
            Some(index) if self.occupied[index] => {
                self.occupied[index] = false;
                true
            }
            _ => false,
        }
    }

    /// Number of spots that could still be allocated.
    #[must_use]
    pub fn free_spots(&self) -> usize {
        self.spots
            .iter()
            .zip(&self.occupied)
            .filter(|(spot, taken)| !spot.reserved && !**taken)
            .count()
    }

    #[must_use]
    pub fn occupied(&self) -> usize {
        self.occupied.iter().filter(|taken| **taken).count()
    }

    #[must_use]
    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(capacity: u32, reserved: u32) -> SpotManager {
        SpotManager::from_config(
            &ParkingLotConfig::default()
                .with_capacity(capacity)
                .with_reserved_spots(reserved),
        )
    }

    #[test]
    fn clone_keeps_prototype_fields() {
        let original = ParkingSpot::new(1, SpotSize::Large, true);
        let copy = original.with_number(2).with_reserved(false);

        assert_eq!(copy.number, 2);
        assert_eq!(copy.size, SpotSize::Large);
        assert!(!copy.reserved);
        assert!(original.reserved);
    }

    #[test]
    fn allocation_takes_lowest_free_spot() {
        let mut spots = manager(3, 0);

        assert_eq!(spots.allocate(), Some(1));
        assert_eq!(spots.allocate(), Some(2));
        assert!(spots.release(1));
        assert_eq!(spots.allocate(), Some(1));
        assert_eq!(spots.free_spots(), 1);
    }

    #[test]
    fn reserved_spots_are_skipped() {
        let mut spots = manager(3, 2);

        assert_eq!(spots.free_spots(), 1);
        assert_eq!(spots.allocate(), Some(3));
        assert_eq!(spots.allocate(), None);
    }

    #[test]
    fn release_of_free_spot_is_rejected() {
        let mut spots = manager(2, 0);

        assert!(!spots.release(1));
        assert!(!spots.release(99));
        assert_eq!(spots.occupied(), 0);
    }
}
