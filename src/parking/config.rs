//! Parking lot configuration.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::spot::SpotSize;

/// Default number of spots in a lot.
pub const DEFAULT_CAPACITY: u32 = 50;

/// Default number of gate transitions a lot remembers: one full cycle.
pub const DEFAULT_GATE_HISTORY: usize = 4;

/// Configuration for a [`ParkingLot`](super::ParkingLot).
///
/// Missing fields take their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use signalbox::parking::{ParkingLotConfig, SpotSize};
///
/// let config = ParkingLotConfig::from_json(r#"{ "capacity": 10, "spot_size": "large" }"#)
///     .unwrap();
/// assert_eq!(config.capacity, 10);
/// assert_eq!(config.reserved_spots, 0);
/// assert_eq!(config.spot_size, SpotSize::Large);
///
/// let config = ParkingLotConfig::default().with_capacity(2).with_reserved_spots(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkingLotConfig {
    /// Total number of spots, reserved ones included.
    pub capacity: u32,
    /// How many of the lowest-numbered spots are held back.
    pub reserved_spots: u32,
    pub spot_size: SpotSize,
    /// How many recent gate transitions the lot keeps.
    pub gate_history_limit: usize,
}

impl Default for ParkingLotConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            reserved_spots: 0,
            spot_size: SpotSize::default(),
            gate_history_limit: DEFAULT_GATE_HISTORY,
        }
    }
}

impl ParkingLotConfig {
    #[must_use]
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_reserved_spots(mut self, reserved_spots: u32) -> Self {
        self.reserved_spots = reserved_spots;
        self
    }

    #[must_use]
    pub fn with_spot_size(mut self, spot_size: SpotSize) -> Self {
        self.spot_size = spot_size;
        self
    }

    #[must_use]
    pub fn with_gate_history_limit(mut self, gate_history_limit: usize) -> Self {
        self.gate_history_limit = gate_history_limit;
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The lot needs at least one spot it can hand out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("capacity must be positive".to_string()));
        }
        if self.reserved_spots >= self.capacity {
            return Err(ConfigError::Invalid(format!(
                "reserved_spots ({}) must be less than capacity ({})",
                self.reserved_spots, self.capacity
            )));
        }
        Ok(())
    }
}
