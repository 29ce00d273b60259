//! Vehicles admitted by the lot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParkingError;

/// Kind of vehicle, parsed from its lowercase name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Motorcycle,
    Truck,
}

impl VehicleKind {
    /// Lowercase identifier, as accepted by `from_str`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::Truck => "truck",
        }
    }

    /// Capitalized name used in lot announcements.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Motorcycle => "Motorcycle",
            Self::Truck => "Truck",
        }
    }
}

impl FromStr for VehicleKind {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            "truck" => Ok(Self::Truck),
            other => Err(ParkingError::UnknownVehicleKind(other.to_string())),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle at the gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub kind: VehicleKind,
    pub license_plate: String,
}

impl Vehicle {
    pub fn new(kind: VehicleKind, license_plate: impl Into<String>) -> Self {
        Self {
            kind,
            license_plate: license_plate.into(),
        }
    }

    /// Create a vehicle from a kind name such as `"truck"`.
    pub fn parse(kind: &str, license_plate: impl Into<String>) -> Result<Self, ParkingError> {
        Ok(Self::new(kind.parse()?, license_plate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_parse() {
        assert_eq!("car".parse::<VehicleKind>().unwrap(), VehicleKind::Car);
        assert_eq!(
            "motorcycle".parse::<VehicleKind>().unwrap(),
            VehicleKind::Motorcycle
        );
        assert_eq!("truck".parse::<VehicleKind>().unwrap(), VehicleKind::Truck);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = Vehicle::parse("bicycle", "B1KE");
        assert!(matches!(result, Err(ParkingError::UnknownVehicleKind(kind)) if kind == "bicycle"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in [VehicleKind::Car, VehicleKind::Motorcycle, VehicleKind::Truck] {
            assert_eq!(kind.to_string().parse::<VehicleKind>().unwrap(), kind);
        }
    }

    #[test]
    fn vehicle_parse_keeps_plate() {
        let vehicle = Vehicle::parse("car", "ABC123").unwrap();
        assert_eq!(vehicle, Vehicle::new(VehicleKind::Car, "ABC123"));
        assert_eq!(vehicle.kind.label(), "Car");
    }
}
