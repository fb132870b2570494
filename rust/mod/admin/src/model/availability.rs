//! Capabilities the backend does not offer yet.
//!
//! Detail panes ask for data (visit status, vehicle owner, entry history,
//! per-resident histories) that no endpoint serves. Instead of inventing
//! values, those lookups return [`Availability::Unavailable`] naming the
//! missing capability, and renderers show that plainly.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    GuestVisitStatus,
    GuestResidence,
    VehicleOwner,
    VehicleEntries,
    ResidentGuests,
    ResidentVehicles,
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Capability::GuestVisitStatus => "Visit status",
            Capability::GuestResidence => "Residence information",
            Capability::VehicleOwner => "Owner details",
            Capability::VehicleEntries => "Entry history",
            Capability::ResidentGuests => "Guest history",
            Capability::ResidentVehicles => "Registered vehicles",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not available", self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Availability<T> {
    Available(T),
    Unavailable { capability: Capability },
}

impl<T> Availability<T> {
    pub fn unavailable(capability: Capability) -> Self {
        Availability::Unavailable { capability }
    }

    /// `Available` when `value` is present, else the named capability is missing.
    pub fn from_option(value: Option<T>, capability: Capability) -> Self {
        match value {
            Some(v) => Availability::Available(v),
            None => Availability::Unavailable { capability },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available(_))
    }

    pub fn available(&self) -> Option<&T> {
        match self {
            Availability::Available(v) => Some(v),
            Availability::Unavailable { .. } => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Availability<U> {
        match self {
            Availability::Available(v) => Availability::Available(f(v)),
            Availability::Unavailable { capability } => Availability::Unavailable { capability },
        }
    }
}
