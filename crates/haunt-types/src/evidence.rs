//! Evidence values and their ghostly/mundane classification.
//!
//! Each evidence class has two disjoint reading bands. A reading inside the
//! ghostly band can only have been produced by the ghost; anything else is
//! an ordinary (mundane) measurement:
//!
//! | Class        | Ghostly band   | Mundane band |
//! |--------------|----------------|--------------|
//! | EMF          | (4.9, 5.0]     | [0, 4.9)     |
//! | TEMPERATURE  | [-10, 0)       | [0, 27)      |
//! | FINGERPRINTS | exactly 1.0    | exactly 0.0  |
//! | SOUND        | (70, 75]       | [40, 70)     |

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::EvidenceClass;

/// Lower (exclusive) and upper (inclusive) EMF ghostly bounds.
pub const EMF_GHOSTLY: (f64, f64) = (4.9, 5.0);
/// Lower (inclusive) and upper (exclusive) TEMPERATURE ghostly bounds.
pub const TEMPERATURE_GHOSTLY: (f64, f64) = (-10.0, 0.0);
/// The only ghostly FINGERPRINTS reading.
pub const FINGERPRINTS_GHOSTLY: f64 = 1.0;
/// Lower (exclusive) and upper (inclusive) SOUND ghostly bounds.
pub const SOUND_GHOSTLY: (f64, f64) = (70.0, 75.0);

/// Half-open `[min, max)` EMF mundane bounds.
pub const EMF_MUNDANE: (f64, f64) = (0.0, 4.9);
/// Half-open `[min, max)` TEMPERATURE mundane bounds.
pub const TEMPERATURE_MUNDANE: (f64, f64) = (0.0, 27.0);
/// The only mundane FINGERPRINTS reading.
pub const FINGERPRINTS_MUNDANE: f64 = 0.0;
/// Half-open `[min, max)` SOUND mundane bounds.
pub const SOUND_MUNDANE: (f64, f64) = (40.0, 70.0);

/// Whether a reading could only have come from the ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Inside the class's ghostly band.
    Ghostly,
    /// Anywhere else; a false positive.
    Mundane,
}

/// A single instrument reading. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    class: EvidenceClass,
    reading: f64,
}

impl Evidence {
    /// Create a piece of evidence from a class and a raw reading.
    pub const fn new(class: EvidenceClass, reading: f64) -> Self {
        Self { class, reading }
    }

    /// The instrument class.
    pub const fn class(&self) -> EvidenceClass {
        self.class
    }

    /// The raw reading.
    pub const fn reading(&self) -> f64 {
        self.reading
    }

    /// Shorthand for `classify(self) == Classification::Ghostly`.
    pub fn is_ghostly(&self) -> bool {
        classify(self) == Classification::Ghostly
    }

    /// Duplicate test used when hunters compare notes: same class and the
    /// exact same reading, bit for bit.
    pub fn is_duplicate_of(&self, other: &Self) -> bool {
        self.class == other.class && self.reading.to_bits() == other.reading.to_bits()
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.3}", self.class, self.reading)?;
        if self.is_ghostly() {
            f.write_str(" (ghostly)")?;
        }
        Ok(())
    }
}

/// Classify a reading against its class's ghostly band. Pure.
pub fn classify(evidence: &Evidence) -> Classification {
    let r = evidence.reading;
    let ghostly = match evidence.class {
        EvidenceClass::Emf => r > EMF_GHOSTLY.0 && r <= EMF_GHOSTLY.1,
        EvidenceClass::Temperature => r >= TEMPERATURE_GHOSTLY.0 && r < TEMPERATURE_GHOSTLY.1,
        EvidenceClass::Fingerprints => (r - FINGERPRINTS_GHOSTLY).abs() < f64::EPSILON,
        EvidenceClass::Sound => r > SOUND_GHOSTLY.0 && r <= SOUND_GHOSTLY.1,
    };
    if ghostly {
        Classification::Ghostly
    } else {
        Classification::Mundane
    }
}
