//! Enumeration types for the Haunt simulation.
//!
//! The two closed vocabularies of the game: the four evidence classes an
//! instrument can measure and the four kinds of ghost. The ghost tables
//! below are the only place where a ghost kind is tied to evidence, and
//! both the ghost actor (what it may leave behind) and the outcome
//! evaluator (what a set of observations points to) read them.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EvidenceError;

// ---------------------------------------------------------------------------
// Evidence classes
// ---------------------------------------------------------------------------

/// The kind of instrument reading a piece of evidence carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceClass {
    /// Electromagnetic field strength.
    Emf,
    /// Ambient temperature in degrees Celsius.
    Temperature,
    /// Fingerprint scanner hit (1.0) or miss (0.0).
    Fingerprints,
    /// Sound pressure level in decibels.
    Sound,
}

impl EvidenceClass {
    /// Every evidence class, in discriminant order.
    pub const ALL: [Self; 4] = [Self::Emf, Self::Temperature, Self::Fingerprints, Self::Sound];

    /// Upper-case display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Emf => "EMF",
            Self::Temperature => "TEMPERATURE",
            Self::Fingerprints => "FINGERPRINTS",
            Self::Sound => "SOUND",
        }
    }
}

impl TryFrom<u8> for EvidenceClass {
    type Error = EvidenceError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Emf),
            1 => Ok(Self::Temperature),
            2 => Ok(Self::Fingerprints),
            3 => Ok(Self::Sound),
            other => Err(EvidenceError::InvalidClass(other)),
        }
    }
}

impl fmt::Display for EvidenceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Ghost classes
// ---------------------------------------------------------------------------

/// The kind of ghost haunting the house.
///
/// | Ghost       | Leaves behind               | Signature excludes |
/// |-------------|-----------------------------|--------------------|
/// | Poltergeist | TEMPERATURE, FINGERPRINTS   | SOUND              |
/// | Banshee     | SOUND                       | FINGERPRINTS       |
/// | Bullies     | TEMPERATURE                 | TEMPERATURE        |
/// | Phantom     | EMF                         | EMF                |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhostClass {
    /// Moves objects around; leaves cold spots and prints.
    Poltergeist,
    /// Wails; leaves sound.
    Banshee,
    /// Leaves cold spots.
    Bullies,
    /// Disturbs electronics; leaves EMF.
    Phantom,
}

impl GhostClass {
    /// Every ghost class, in discriminant order.
    pub const ALL: [Self; 4] = [Self::Poltergeist, Self::Banshee, Self::Bullies, Self::Phantom];

    /// Upper-case display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Poltergeist => "POLTERGEIST",
            Self::Banshee => "BANSHEE",
            Self::Bullies => "BULLIES",
            Self::Phantom => "PHANTOM",
        }
    }

    /// Evidence classes this ghost may deposit. Never empty.
    pub const fn deposit_classes(self) -> &'static [EvidenceClass] {
        match self {
            Self::Poltergeist => &[EvidenceClass::Temperature, EvidenceClass::Fingerprints],
            Self::Banshee => &[EvidenceClass::Sound],
            Self::Bullies => &[EvidenceClass::Temperature],
            Self::Phantom => &[EvidenceClass::Emf],
        }
    }

    /// The one evidence class missing from this ghost's identification
    /// signature.
    pub const fn excluded_class(self) -> EvidenceClass {
        match self {
            Self::Poltergeist => EvidenceClass::Sound,
            Self::Banshee => EvidenceClass::Fingerprints,
            Self::Bullies => EvidenceClass::Temperature,
            Self::Phantom => EvidenceClass::Emf,
        }
    }

    /// The three evidence classes whose joint ghostly coverage identifies
    /// this ghost.
    pub fn signature(self) -> [EvidenceClass; 3] {
        let excluded = self.excluded_class();
        let mut out = [EvidenceClass::Emf; 3];
        let kept = EvidenceClass::ALL.into_iter().filter(|c| *c != excluded);
        for (slot, class) in out.iter_mut().zip(kept) {
            *slot = class;
        }
        out
    }
}

impl TryFrom<u8> for GhostClass {
    type Error = EvidenceError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Poltergeist),
            1 => Ok(Self::Banshee),
            2 => Ok(Self::Bullies),
            3 => Ok(Self::Phantom),
            other => Err(EvidenceError::InvalidGhost(other)),
        }
    }
}

impl fmt::Display for GhostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
