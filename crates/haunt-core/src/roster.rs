//! Hunter roster: names paired with specialties drawn without replacement.

use haunt_actors::HunterProfile;
use haunt_types::EvidenceClass;
use rand::Rng;

/// Errors that can occur while assembling the cast of a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// No hunters were requested.
    #[error("a haunting needs at least one hunter")]
    NoHunters,

    /// More hunters than the start room holds.
    #[error("{requested} hunters requested but the start room holds {capacity}")]
    TooManyHunters {
        /// Hunters requested.
        requested: usize,
        /// Start room capacity.
        capacity: usize,
    },

    /// Every evidence class has already been handed out.
    #[error("no specialty left for hunter {hunter:?}")]
    NoSpecialtyLeft {
        /// The hunter left without one.
        hunter: String,
    },

    /// The configured ghost start room is not in the house.
    #[error("ghost start room {0:?} is not in the house")]
    UnknownGhostRoom(String),
}

/// Evidence classes not yet assigned to a hunter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialtyPool {
    remaining: Vec<EvidenceClass>,
}

impl Default for SpecialtyPool {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecialtyPool {
    /// A pool holding all four classes.
    pub fn new() -> Self {
        Self {
            remaining: EvidenceClass::ALL.to_vec(),
        }
    }

    /// Classes still available.
    pub fn remaining(&self) -> &[EvidenceClass] {
        &self.remaining
    }

    /// Draw one class uniformly and remove it from the pool. Returns `None`
    /// once the pool is empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<EvidenceClass> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(index))
    }
}

/// Pair every name with its own specialty.
///
/// # Errors
///
/// [`SetupError::NoHunters`] for an empty list,
/// [`SetupError::TooManyHunters`] when the start room cannot hold them all,
/// and [`SetupError::NoSpecialtyLeft`] past the fourth hunter.
pub fn draft<R: Rng + ?Sized>(
    names: &[String],
    start_capacity: usize,
    rng: &mut R,
) -> Result<Vec<HunterProfile>, SetupError> {
    if names.is_empty() {
        return Err(SetupError::NoHunters);
    }
    if names.len() > start_capacity {
        return Err(SetupError::TooManyHunters {
            requested: names.len(),
            capacity: start_capacity,
        });
    }

    let mut pool = SpecialtyPool::new();
    names
        .iter()
        .map(|name| {
            let specialty = pool.draw(rng).ok_or_else(|| SetupError::NoSpecialtyLeft {
                hunter: name.clone(),
            })?;
            Ok(HunterProfile::new(name.clone(), specialty))
        })
        .collect()
}
