//! Instrument reading generation.
//!
//! The ghost produces readings from the ghostly band of a class; hunters
//! taking an ordinary measurement produce readings from the disjoint
//! mundane band. Because the bands never overlap, [`classify`] recovers the
//! origin of every generated reading exactly.
//!
//! [`classify`]: haunt_types::classify

use haunt_types::evidence::{
    EMF_GHOSTLY, EMF_MUNDANE, FINGERPRINTS_GHOSTLY, FINGERPRINTS_MUNDANE, SOUND_GHOSTLY,
    SOUND_MUNDANE, TEMPERATURE_GHOSTLY, TEMPERATURE_MUNDANE,
};
use haunt_types::{Evidence, EvidenceClass};
use rand::Rng;

/// Draw uniformly from `(low, high]`.
fn upper_closed<R: Rng + ?Sized>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    let value = high - rng.random_range(0.0..(high - low));
    // Rounding can land exactly on the excluded bound.
    if value > low { value } else { high }
}

/// Draw a reading from the ghostly band of `class`.
pub fn ghostly_reading<R: Rng + ?Sized>(class: EvidenceClass, rng: &mut R) -> f64 {
    match class {
        EvidenceClass::Emf => upper_closed(rng, EMF_GHOSTLY),
        EvidenceClass::Temperature => rng.random_range(TEMPERATURE_GHOSTLY.0..TEMPERATURE_GHOSTLY.1),
        EvidenceClass::Fingerprints => FINGERPRINTS_GHOSTLY,
        EvidenceClass::Sound => upper_closed(rng, SOUND_GHOSTLY),
    }
}

/// Draw a reading from the mundane band of `class`.
pub fn mundane_reading<R: Rng + ?Sized>(class: EvidenceClass, rng: &mut R) -> f64 {
    match class {
        EvidenceClass::Emf => rng.random_range(EMF_MUNDANE.0..EMF_MUNDANE.1),
        EvidenceClass::Temperature => rng.random_range(TEMPERATURE_MUNDANE.0..TEMPERATURE_MUNDANE.1),
        EvidenceClass::Fingerprints => FINGERPRINTS_MUNDANE,
        EvidenceClass::Sound => rng.random_range(SOUND_MUNDANE.0..SOUND_MUNDANE.1),
    }
}

/// A fresh piece of ghostly evidence.
pub fn ghostly_evidence<R: Rng + ?Sized>(class: EvidenceClass, rng: &mut R) -> Evidence {
    Evidence::new(class, ghostly_reading(class, rng))
}

/// A fresh piece of mundane evidence.
pub fn mundane_evidence<R: Rng + ?Sized>(class: EvidenceClass, rng: &mut R) -> Evidence {
    Evidence::new(class, mundane_reading(class, rng))
}

#[cfg(test)]
mod tests {
    use haunt_types::{Classification, classify};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const SAMPLES: usize = 10_000;

    #[test]
    fn ghostly_readings_always_classify_ghostly() {
        let mut rng = StdRng::seed_from_u64(11);
        for class in EvidenceClass::ALL {
            for _ in 0..SAMPLES {
                let e = ghostly_evidence(class, &mut rng);
                assert_eq!(classify(&e), Classification::Ghostly, "{e}");
            }
        }
    }

    #[test]
    fn mundane_readings_always_classify_mundane() {
        let mut rng = StdRng::seed_from_u64(12);
        for class in EvidenceClass::ALL {
            for _ in 0..SAMPLES {
                let e = mundane_evidence(class, &mut rng);
                assert_eq!(classify(&e), Classification::Mundane, "{e}");
            }
        }
    }

    #[test]
    fn sound_bands_never_overlap() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut ghostly_min = f64::MAX;
        let mut mundane_max = f64::MIN;
        for _ in 0..SAMPLES {
            let g = ghostly_reading(EvidenceClass::Sound, &mut rng);
            let m = mundane_reading(EvidenceClass::Sound, &mut rng);
            assert!(g > 70.0 && g <= 75.0, "ghostly sound {g}");
            assert!((40.0..70.0).contains(&m), "mundane sound {m}");
            ghostly_min = ghostly_min.min(g);
            mundane_max = mundane_max.max(m);
        }
        assert!(mundane_max < ghostly_min);
    }

    #[test]
    fn fingerprints_are_degenerate() {
        let mut rng = StdRng::seed_from_u64(14);
        let g = ghostly_reading(EvidenceClass::Fingerprints, &mut rng);
        let m = mundane_reading(EvidenceClass::Fingerprints, &mut rng);
        assert!((g - 1.0).abs() < f64::EPSILON);
        assert!(m.abs() < f64::EPSILON);
    }

    #[test]
    fn emf_ghostly_stays_inside_band() {
        let mut rng = StdRng::seed_from_u64(15);
        for _ in 0..SAMPLES {
            let r = ghostly_reading(EvidenceClass::Emf, &mut rng);
            assert!(r > 4.9 && r <= 5.0, "emf {r}");
        }
    }
}
