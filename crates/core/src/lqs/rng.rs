//! Title-seeded pseudo-random stream used by the Zeitgeist module.
//!
//! The seed is hashed with 32-bit FNV-1a over UTF-16 code units, then each
//! draw runs two xorshift-multiply mixing rounds. The constants below are
//! frozen: changing any of them changes every historical score, and the
//! dashboard's browser-side mirror of the estimator uses the same ones.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 0x0100_0193;
/// First mixing multiplier.
pub const MIX_MULTIPLIER_1: u32 = 0x85eb_ca6b;
/// Second mixing multiplier.
pub const MIX_MULTIPLIER_2: u32 = 0xc2b2_ae35;

/// Seed used in place of an empty string.
pub const FALLBACK_SEED: &str = "default";

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Deterministic generator of floats in `[0, 1)` keyed on a string.
///
/// Each instance owns its state; two generators built from the same seed
/// yield identical sequences.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Build a generator from `seed`, substituting [`FALLBACK_SEED`] for an
    /// empty string.
    pub fn new(seed: &str) -> Self {
        let seed = if seed.is_empty() { FALLBACK_SEED } else { seed };
        Self {
            state: fnv1a_utf16(seed),
        }
    }

    /// Advance the state and return the next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let mut h = self.state;
        h = (h ^ (h >> 16)).wrapping_mul(MIX_MULTIPLIER_1);
        h = (h ^ (h >> 13)).wrapping_mul(MIX_MULTIPLIER_2);
        self.state = h;
        f64::from(h) / TWO_POW_32
    }
}

/// 32-bit FNV-1a hash over the UTF-16 code units of `s`.
pub fn fnv1a_utf16(s: &str) -> u32 {
    s.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}
