//! Stateless keyed random numbers for static scene placement.
//!
//! Each value depends only on `(seed, domain, index, channel)`, never on call
//! order, so rebuilding a scene with the same seed reproduces it exactly.

/// Independent streams of placement randomness
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    Voxels,
    Stream,
}

impl Domain {
    fn salt(self) -> u64 {
        match self {
            Domain::Voxels => 0x5C20_0000_0000_0001,
            Domain::Stream => 0x5C20_0000_0000_0002,
        }
    }
}

fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Keyed generator over one scene seed
#[derive(Clone, Copy, Debug)]
pub struct KeyedRng {
    seed: u64,
}

impl KeyedRng {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn u64(&self, domain: Domain, index: u64, channel: u64) -> u64 {
        let mut state = splitmix64(self.seed ^ domain.salt());
        state = splitmix64(state ^ index.wrapping_mul(0x9E37_79B9));
        state = splitmix64(state ^ channel.wrapping_mul(0xC2B2_AE35));
        splitmix64(state ^ 0xD1B5_4A32_4F3A_9E55)
    }

    /// Uniform value in `[0, 1)`
    pub fn unit(&self, domain: Domain, index: u64, channel: u64) -> f32 {
        // 24 mantissa bits keep the result strictly below 1.0 in f32
        let bits = self.u64(domain, index, channel) >> 40;
        bits as f32 / (1u64 << 24) as f32
    }

    /// Uniform value in `[-half_span, half_span)`, i.e. `(unit - 0.5) * span`
    pub fn centered(&self, domain: Domain, index: u64, channel: u64, span: f32) -> f32 {
        (self.unit(domain, index, channel) - 0.5) * span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let rng = KeyedRng::new(42);
        assert_eq!(
            rng.u64(Domain::Voxels, 3, 1),
            KeyedRng::new(42).u64(Domain::Voxels, 3, 1)
        );
    }

    #[test]
    fn test_keys_are_independent() {
        let rng = KeyedRng::new(42);
        let a = rng.u64(Domain::Voxels, 3, 1);
        assert_ne!(a, rng.u64(Domain::Voxels, 3, 2));
        assert_ne!(a, rng.u64(Domain::Voxels, 4, 1));
        assert_ne!(a, rng.u64(Domain::Stream, 3, 1));
        assert_ne!(a, KeyedRng::new(43).u64(Domain::Voxels, 3, 1));
    }

    #[test]
    fn test_unit_range() {
        let rng = KeyedRng::new(7);
        let mut sum = 0.0;
        for i in 0..1000 {
            let v = rng.unit(Domain::Stream, i, 0);
            assert!((0.0..1.0).contains(&v));
            sum += v;
        }
        let mean = sum / 1000.0;
        assert!((mean - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_centered_range() {
        let rng = KeyedRng::new(7);
        for i in 0..200 {
            let v = rng.centered(Domain::Voxels, i, 0, 4.0);
            assert!((-2.0..2.0).contains(&v));
        }
    }
}
