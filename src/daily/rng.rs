//! Mulberry32 pseudo-random generator
//!
//! A 32-bit generator whose state advances by a fixed odd increment and whose
//! output is a mix of the new state. Bit-compatible with the browser build, so
//! the same seed picks the same daily fish everywhere.

/// Mulberry32 generator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const INCREMENT: u32 = 0x6D2B_79F5;

    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output
    pub const fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        t ^ (t >> 14)
    }

    /// Next value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Index in `0..len`, or `None` for an empty range
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        // Floor of a value in [0, len); the min guards float rounding at the top end
        let index = (self.next_f64() * len as f64) as usize;
        Some(index.min(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_stream_for_date_seed() {
        let mut rng = Mulberry32::new(20_240_305);
        assert_eq!(rng.next_u32(), 514_677_379);
        assert_eq!(rng.next_u32(), 3_850_156_117);
        assert_eq!(rng.next_u32(), 3_457_604_728);
    }

    #[test]
    fn reference_stream_for_zero_seed() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_u32(), 1_144_304_738);
        assert_eq!(rng.next_u32(), 1_416_247);
    }

    #[test]
    fn floats_are_in_unit_interval() {
        let mut rng = Mulberry32::new(42);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Mulberry32::new(20_240_101);
        let mut b = Mulberry32::new(20_240_101);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn index_covers_range() {
        let mut rng = Mulberry32::new(7);
        assert_eq!(rng.next_index(0), None);
        assert_eq!(rng.next_index(1), Some(0));

        let mut seen = [false; 8];
        for _ in 0..1_000 {
            seen[rng.next_index(8).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn first_index_for_reference_seed() {
        // 514677379 / 2^32 = 0.1198...
        let mut rng = Mulberry32::new(20_240_305);
        assert_eq!(rng.next_index(100), Some(11));
    }
}
