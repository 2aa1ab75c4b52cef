//! Random opaque colors for visual variety.

use rand::Rng;

use crate::color::RgbaColor;

/// An opaque color with each RGB channel drawn uniformly from `[0, 1)`.
///
/// The generator is supplied by the caller. Pass `rand::rng()` for the
/// thread-local generator, or a seeded `StdRng` for reproducible output.
pub fn random_color<R: Rng>(rng: &mut R) -> RgbaColor {
    RgbaColor::opaque(
        rng.random_range(0.0..1.0),
        rng.random_range(0.0..1.0),
        rng.random_range(0.0..1.0),
    )
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_random_color_is_opaque_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let c = random_color(&mut rng);
            assert_eq!(c.a, 1.0);
            for v in [c.r, c.g, c.b] {
                assert!((0.0..1.0).contains(&v), "channel out of range: {v}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_colors() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(random_color(&mut a), random_color(&mut b));
        }
    }

    #[test]
    fn test_thread_local_rng() {
        let c = random_color(&mut rand::rng());
        assert_eq!(c.a, 1.0);
    }
}
