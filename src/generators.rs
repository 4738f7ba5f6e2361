use num_traits::PrimInt;
use ordered_float::OrderedFloat;
use rand::distributions::uniform::SampleUniform;
use rand::prelude::*;

/// Builds the random source for a workload
///
/// A fixed seed gives a reproducible sequence; `None` seeds from the OS.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generates `count` integers drawn uniformly from `0..upper_bound`
pub fn random_bounded<T, R>(count: usize, upper_bound: T, rng: &mut R) -> Vec<T>
where
    T: PrimInt + SampleUniform,
    R: Rng + ?Sized,
{
    assert!(upper_bound > T::zero(), "upper_bound must be positive");

    (0..count)
        .map(|_| rng.gen_range(T::zero()..upper_bound))
        .collect()
}

/// Generates `count` floats drawn uniformly from `low..high`
/// Returns OrderedFloat<f64> values so they can be stored in a heap
pub fn random_floats<R>(count: usize, low: f64, high: f64, rng: &mut R) -> Vec<OrderedFloat<f64>>
where
    R: Rng + ?Sized,
{
    assert!(low < high, "low must be smaller than high");

    (0..count)
        .map(|_| OrderedFloat(rng.gen_range(low..high)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bounded_respects_bound() {
        let mut rng = seeded_rng(Some(7));
        let values: Vec<i64> = random_bounded(1_000, 100, &mut rng);
        assert_eq!(values.len(), 1_000);
        assert!(values.iter().all(|&v| (0..100).contains(&v)));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a: Vec<u32> = random_bounded(32, 1_000, &mut seeded_rng(Some(42)));
        let b: Vec<u32> = random_bounded(32, 1_000, &mut seeded_rng(Some(42)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_floats_in_range() {
        let mut rng = seeded_rng(Some(3));
        let values = random_floats(200, -1.0, 1.0, &mut rng);
        assert!(values
            .iter()
            .all(|v| *v >= OrderedFloat(-1.0) && *v < OrderedFloat(1.0)));
    }

    #[test]
    #[should_panic(expected = "upper_bound must be positive")]
    fn test_zero_bound_panics() {
        let mut rng = seeded_rng(Some(1));
        let _: Vec<u8> = random_bounded(1, 0, &mut rng);
    }
}
