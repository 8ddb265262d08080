use crate::engines::compact::candidate::{Bit, Candidate};
use rand::Rng;

/// Bernoulli trial: 1 with the given probability, 0 otherwise
///
/// Consumes exactly one `f64` draw from `rng`, so a seeded source yields the
/// same bits for the same probabilities.
pub fn bernoulli<R: Rng>(probability: f64, rng: &mut R) -> Bit {
    if rng.gen::<f64>() < probability {
        1
    } else {
        0
    }
}

/// Sample a candidate bit by bit from the probability vector
pub fn sample_candidate<R: Rng>(probabilities: &[f64], rng: &mut R) -> Candidate {
    probabilities
        .iter()
        .map(|&probability| bernoulli(probability, rng))
        .collect()
}

/// Generate a uniformly random candidate
pub fn random_candidate<R: Rng>(num_bits: usize, rng: &mut R) -> Candidate {
    (0..num_bits).map(|_| bernoulli(0.5, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bernoulli_extremes() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1000 {
            assert_eq!(bernoulli(0.0, &mut rng), 0);
            assert_eq!(bernoulli(1.0, &mut rng), 1);
        }
    }

    #[test]
    fn test_bernoulli_frequency() {
        let mut rng = StdRng::seed_from_u64(2);
        let trials = 20_000;

        let ones: usize = (0..trials).map(|_| bernoulli(0.3, &mut rng) as usize).sum();
        let rate = ones as f64 / trials as f64;

        assert!((rate - 0.3).abs() < 0.03, "observed rate {}", rate);
    }

    #[test]
    fn test_sample_candidate_follows_vector() {
        let mut rng = StdRng::seed_from_u64(3);
        let probabilities = [1.0, 0.0, 1.0, 0.0, 1.0];

        let candidate = sample_candidate(&probabilities, &mut rng);
        assert_eq!(candidate, vec![1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_random_candidate_shape() {
        let mut rng = StdRng::seed_from_u64(4);

        assert!(random_candidate(0, &mut rng).is_empty());

        let candidate = random_candidate(64, &mut rng);
        assert_eq!(candidate.len(), 64);
        assert!(candidate.iter().all(|&bit| bit <= 1));
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let probabilities = vec![0.2, 0.5, 0.8, 0.5, 0.1, 0.9];

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            assert_eq!(
                sample_candidate(&probabilities, &mut a),
                sample_candidate(&probabilities, &mut b)
            );
        }
    }
}
