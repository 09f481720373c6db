use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;
use crate::item::error::ItemError;

/// Pick one of `choices` with probability proportional to `weight(choice)`.
///
/// The random source is passed in so callers can seed it. Fails with a
/// configuration error for an empty set, all-zero weights, or any negative
/// or non-finite weight.
pub fn weighted_choice<'a, T, R, F>(choices: &'a [T], weight: F, rng: &mut R) -> Result<&'a T, ItemError>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f32,
{
    if let Some(bad) = choices.iter().map(&weight).find(|w| !w.is_finite()) {
        return Err(ItemError::InvalidWeight(bad.to_string()));
    }

    let index = WeightedIndex::new(choices.iter().map(&weight)).map_err(|err| match err {
        WeightedError::NoItem => ItemError::EmptyTypeSet,
        WeightedError::AllWeightsZero => ItemError::ZeroWeights,
        other => ItemError::InvalidWeight(other.to_string()),
    })?;

    Ok(&choices[index.sample(rng)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_choice_always_selected() {
        let mut rng = StdRng::seed_from_u64(1);
        let choices = [("only", 2.0)];
        for _ in 0..50 {
            let picked = weighted_choice(&choices, |c| c.1, &mut rng).unwrap();
            assert_eq!(picked.0, "only");
        }
    }

    #[test]
    fn test_zero_weight_choice_never_selected() {
        let mut rng = StdRng::seed_from_u64(7);
        let choices = [("never", 0.0), ("always", 1.0)];
        for _ in 0..500 {
            let picked = weighted_choice(&choices, |c| c.1, &mut rng).unwrap();
            assert_eq!(picked.0, "always");
        }
    }

    #[test]
    fn test_frequencies_follow_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let choices = [("a", 1.0), ("b", 3.0), ("c", 6.0)];
        let draws = 20_000;
        let mut counts = [0usize; 3];

        for _ in 0..draws {
            let picked = weighted_choice(&choices, |c| c.1, &mut rng).unwrap();
            let index = choices.iter().position(|c| c.0 == picked.0).unwrap();
            counts[index] += 1;
        }

        for (count, expected) in counts.iter().zip([0.1, 0.3, 0.6]) {
            let freq = *count as f64 / draws as f64;
            assert!(
                (freq - expected).abs() < 0.02,
                "frequency {} too far from expected {}",
                freq,
                expected
            );
        }
    }

    #[test]
    fn test_empty_set_is_configuration_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let choices: [(&str, f32); 0] = [];
        let result = weighted_choice(&choices, |c| c.1, &mut rng);
        assert_eq!(result, Err(ItemError::EmptyTypeSet));
    }

    #[test]
    fn test_all_zero_weights_is_configuration_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let choices = [("a", 0.0), ("b", 0.0)];
        let result = weighted_choice(&choices, |c| c.1, &mut rng);
        assert_eq!(result, Err(ItemError::ZeroWeights));
    }

    #[test]
    fn test_negative_and_nan_weights_rejected() {
        let mut rng = StdRng::seed_from_u64(0);

        let negative = [("a", -1.0), ("b", 2.0)];
        assert!(matches!(
            weighted_choice(&negative, |c| c.1, &mut rng),
            Err(ItemError::InvalidWeight(_))
        ));

        let nan = [("a", f32::NAN), ("b", 2.0)];
        assert!(matches!(
            weighted_choice(&nan, |c| c.1, &mut rng),
            Err(ItemError::InvalidWeight(_))
        ));
    }
}
