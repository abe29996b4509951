use crate::error::EngineError;
use crate::model::{PlayerRating, RatingStats};

/// Summarise a non-empty sample of 0-10 ratings.
///
/// Uses the population standard deviation (divisor = sample size).
pub fn summarize(values: &[i64]) -> Result<RatingStats, EngineError> {
    if values.is_empty() {
        return Err(EngineError::InsufficientData);
    }
    if let Some(&value) = values.iter().find(|v| !(0..=10).contains(*v)) {
        return Err(EngineError::RatingOutOfRange { value });
    }

    let count = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / count;

    Ok(RatingStats {
        mean,
        std_dev: variance.sqrt(),
    })
}

/// Average of per-player means. Not a pooled mean over raw responses.
pub fn mean_of_means<'a, I>(players: I) -> Result<f64, EngineError>
where
    I: IntoIterator<Item = &'a PlayerRating>,
{
    let means: Vec<f64> = players.into_iter().map(|p| p.rating.mean).collect();
    if means.is_empty() {
        return Err(EngineError::InsufficientData);
    }
    Ok(means.iter().sum::<f64>() / means.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn rated(name: &str, mean: f64) -> PlayerRating {
        PlayerRating {
            name: name.to_string(),
            position: "CM".to_string(),
            image_path: None,
            rating: RatingStats { mean, std_dev: 0.0 },
            is_starter: true,
            goals: 0,
            assists: 0,
            own_goals: 0,
            is_motm: false,
        }
    }

    #[test]
    fn test_summarize_mean_and_population_std_dev() {
        let stats = summarize(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert!(approx(stats.mean, 5.0));
        assert!(approx(stats.std_dev, 2.0));
    }

    #[test]
    fn test_summarize_not_sample_std_dev() {
        // Sample std dev of [6, 8] would be ~1.414; population is exactly 1.
        let stats = summarize(&[6, 8]).unwrap();
        assert!(approx(stats.mean, 7.0));
        assert!(approx(stats.std_dev, 1.0));
    }

    #[test]
    fn test_summarize_single_value() {
        let stats = summarize(&[7]).unwrap();
        assert!(approx(stats.mean, 7.0));
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_summarize_scale_bounds() {
        let stats = summarize(&[0, 10]).unwrap();
        assert!(approx(stats.mean, 5.0));
        assert!(approx(stats.std_dev, 5.0));
    }

    #[test]
    fn test_summarize_every_small_sample_matches_definition() {
        for a in 0..=10 {
            for b in 0..=10 {
                for c in [0, 3, 10] {
                    let sample = [a, b, c];
                    let stats = summarize(&sample).unwrap();
                    let mean = (a + b + c) as f64 / 3.0;
                    let var = sample
                        .iter()
                        .map(|&v| (v as f64 - mean).powi(2))
                        .sum::<f64>()
                        / 3.0;
                    assert!(approx(stats.mean, mean));
                    assert!(approx(stats.std_dev, var.sqrt()));
                    assert!(stats.std_dev >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_summarize_empty_is_insufficient() {
        assert_eq!(summarize(&[]), Err(EngineError::InsufficientData));
    }

    #[test]
    fn test_summarize_rejects_out_of_scale() {
        assert_eq!(
            summarize(&[5, 11]),
            Err(EngineError::RatingOutOfRange { value: 11 })
        );
        assert_eq!(
            summarize(&[-1]),
            Err(EngineError::RatingOutOfRange { value: -1 })
        );
    }

    #[test]
    fn test_mean_of_means_differs_from_pooled_mean() {
        // Player A: 10 responses of 8. Player B: 1 response of 4.
        // Pooled mean = 84 / 11; mean of means = (8 + 4) / 2 = 6.
        let players = [rated("A", 8.0), rated("B", 4.0)];
        assert!(approx(mean_of_means(&players).unwrap(), 6.0));
    }

    #[test]
    fn test_mean_of_means_empty() {
        let players: Vec<PlayerRating> = vec![];
        assert_eq!(mean_of_means(&players), Err(EngineError::InsufficientData));
    }
}
