use crate::errors::SaxError;

///
/// How z-normalization statistics are chosen for a run.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizationParams {
    /// Derive mean and population standard deviation from each series being encoded.
    FromData,
    /// Use the same user-supplied mean and standard deviation everywhere.
    Fixed { mean: f64, std: f64 },
}

impl NormalizationParams {
    ///
    /// Build normalization parameters from optional user input.
    ///
    /// Mean and std must be given together, and std must be strictly positive.
    ///
    /// # Arguments
    /// - mean: fixed mean, if supplied
    /// - std: fixed standard deviation, if supplied
    pub fn from_options(mean: Option<f64>, std: Option<f64>) -> Result<Self, SaxError> {
        match (mean, std) {
            (None, None) => Ok(NormalizationParams::FromData),
            (Some(mean), Some(std)) => {
                let checked = Normalizer::new(mean, std)?;
                Ok(NormalizationParams::Fixed {
                    mean: checked.mean,
                    std: checked.std,
                })
            }
            _ => Err(SaxError::InvalidParams(
                "if --mean is specified, --std is required, and vice versa".to_string(),
            )),
        }
    }

    ///
    /// Resolve the normalizer to apply to `values`.
    ///
    pub fn normalizer_for(&self, values: &[f64]) -> Result<Normalizer, SaxError> {
        match *self {
            NormalizationParams::FromData => Normalizer::from_data(values),
            NormalizationParams::Fixed { mean, std } => Normalizer::new(mean, std),
        }
    }
}

///
/// A resolved `(mean, std)` pair.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    pub mean: f64,
    pub std: f64,
}

impl Normalizer {
    pub fn new(mean: f64, std: f64) -> Result<Self, SaxError> {
        if !mean.is_finite() {
            return Err(SaxError::InvalidParams(format!("mean must be finite, got {}", mean)));
        }
        if !(std.is_finite() && std > 0.0) {
            return Err(SaxError::InvalidParams(format!("std must be > 0, got {}", std)));
        }
        Ok(Normalizer { mean, std })
    }

    ///
    /// Population mean and standard deviation of `values`.
    ///
    /// Fails for an empty series and for a constant one, whose standard deviation is zero.
    pub fn from_data(values: &[f64]) -> Result<Self, SaxError> {
        if values.is_empty() {
            return Err(SaxError::InvalidParams(
                "cannot derive mean/std from an empty series".to_string(),
            ));
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();

        if std == 0.0 {
            return Err(SaxError::InvalidParams(format!(
                "standard deviation of the data is 0 (constant value {} over {} bases)",
                mean,
                values.len()
            )));
        }

        Normalizer::new(mean, std)
    }

    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.mean) / self.std
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{} != {}", a, b);
    }

    #[rstest]
    fn test_from_data_population_statistics() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let normalizer = Normalizer::from_data(&values).unwrap();

        assert_close(normalizer.mean, 4.5);
        assert_close(normalizer.std, 2.291288);
        assert_close(normalizer.normalize(1.0), -1.527525);
        assert_close(normalizer.normalize(8.0), 1.527525);
    }

    #[rstest]
    fn test_from_data_constant_series_is_an_error() {
        assert!(matches!(
            Normalizer::from_data(&[3.0, 3.0, 3.0]),
            Err(SaxError::InvalidParams(_))
        ));
    }

    #[rstest]
    fn test_from_data_empty_series_is_an_error() {
        assert!(matches!(
            Normalizer::from_data(&[]),
            Err(SaxError::InvalidParams(_))
        ));
    }

    #[rstest]
    fn test_from_options_defaults_to_data() {
        assert_eq!(
            NormalizationParams::from_options(None, None).unwrap(),
            NormalizationParams::FromData
        );
    }

    #[rstest]
    #[case(Some(1.0), None)]
    #[case(None, Some(1.0))]
    #[case(Some(1.0), Some(0.0))]
    #[case(Some(1.0), Some(-2.0))]
    #[case(Some(f64::NAN), Some(1.0))]
    fn test_from_options_rejects_invalid(#[case] mean: Option<f64>, #[case] std: Option<f64>) {
        assert!(matches!(
            NormalizationParams::from_options(mean, std),
            Err(SaxError::InvalidParams(_))
        ));
    }

    #[rstest]
    fn test_fixed_params_ignore_data() {
        let params = NormalizationParams::from_options(Some(10.0), Some(2.0)).unwrap();
        let a = params.normalizer_for(&[0.0, 100.0]).unwrap();
        let b = params.normalizer_for(&[5.0, 5.0, 5.0]).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.normalize(14.0), 2.0);
    }
}
