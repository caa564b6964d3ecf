use crate::domain::model::Label;

pub const FEATURE_COUNT: usize = 30;

/// Feature names in training order: the ten base measurements as
/// mean, standard-error, and worst blocks.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "mean radius",
    "mean texture",
    "mean perimeter",
    "mean area",
    "mean smoothness",
    "mean compactness",
    "mean concavity",
    "mean concave points",
    "mean symmetry",
    "mean fractal dimension",
    "radius error",
    "texture error",
    "perimeter error",
    "area error",
    "smoothness error",
    "compactness error",
    "concavity error",
    "concave points error",
    "symmetry error",
    "fractal dimension error",
    "worst radius",
    "worst texture",
    "worst perimeter",
    "worst area",
    "worst smoothness",
    "worst compactness",
    "worst concavity",
    "worst concave points",
    "worst symmetry",
    "worst fractal dimension",
];

/// One canned labeled example with its ground-truth diagnosis.
#[derive(Debug, Clone)]
pub struct Sample {
    pub name: &'static str,
    pub features: [f64; FEATURE_COUNT],
    pub label: Label,
}

// 測試樣本取自 Wisconsin 乳癌資料集，特徵順序與訓練時相同
static CANNED_SAMPLES: [Sample; 2] = [
    Sample {
        name: "Negative Sample",
        features: [
            1.799e+01, 1.038e+01, 1.228e+02, 1.001e+03, 1.184e-01, 2.776e-01, 3.001e-01,
            1.471e-01, 2.419e-01, 7.871e-02, 1.095e+00, 9.053e-01, 8.589e+00, 1.534e+02,
            6.399e-03, 4.904e-02, 5.373e-02, 1.587e-02, 3.003e-02, 6.193e-03, 2.538e+01,
            1.733e+01, 1.846e+02, 2.019e+03, 1.622e-01, 6.656e-01, 7.119e-01, 2.654e-01,
            4.601e-01, 1.189e-01,
        ],
        label: Label::Malignant,
    },
    Sample {
        name: "Positive Sample",
        features: [
            1.308e+01, 1.571e+01, 8.563e+01, 5.200e+02, 1.075e-01, 1.270e-01, 4.568e-02,
            3.110e-02, 1.967e-01, 6.811e-02, 1.852e-01, 7.477e-01, 1.383e+00, 1.467e+01,
            4.097e-03, 1.898e-02, 1.698e-02, 6.490e-03, 1.678e-02, 2.425e-03, 1.450e+01,
            2.049e+01, 9.609e+01, 6.305e+02, 1.312e-01, 2.776e-01, 1.890e-01, 7.283e-02,
            3.184e-01, 8.183e-02,
        ],
        label: Label::Benign,
    },
];

pub fn canned_samples() -> &'static [Sample] {
    &CANNED_SAMPLES
}

/// Look up a canned sample by its display name, case-insensitively.
/// A bare "negative" or "positive" also matches.
pub fn sample_by_name(name: &str) -> Option<&'static Sample> {
    let wanted = name.trim();
    CANNED_SAMPLES.iter().find(|s| {
        s.name.eq_ignore_ascii_case(wanted)
            || s.name
                .split_whitespace()
                .next()
                .is_some_and(|first| first.eq_ignore_ascii_case(wanted))
    })
}

impl Sample {
    /// Percentage deviation of each feature from the mean of all canned
    /// samples. Presentation data only; inference uses raw features.
    pub fn percent_deviation_from_mean(&self) -> [f64; FEATURE_COUNT] {
        let mut deviations = [0.0; FEATURE_COUNT];
        let count = CANNED_SAMPLES.len() as f64;

        for (i, deviation) in deviations.iter_mut().enumerate() {
            let mean: f64 = CANNED_SAMPLES.iter().map(|s| s.features[i]).sum::<f64>() / count;
            *deviation = (self.features[i] - mean) / mean * 100.0;
        }

        deviations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_samples_shape_and_labels() {
        let samples = canned_samples();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].name, "Negative Sample");
        assert_eq!(samples[0].label, Label::Malignant);
        assert_eq!(samples[1].name, "Positive Sample");
        assert_eq!(samples[1].label, Label::Benign);
        for sample in samples {
            assert_eq!(sample.features.len(), FEATURE_COUNT);
        }
    }

    #[test]
    fn test_sample_by_name() {
        assert_eq!(sample_by_name("Negative Sample").unwrap().label, Label::Malignant);
        assert_eq!(sample_by_name("positive").unwrap().label, Label::Benign);
        assert_eq!(sample_by_name("NEGATIVE").unwrap().label, Label::Malignant);
        assert!(sample_by_name("neutral").is_none());
    }

    #[test]
    fn test_deviations_are_symmetric_around_the_two_sample_mean() {
        let samples = canned_samples();
        let negative = samples[0].percent_deviation_from_mean();
        let positive = samples[1].percent_deviation_from_mean();

        // With two samples, each one sits at the same distance from the
        // mean on opposite sides.
        for i in 0..FEATURE_COUNT {
            assert!(
                (negative[i] + positive[i]).abs() < 1e-9,
                "feature {} deviations not symmetric: {} vs {}",
                FEATURE_NAMES[i],
                negative[i],
                positive[i]
            );
        }
    }

    #[test]
    fn test_deviation_sign_follows_feature_magnitude() {
        let samples = canned_samples();
        let negative = samples[0].percent_deviation_from_mean();
        // The malignant sample has the larger worst-area measurement.
        let worst_area = FEATURE_NAMES.iter().position(|n| *n == "worst area").unwrap();
        assert!(negative[worst_area] > 0.0);
    }
}
