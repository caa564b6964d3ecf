use crate::core::catalog::Catalog;
use crate::domain::model::Label;
use crate::domain::ports::Model;
use crate::domain::sample::{Sample, FEATURE_COUNT, FEATURE_NAMES};
use crate::utils::error::{DemoError, Result};
use std::fmt::Write;

/// One prediction outcome, ready for display.
#[derive(Debug)]
pub struct PredictionReport {
    pub model_name: String,
    pub sample_name: String,
    pub predicted: Label,
    pub actual: Label,
    pub deviations: [f64; FEATURE_COUNT],
}

impl PredictionReport {
    pub fn is_correct(&self) -> bool {
        self.predicted == self.actual
    }

    /// Textual stand-in for the feature histogram: one signed bar per
    /// feature, scaled to the largest absolute deviation.
    pub fn render_deviation_chart(&self) -> String {
        const BAR_WIDTH: f64 = 30.0;

        let max = self
            .deviations
            .iter()
            .fold(f64::EPSILON, |acc, d| acc.max(d.abs()));

        let mut out = String::new();
        let _ = writeln!(
            out,
            "Percentage difference of {} features from the sample mean:",
            self.sample_name
        );
        for (name, deviation) in FEATURE_NAMES.iter().zip(self.deviations.iter()) {
            let scaled = (deviation.abs() / max * BAR_WIDTH).round() as usize;
            let _ = writeln!(
                out,
                "{:>24} {:>+9.2}% | {}",
                name,
                deviation,
                "#".repeat(scaled)
            );
        }
        out
    }
}

/// The interactive demo core: pick a model from the catalog, run one canned
/// sample through it, compare against the known diagnosis.
pub struct PredictionConsole<'a> {
    catalog: &'a Catalog,
}

impl<'a> PredictionConsole<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Run one synchronous predict cycle.
    ///
    /// An unknown model name fails with `ModelNotFound` before any
    /// inference is attempted. An inference failure surfaces as
    /// `PredictionError`; the session can continue with another
    /// model or sample.
    pub fn predict(&self, model_name: &str, sample: &Sample) -> Result<PredictionReport> {
        let model = self.catalog.get(model_name).ok_or_else(|| {
            tracing::error!("Selected model not found: {}", model_name);
            DemoError::ModelNotFound {
                name: model_name.to_string(),
            }
        })?;

        let predicted = model
            .infer(&sample.features)
            .inspect_err(|e| tracing::error!("Error making prediction: {}", e))?;

        tracing::info!("Made prediction using {}", sample.name);

        Ok(PredictionReport {
            model_name: model_name.to_string(),
            sample_name: sample.name.to_string(),
            predicted,
            actual: sample.label,
            deviations: sample.percent_deviation_from_mean(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::canned_samples;

    #[test]
    fn test_deviation_chart_has_one_bar_per_feature() {
        let sample = &canned_samples()[0];
        let report = PredictionReport {
            model_name: "model_logistic".to_string(),
            sample_name: sample.name.to_string(),
            predicted: Label::Malignant,
            actual: sample.label,
            deviations: sample.percent_deviation_from_mean(),
        };

        let chart = report.render_deviation_chart();
        assert_eq!(chart.lines().count(), FEATURE_COUNT + 1);
        assert!(chart.contains("worst area"));
        assert!(chart.contains('%'));
    }
}
