//! Multinomial Naive Bayes fit on TF-IDF features.

use std::collections::BTreeMap;

use anyhow::{bail, Result};

use crate::math::SparseVector;
use crate::models::classifier_trait::ProbabilisticModel;

/// Hyper-parameters for multinomial Naive Bayes.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    /// Additive (Laplace) smoothing applied to feature counts, so unseen
    /// feature/class combinations never hit a zero probability.
    smoothing: f64,
}

impl MultinomialNb {
    pub fn new() -> Self {
        MultinomialNb { smoothing: 1.0 }
    }

    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        assert!(smoothing > 0.0, "smoothing must be positive, got {}", smoothing);
        self.smoothing = smoothing;
        self
    }

    /// Fit class priors and per-feature log likelihoods from training
    /// vectors and labels. Classes are stored in ascending sorted label
    /// order, which also fixes the tie-break order at prediction time.
    pub fn fit(&self, features: &[SparseVector], labels: &[String]) -> Result<FittedNaiveBayes> {
        if features.len() != labels.len() {
            bail!(
                "feature and label counts differ: {} vs {}",
                features.len(),
                labels.len()
            );
        }
        if features.is_empty() {
            bail!("cannot fit a classifier on an empty training set");
        }

        let n_features = features[0].dim();
        let n_samples = features.len() as f64;

        // BTreeMap fixes the class order: ascending by label.
        let mut rows_by_class: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (row, label) in labels.iter().enumerate() {
            rows_by_class.entry(label.as_str()).or_default().push(row);
        }

        let mut classes = Vec::with_capacity(rows_by_class.len());
        let mut class_log_prior = Vec::with_capacity(rows_by_class.len());
        let mut feature_log_prob = Vec::with_capacity(rows_by_class.len());

        for (label, rows) in rows_by_class {
            let mut counts = vec![0.0f64; n_features];
            for &row in &rows {
                debug_assert_eq!(features[row].dim(), n_features);
                for (index, value) in features[row].iter() {
                    counts[index] += value;
                }
            }

            let total: f64 =
                counts.iter().sum::<f64>() + self.smoothing * n_features as f64;
            let log_prob = counts
                .iter()
                .map(|&count| ((count + self.smoothing) / total).ln())
                .collect();

            classes.push(label.to_string());
            class_log_prior.push((rows.len() as f64 / n_samples).ln());
            feature_log_prob.push(log_prob);
        }

        log::debug!(
            "fitted Naive Bayes on {} sample(s), {} class(es), {} feature(s)",
            features.len(),
            classes.len(),
            n_features
        );

        Ok(FittedNaiveBayes {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::new()
    }
}

/// Learned priors and likelihoods. Read-only after fitting; constructed
/// only through [`MultinomialNb::fit`].
#[derive(Debug, Clone)]
pub struct FittedNaiveBayes {
    classes: Vec<String>,
    class_log_prior: Vec<f64>,
    /// Log conditional likelihood per class, dense over the feature space.
    feature_log_prob: Vec<Vec<f64>>,
}

impl FittedNaiveBayes {
    fn joint_log_likelihood(&self, features: &SparseVector) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_prob)| {
                let mut score = *prior;
                for (index, value) in features.iter() {
                    score += value * log_prob[index];
                }
                score
            })
            .collect()
    }
}

impl ProbabilisticModel for FittedNaiveBayes {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict_proba(&self, features: &SparseVector) -> Vec<f64> {
        let jll = self.joint_log_likelihood(features);
        // Softmax over the joint log likelihoods, shifted by the max for
        // numerical stability.
        let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut proba: Vec<f64> = jll.iter().map(|&value| (value - max).exp()).collect();
        let total: f64 = proba.iter().sum();
        for p in proba.iter_mut() {
            *p /= total;
        }
        proba
    }
}
