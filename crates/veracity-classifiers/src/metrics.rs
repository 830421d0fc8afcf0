//! Evaluation metrics for the held-out split.
//!
//! Accuracy plus a per-class precision/recall/F1 report computed from
//! confusion counts, with macro and weighted averages. Classes with zero
//! predicted or zero actual instances report 1.0 for the affected metric
//! by policy instead of raising a division error.

use std::collections::BTreeSet;
use std::fmt;

/// Value reported when a precision or recall denominator is zero.
const ZERO_DIVISION_FALLBACK: f64 = 1.0;

/// Fraction of rows where the predicted label equals the actual label.
/// Empty input scores 0.0.
pub fn accuracy(actual: &[String], predicted: &[String]) -> f64 {
    assert_eq!(
        actual.len(),
        predicted.len(),
        "actual and predicted label counts differ"
    );
    if actual.is_empty() {
        return 0.0;
    }
    let correct = actual
        .iter()
        .zip(predicted)
        .filter(|(a, p)| a == p)
        .count();
    correct as f64 / actual.len() as f64
}

/// Precision/recall/F1 and support for one class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of actual instances of the class.
    pub support: usize,
}

/// Per-class metrics plus overall accuracy, in sorted label order.
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    pub accuracy: f64,
    pub per_class: Vec<(String, ClassMetrics)>,
}

/// Compute the report from actual and predicted label sequences. The class
/// set is the union of labels seen on either side, sorted ascending.
pub fn classification_report(actual: &[String], predicted: &[String]) -> ClassificationReport {
    assert_eq!(
        actual.len(),
        predicted.len(),
        "actual and predicted label counts differ"
    );

    let classes: BTreeSet<&str> = actual
        .iter()
        .chain(predicted)
        .map(|label| label.as_str())
        .collect();

    let per_class = classes
        .into_iter()
        .map(|class| {
            let mut tp = 0usize;
            let mut fp = 0usize;
            let mut fn_ = 0usize;
            for (a, p) in actual.iter().zip(predicted) {
                match (a == class, p == class) {
                    (true, true) => tp += 1,
                    (false, true) => fp += 1,
                    (true, false) => fn_ += 1,
                    (false, false) => {}
                }
            }

            let precision = if tp + fp > 0 {
                tp as f64 / (tp + fp) as f64
            } else {
                ZERO_DIVISION_FALLBACK
            };
            let recall = if tp + fn_ > 0 {
                tp as f64 / (tp + fn_) as f64
            } else {
                ZERO_DIVISION_FALLBACK
            };
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            let metrics = ClassMetrics {
                precision,
                recall,
                f1,
                support: tp + fn_,
            };
            (class.to_string(), metrics)
        })
        .collect();

    ClassificationReport {
        accuracy: accuracy(actual, predicted),
        per_class,
    }
}

impl ClassificationReport {
    /// Total number of evaluated rows.
    pub fn total_support(&self) -> usize {
        self.per_class.iter().map(|(_, m)| m.support).sum()
    }

    /// Unweighted mean of the per-class metrics.
    pub fn macro_avg(&self) -> ClassMetrics {
        let n = self.per_class.len().max(1) as f64;
        let (mut precision, mut recall, mut f1) = (0.0, 0.0, 0.0);
        for (_, m) in &self.per_class {
            precision += m.precision;
            recall += m.recall;
            f1 += m.f1;
        }
        ClassMetrics {
            precision: precision / n,
            recall: recall / n,
            f1: f1 / n,
            support: self.total_support(),
        }
    }

    /// Support-weighted mean of the per-class metrics.
    pub fn weighted_avg(&self) -> ClassMetrics {
        let total = self.total_support();
        let denom = total.max(1) as f64;
        let (mut precision, mut recall, mut f1) = (0.0, 0.0, 0.0);
        for (_, m) in &self.per_class {
            let weight = m.support as f64;
            precision += m.precision * weight;
            recall += m.recall * weight;
            f1 += m.f1 * weight;
        }
        ClassMetrics {
            precision: precision / denom,
            recall: recall / denom,
            f1: f1 / denom,
            support: total,
        }
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .per_class
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0)
            .max("weighted avg".len());

        writeln!(
            f,
            "{:>label_width$}  {:>9}  {:>9}  {:>9}  {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for (label, m) in &self.per_class {
            writeln!(
                f,
                "{:>label_width$}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9}",
                label, m.precision, m.recall, m.f1, m.support
            )?;
        }
        writeln!(f)?;

        let total = self.total_support();
        writeln!(
            f,
            "{:>label_width$}  {:>9}  {:>9}  {:>9.2}  {:>9}",
            "accuracy", "", "", self.accuracy, total
        )?;
        let macro_avg = self.macro_avg();
        writeln!(
            f,
            "{:>label_width$}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9}",
            "macro avg", macro_avg.precision, macro_avg.recall, macro_avg.f1, total
        )?;
        let weighted = self.weighted_avg();
        write!(
            f,
            "{:>label_width$}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9}",
            "weighted avg", weighted.precision, weighted.recall, weighted.f1, total
        )
    }
}
