//! Mask versus continuous data heuristic.
//!
//! Nothing in an NRRD header says whether a volume holds labels. A volume is
//! taken for a mask when its non-zero samples, truncated to integers, take
//! few distinct values and all of them lie in `[0, label_limit)`. Continuous
//! data with few distinct values is therefore reported as a mask.
use log::debug;
use std::collections::BTreeSet;

/// Outcome of inspecting the sample distribution of a volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Discrete labels; `labels` are the distinct non-zero values, truncated
    /// and sorted.
    Mask {
        /// Sorted distinct labels.
        labels: Vec<i64>,
    },
    /// Continuous intensities.
    Continuous,
}

impl Classification {
    /// Classify samples with the given thresholds.
    pub fn of(samples: &[f32], max_labels: usize, label_limit: i64) -> Self {
        let mut labels = BTreeSet::new();
        for &v in samples.iter().filter(|&&v| v != 0.) {
            let _ = labels.insert(v as i64);
            if labels.len() > max_labels {
                debug!("more than {} distinct values, continuous data", max_labels);
                return Classification::Continuous;
            }
        }
        if labels.iter().all(|&l| l >= 0 && l < label_limit) {
            debug!("mask with {} labels", labels.len());
            Classification::Mask {
                labels: labels.into_iter().collect(),
            }
        } else {
            Classification::Continuous
        }
    }

    /// Whether the samples are discrete labels.
    pub fn is_mask(&self) -> bool {
        matches!(self, Classification::Mask { .. })
    }

    /// The distinct labels of a mask; empty for continuous data.
    pub fn labels(&self) -> &[i64] {
        match self {
            Classification::Mask { labels } => labels.as_slice(),
            Classification::Continuous => &[],
        }
    }
}
