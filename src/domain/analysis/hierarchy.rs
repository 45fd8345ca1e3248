//! Hierarchy structure - levels and validated parent/child attribution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AnalysisError;

/// One level of a decision hierarchy: a name and an ordered item list.
///
/// Items are distinct by position; duplicate labels are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub items: Vec<String>,
}

impl Level {
    /// Creates a level from a name and item labels.
    pub fn new(name: impl Into<String>, items: Vec<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            items: items.into_iter().map(|i| i.into()).collect(),
        }
    }

    /// Number of items on this level.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the level has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Contiguous block of a level's items belonging to one parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpan {
    /// Index of the block's first item within the level.
    pub start: usize,
    /// Number of items in the block.
    pub len: usize,
}

/// How a level's items are attributed to the parent level's items.
///
/// Classified once during validation from the supplied matrix sizes, so
/// the composition loop never re-infers block boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChildAttribution {
    /// Items are partitioned across parents in positional order; one
    /// span per parent, spans covering the level exactly.
    Partitioned { spans: Vec<ItemSpan> },
    /// Every parent judges the full item list (the classic
    /// alternatives-under-every-criterion shape).
    Shared,
}

impl ChildAttribution {
    /// Classifies a level's matrix sizes against its item count.
    ///
    /// A matrix list whose sizes sum to the item count partitions the
    /// level (strict tree); a list where every matrix covers the whole
    /// item list is shared attribution. The two readings only coincide
    /// for a single parent judging the full level, where the block
    /// span and the shared sum are the same computation.
    ///
    /// # Errors
    ///
    /// - `Structural` when the matrix count does not match the parent
    ///   level's item count.
    /// - `DimensionMismatch` when the sizes fit neither reading, naming
    ///   the first matrix whose size differs from the item count.
    pub fn classify(
        level: usize,
        level_name: &str,
        item_count: usize,
        parent_items: &[String],
        matrix_sizes: &[usize],
    ) -> Result<Self, AnalysisError> {
        if matrix_sizes.len() != parent_items.len() {
            return Err(AnalysisError::structural(format!(
                "level {} ({}) requires {} matrices (one per parent item), got {}",
                level,
                level_name,
                parent_items.len(),
                matrix_sizes.len()
            )));
        }

        let covered: usize = matrix_sizes.iter().sum();
        if covered == item_count {
            let mut spans = Vec::with_capacity(matrix_sizes.len());
            let mut offset = 0;
            for len in matrix_sizes {
                spans.push(ItemSpan {
                    start: offset,
                    len: *len,
                });
                offset += len;
            }
            return Ok(ChildAttribution::Partitioned { spans });
        }

        if matrix_sizes.iter().all(|size| *size == item_count) {
            return Ok(ChildAttribution::Shared);
        }

        let (at_fault, size) = matrix_sizes
            .iter()
            .enumerate()
            .find(|(_, size)| **size != item_count)
            .expect("some matrix size must differ when shared attribution does not hold");

        Err(AnalysisError::dimension_mismatch(
            format!(
                "level {} ({}), parent {} ({})",
                level, level_name, at_fault, parent_items[at_fault]
            ),
            item_count,
            *size,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parents(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn level_new_converts_labels() {
        let level = Level::new("Criteria", vec!["Cost", "Quality"]);
        assert_eq!(level.name, "Criteria");
        assert_eq!(level.len(), 2);
        assert!(!level.is_empty());
    }

    #[test]
    fn classify_partitioned_builds_spans_with_running_offset() {
        let attribution = ChildAttribution::classify(
            1,
            "Sub-criteria",
            5,
            &parents(&["A", "B"]),
            &[2, 3],
        )
        .unwrap();

        assert_eq!(
            attribution,
            ChildAttribution::Partitioned {
                spans: vec![
                    ItemSpan { start: 0, len: 2 },
                    ItemSpan { start: 2, len: 3 },
                ]
            }
        );
    }

    #[test]
    fn classify_shared_when_every_matrix_covers_the_level() {
        let attribution = ChildAttribution::classify(
            1,
            "Alternatives",
            3,
            &parents(&["Cost", "Quality"]),
            &[3, 3],
        )
        .unwrap();

        assert_eq!(attribution, ChildAttribution::Shared);
    }

    #[test]
    fn classify_single_parent_whole_level_is_partitioned() {
        // Both readings coincide here; the span covers the level.
        let attribution =
            ChildAttribution::classify(1, "Alternatives", 4, &parents(&["Goal"]), &[4]).unwrap();

        assert_eq!(
            attribution,
            ChildAttribution::Partitioned {
                spans: vec![ItemSpan { start: 0, len: 4 }]
            }
        );
    }

    #[test]
    fn classify_rejects_wrong_matrix_count() {
        let result =
            ChildAttribution::classify(2, "Alternatives", 4, &parents(&["A", "B", "C"]), &[4, 4]);

        match result {
            Err(AnalysisError::Structural { reason }) => {
                assert!(reason.contains("level 2"));
                assert!(reason.contains("3 matrices"));
                assert!(reason.contains("got 2"));
            }
            other => panic!("Expected Structural, got {:?}", other),
        }
    }

    #[test]
    fn classify_rejects_sizes_fitting_neither_reading() {
        let result = ChildAttribution::classify(
            1,
            "Alternatives",
            4,
            &parents(&["Cost", "Quality"]),
            &[4, 3],
        );

        match result {
            Err(AnalysisError::DimensionMismatch {
                context,
                expected,
                actual,
            }) => {
                assert!(context.contains("parent 1 (Quality)"));
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("Expected DimensionMismatch, got {:?}", other),
        }
    }
}
