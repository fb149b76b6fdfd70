//! Edit distance between sentences
//!
//! Costs are passed per call through [`EditCosts`]; there is no shared
//! configuration, so concurrent validators can use different weights.

use serde::{Deserialize, Serialize};

/// Weights of the three edit operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditCosts {
    /// Cost of inserting a character
    pub insertion: usize,
    /// Cost of deleting a character
    pub deletion: usize,
    /// Cost of replacing a character
    pub substitution: usize,
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            insertion: 1,
            deletion: 1,
            substitution: 1,
        }
    }
}

/// Weighted Levenshtein distance between two strings, by character
///
/// # Example
///
/// ```
/// use quill_validate::distance::{levenshtein, EditCosts};
///
/// assert_eq!(levenshtein("kitten", "sitting", &EditCosts::default()), 3);
/// ```
pub fn levenshtein(a: &str, b: &str, costs: &EditCosts) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // single row of the DP table
    let mut row: Vec<usize> = (0..=b.len()).map(|j| j * costs.insertion).collect();

    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = (i + 1) * costs.deletion;
        for (j, cb) in b.iter().enumerate() {
            let replace = if ca == cb {
                diagonal
            } else {
                diagonal + costs.substitution
            };
            let delete = row[j + 1] + costs.deletion;
            let insert = row[j] + costs.insertion;
            diagonal = row[j + 1];
            row[j + 1] = replace.min(delete).min(insert);
        }
    }

    row[b.len()]
}
