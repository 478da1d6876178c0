//! Revision display-order policies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use syncmark_core::{BenchmarkHistory, Error, RevisionId};

/// How the revision index is ordered for display.
///
/// A configuration choice resolved once per deployment, never a per-call
/// decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevisionOrder {
    /// Reverse of the feed document's key order. The deployment default:
    /// the feed is appended chronologically and its keys (version tags,
    /// commit hashes) are not sortable, so reversal yields most-recent-first.
    #[default]
    ReverseInsertion,
    /// Keys sorted by string comparison, for feeds whose keys are directly
    /// comparable (e.g. numeric build identifiers).
    Lexicographic,
}

impl RevisionOrder {
    /// Build the ordered revision index from a history's keys.
    ///
    /// An empty history yields an empty index, never an error.
    pub fn index(&self, history: &BenchmarkHistory) -> Vec<RevisionId> {
        let mut revisions: Vec<RevisionId> = history.revisions().map(str::to_owned).collect();
        match self {
            RevisionOrder::ReverseInsertion => revisions.reverse(),
            RevisionOrder::Lexicographic => revisions.sort(),
        }
        revisions
    }
}

impl fmt::Display for RevisionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevisionOrder::ReverseInsertion => f.write_str("reverse-insertion"),
            RevisionOrder::Lexicographic => f.write_str("lexicographic"),
        }
    }
}

impl FromStr for RevisionOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reverse-insertion" | "reverse_insertion" => Ok(RevisionOrder::ReverseInsertion),
            "lexicographic" => Ok(RevisionOrder::Lexicographic),
            _ => Err(Error::invalid_input(format!(
                "unknown revision order: {s}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> BenchmarkHistory {
        BenchmarkHistory::from_json_str(
            r#"{"v1.0.0": {}, "v1.2.0": {}, "v1.1.0": {}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_reverse_insertion_is_exact_reverse_of_document_order() {
        let index = RevisionOrder::ReverseInsertion.index(&history());
        assert_eq!(index, vec!["v1.1.0", "v1.2.0", "v1.0.0"]);
    }

    #[test]
    fn test_lexicographic_sorts_keys() {
        let index = RevisionOrder::Lexicographic.index(&history());
        assert_eq!(index, vec!["v1.0.0", "v1.1.0", "v1.2.0"]);
    }

    #[test]
    fn test_empty_history_yields_empty_index() {
        let index = RevisionOrder::default().index(&BenchmarkHistory::new());
        assert!(index.is_empty());
    }

    #[test]
    fn test_parse_order_names() {
        assert_eq!(
            "reverse-insertion".parse::<RevisionOrder>().unwrap(),
            RevisionOrder::ReverseInsertion
        );
        assert_eq!(
            "lexicographic".parse::<RevisionOrder>().unwrap(),
            RevisionOrder::Lexicographic
        );
        assert!("chronological".parse::<RevisionOrder>().is_err());
    }
}
