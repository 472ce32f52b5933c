//! Percentage breakdowns and entropy over an association table
//!
//! A word whose associations sum to zero (including a word missing from the
//! table) has an empty report and an entropy of exactly `0.0`.

use crate::association::AssociationTable;
use crate::format::format_general;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Significant digits used by the text renderings
const DISPLAY_DIGITS: usize = 3;

/// One line of a word's association report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Association {
    /// The associated word
    pub word: String,
    /// Raw co-occurrence count
    pub count: u64,
    /// Fraction of the reported word's total, in `0.0..=1.0`
    #[serde(skip)]
    pub share: f64,
    /// `share` expressed as a percentage
    pub percent: f64,
}

impl Association {
    fn new(word: &str, count: u64, total: u64) -> Self {
        let share = count as f64 / total as f64;
        Self {
            word: word.to_string(),
            count,
            share,
            percent: share * 100.0,
        }
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>10}% : {}",
            format_general(self.percent, DISPLAY_DIGITS),
            self.word
        )
    }
}

/// Entropy of a single word
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordEntropy {
    /// The word
    pub word: String,
    /// Shannon entropy of its associations, in nats
    pub entropy: f64,
}

impl fmt::Display for WordEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            format_general(self.entropy, DISPLAY_DIGITS),
            self.word
        )
    }
}

/// Associations of `word`, most frequent first
///
/// Entries are ordered by `(1 - share, word)`, so equal shares fall back to
/// alphabetical order.
pub fn report(table: &AssociationTable, word: &str) -> Vec<Association> {
    let total = table.total(word);
    let Some(others) = table.associations(word).filter(|_| total > 0) else {
        return Vec::new();
    };

    let mut entries: Vec<Association> = others
        .iter()
        .map(|(other, &count)| Association::new(other, count, total))
        .collect();
    entries.sort_by(|a, b| {
        (1.0 - a.share)
            .total_cmp(&(1.0 - b.share))
            .then_with(|| a.word.cmp(&b.word))
    });
    entries
}

/// Shannon entropy (natural log) of the association distribution of `word`
///
/// Lower values mean the word's company is more predictable.
pub fn entropy(table: &AssociationTable, word: &str) -> f64 {
    let total = table.total(word);
    let Some(others) = table.associations(word).filter(|_| total > 0) else {
        return 0.0;
    };

    let total = total as f64;
    others
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| count as f64 / total)
        .fold(0.0, |h, p| h - p * p.ln())
}

/// Entropy of every word in the table, lowest first, ties broken by word
pub fn rank_by_entropy(table: &AssociationTable) -> Vec<WordEntropy> {
    let mut ranking: Vec<WordEntropy> = table
        .words()
        .map(|word| WordEntropy {
            word: word.to_string(),
            entropy: entropy(table, word),
        })
        .collect();
    ranking.sort_by(compare_entropy);
    ranking
}

fn compare_entropy(a: &WordEntropy, b: &WordEntropy) -> Ordering {
    a.entropy
        .total_cmp(&b.entropy)
        .then_with(|| a.word.cmp(&b.word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::association::AssociationBuilder;

    fn table(lines: &[&str]) -> AssociationTable {
        AssociationBuilder::with_max_skip(None).build(lines.iter().copied())
    }

    #[test]
    fn test_report_ordering() {
        let t = table(&["the quick fox", "the lazy fox"]);
        let r = report(&t, "the");

        let words: Vec<&str> = r.iter().map(|a| a.word.as_str()).collect();
        assert_eq!(words, vec!["fox", "lazy", "quick"]);
        assert_eq!(r[0].count, 2);
        assert!((r[0].percent - 50.0).abs() < 1e-9);
        assert!((r[1].percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_absent_word_is_empty() {
        let t = table(&["a b"]);
        assert!(report(&t, "missing").is_empty());
        assert!(report(&AssociationTable::new(), "a").is_empty());
    }

    #[test]
    fn test_report_line_rendering() {
        let t = table(&["the quick fox", "the lazy fox"]);
        let lines: Vec<String> = report(&t, "the").iter().map(|a| a.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "        50% : fox".to_string(),
                "        25% : lazy".to_string(),
                "        25% : quick".to_string(),
            ]
        );
    }

    #[test]
    fn test_report_thirds() {
        let t = table(&["a b c d"]);
        let r = report(&t, "a");
        assert_eq!(r.len(), 3);
        assert_eq!(r[0].to_string(), "      33.3% : b");
    }

    #[test]
    fn test_entropy_single_associate_is_zero() {
        let t = table(&["a b", "a b", "a b"]);
        let h = entropy(&t, "a");
        assert_eq!(h, 0.0);
        assert!(h.is_sign_positive());
    }

    #[test]
    fn test_entropy_uniform_pair() {
        let t = table(&["a b c"]);
        let h = entropy(&t, "a");
        assert!((h - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_absent_word() {
        assert_eq!(entropy(&AssociationTable::new(), "ghost"), 0.0);
    }

    #[test]
    fn test_rank_by_entropy_order() {
        // a: {b:1}, b: {a:1, c:1}, c: {b:1}
        let t = AssociationBuilder::with_max_skip(Some(2)).build(["a b c"]);
        let ranking = rank_by_entropy(&t);
        let words: Vec<&str> = ranking.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["a", "c", "b"]);
        assert_eq!(ranking[0].to_string(), "0: a");
        assert_eq!(ranking[2].to_string(), "0.693: b");
    }
}
