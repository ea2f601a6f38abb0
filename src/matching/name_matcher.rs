//! Name similarity scoring.
//!
//! Scores run 0-95:
//! - 95 for names equal after normalization
//! - 10-95 for substring matches, scaled by how much of the name the query covers
//! - 0-85 for Levenshtein similarity, dropped entirely when more than half
//!   the characters differ

use crate::models::Contact;

/// A suggested contact name with its confidence score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub confidence: u8,
}

/// Ranks contact names by similarity to a query.
#[derive(Debug, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Suggest contact names similar to `query`.
    ///
    /// Each distinct name appears once. Results are sorted by confidence
    /// (highest first), then by name, and truncated to `max_results`.
    pub fn suggest(
        &self,
        query: &str,
        contacts: &[Contact],
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<Suggestion> {
        let query = Self::normalize_name(query);
        let mut results: Vec<Suggestion> = Vec::new();

        for contact in contacts {
            if results.iter().any(|s| s.name == contact.name) {
                continue;
            }
            let confidence = Self::score(&query, &Self::normalize_name(&contact.name));
            if confidence > 0 && confidence >= min_confidence {
                results.push(Suggestion {
                    name: contact.name.clone(),
                    confidence,
                });
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.name.cmp(&b.name))
        });
        results.truncate(max_results);
        results
    }

    /// Similarity of two already-normalized names.
    pub fn score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Edit distance over chars, single-row dynamic programming.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let b: Vec<char> = s2.chars().collect();
        let mut row: Vec<usize> = (0..=b.len()).collect();

        for (i, ca) in s1.chars().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, cb) in b.iter().enumerate() {
                let above = row[j + 1];
                let cost = usize::from(ca != *cb);
                row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
                diagonal = above;
            }
        }

        row[b.len()]
    }

    /// Lowercase and collapse whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
