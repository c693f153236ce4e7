// Character n-gram TF-IDF vectorizer.
//
// Mirrors the transform half of a fitted sklearn TfidfVectorizer with a
// char analyzer: lowercase the text, count vocabulary n-gram hits,
// multiply by the stored idf weights, then L2-normalize over the hits.
// Only the vocabulary learned at training time ever produces a column;
// unseen n-grams are dropped, never hashed.

use std::collections::HashMap;

use anyhow::Result;

use super::traits::SparseVector;

/// Fitted vectorizer state: vocabulary mapping n-grams to columns plus
/// one idf weight per column.
#[derive(Debug, Clone)]
pub struct CharGramVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_min: usize,
    ngram_max: usize,
}

impl CharGramVectorizer {
    /// Build a vectorizer from exported state, rejecting inconsistent
    /// shapes up front so `transform` can index without checks.
    pub fn new(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f64>,
        ngram_min: usize,
        ngram_max: usize,
    ) -> Result<Self> {
        if ngram_min == 0 || ngram_min > ngram_max {
            anyhow::bail!("Invalid n-gram range {ngram_min}..={ngram_max}");
        }
        if idf.len() != vocabulary.len() {
            anyhow::bail!(
                "Vectorizer idf length {} does not match vocabulary size {}",
                idf.len(),
                vocabulary.len()
            );
        }
        if let Some((gram, &col)) = vocabulary.iter().find(|(_, &col)| col >= idf.len()) {
            anyhow::bail!(
                "Vocabulary entry {gram:?} maps to column {col}, past the idf table"
            );
        }
        Ok(Self {
            vocabulary,
            idf,
            ngram_min,
            ngram_max,
        })
    }

    /// Number of columns in the text block of the model input.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Transform one URL into its sparse TF-IDF vector.
    ///
    /// Too-short inputs and inputs with no vocabulary hits produce an
    /// empty vector, which the linear model treats as an all-zero text
    /// block.
    pub fn transform(&self, text: &str) -> SparseVector {
        let lower = text.to_lowercase();
        let chars: Vec<char> = lower.chars().collect();

        let mut counts: HashMap<usize, f64> = HashMap::new();
        let mut gram = String::new();
        for n in self.ngram_min..=self.ngram_max {
            if chars.len() < n {
                break;
            }
            for window in chars.windows(n) {
                gram.clear();
                gram.extend(window.iter());
                if let Some(&col) = self.vocabulary.get(gram.as_str()) {
                    *counts.entry(col).or_insert(0.0) += 1.0;
                }
            }
        }

        // Columns come from the vocabulary, which new() checked against
        // the idf table, so direct indexing is safe here.
        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(col, count)| (col, count * self.idf[col]))
            .collect();

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut entries {
                *weight /= norm;
            }
        }
        entries.sort_unstable_by_key(|&(col, _)| col);

        SparseVector { entries }
    }
}
