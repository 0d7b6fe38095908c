//! Unicode-aware tokenization
//!
//! Sentence and word segmentation follow UAX #29 (via `unicode-segmentation`).
//! Before segmenting, a single line break inside a paragraph is read as a
//! space so hard-wrapped text is not cut at every line; blank lines still end
//! a sentence. Segments ending in a common abbreviation ("Dr.", "e.g.") are
//! joined with the segment that follows.
//!
//! Each sentence also gets a cleaned form: lower-cased alphanumeric words with
//! stopwords removed, joined by single spaces.

use crate::nlp::stopwords::StopwordFilter;
use crate::types::Sentence;
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations (lower-case, without the final period) that do not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "e.g", "i.e", "inc", "ltd",
];

/// Sentences of a document alongside their cleaned forms
///
/// `sentences[i]` and `cleaned[i]` always describe the same sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preprocessed {
    /// Original sentences in document order
    pub sentences: Vec<Sentence>,
    /// Cleaned sentence per original sentence (may be empty)
    pub cleaned: Vec<String>,
}

impl Preprocessed {
    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the document produced no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A Unicode-aware tokenizer following UAX #29
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Split text into sentences and their cleaned forms
    pub fn preprocess(&self, text: &str, stopwords: &StopwordFilter) -> Preprocessed {
        let sentences = self.segment(text);
        let cleaned = sentences
            .iter()
            .map(|s| self.clean_sentence(&s.text, stopwords))
            .collect();

        Preprocessed { sentences, cleaned }
    }

    /// Split text into sentences in document order
    ///
    /// Whitespace-only segments are dropped; every other byte of the input
    /// belongs to exactly one sentence. Offsets index the original text, while
    /// the sentence text has in-paragraph line breaks replaced by spaces.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let unwrapped = Self::unwrap_lines(text);
        let boundaries = self.merge_abbreviations(&unwrapped, self.sentence_boundaries(&unwrapped));

        boundaries
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| {
                Sentence::new(unwrapped[start..end].trim(), start, end, index)
            })
            .collect()
    }

    /// Split a sentence into word tokens
    pub fn tokenize_words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence.unicode_words().collect()
    }

    /// Normalize a sentence into space-joined significant words
    ///
    /// Returns an empty string when every word is a stopword or punctuation.
    pub fn clean_sentence(&self, sentence: &str, stopwords: &StopwordFilter) -> String {
        let lower = sentence.to_lowercase();
        self.tokenize_words(&lower)
            .into_iter()
            .filter(|word| Self::is_alphanumeric(word) && !stopwords.is_stopword(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn is_alphanumeric(word: &str) -> bool {
        !word.is_empty() && word.chars().all(char::is_alphanumeric)
    }

    /// Replace line breaks that do not form a blank line with spaces
    ///
    /// Only ASCII bytes are swapped for ASCII spaces, so byte offsets into the
    /// result are valid offsets into `text`.
    fn unwrap_lines(text: &str) -> Cow<'_, str> {
        if !text.contains(|c: char| c == '\n' || c == '\r') {
            return Cow::Borrowed(text);
        }

        let bytes = text.as_bytes();
        let mut to_space = vec![false; bytes.len()];
        let mut i = 0;
        while i < bytes.len() {
            if !matches!(bytes[i], b'\n' | b'\r') {
                i += 1;
                continue;
            }
            let start = i;
            let mut newlines = 0;
            while i < bytes.len() && matches!(bytes[i], b' ' | b'\t' | b'\n' | b'\r') {
                if bytes[i] == b'\n' {
                    newlines += 1;
                }
                i += 1;
            }
            if newlines <= 1 {
                for (flag, byte) in to_space[start..i].iter_mut().zip(&bytes[start..i]) {
                    *flag = matches!(*byte, b'\n' | b'\r');
                }
            }
        }

        Cow::Owned(
            text.char_indices()
                .map(|(pos, c)| if to_space[pos] { ' ' } else { c })
                .collect(),
        )
    }

    /// Join each segment that ends in an abbreviation with the next segment
    fn merge_abbreviations(
        &self,
        text: &str,
        boundaries: Vec<(usize, usize)>,
    ) -> Vec<(usize, usize)> {
        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(boundaries.len());
        let mut extend_last = false;

        for (start, end) in boundaries {
            match merged.last_mut() {
                Some(last) if extend_last => last.1 = end,
                _ => merged.push((start, end)),
            }
            extend_last = false;

            if let Some(&(seg_start, seg_end)) = merged.last() {
                extend_last = Self::ends_with_abbreviation(&text[seg_start..seg_end]);
            }
        }

        merged
    }

    fn ends_with_abbreviation(segment: &str) -> bool {
        let Some(body) = segment.trim_end().strip_suffix('.') else {
            return false;
        };
        let last = body
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or(body)
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();

        ABBREVIATIONS.contains(&last.as_str())
    }

    /// Find sentence boundaries in text
    fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let mut boundaries = Vec::new();
        let mut start = 0;

        for (idx, _) in text.split_sentence_bound_indices() {
            if idx > start && !text[start..idx].trim().is_empty() {
                boundaries.push((start, idx));
            }
            start = idx;
        }

        if start < text.len() && !text[start..].trim().is_empty() {
            boundaries.push((start, text.len()));
        }

        if boundaries.is_empty() && !text.trim().is_empty() {
            boundaries.push((0, text.len()));
        }

        boundaries
    }
}
