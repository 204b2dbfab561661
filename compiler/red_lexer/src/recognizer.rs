//! Token recognizers.
//!
//! A recognizer classifies the text of one cell. It is backed by a compiled,
//! case-insensitive regular expression anchored at the cell start and tags
//! what it matched with a single [`RobotTokenType`].
//!
//! Recognizers are version gated: [`TokenRecognizer::is_applicable_for`] says
//! whether a recognizer belongs to the grammar of a given Robot Framework
//! version. The compiled pattern is shared; [`TokenRecognizer::new_instance`]
//! hands out a copy with a clean match state for each use.

use std::sync::Arc;

use red_ir::{FilePosition, RobotToken, RobotTokenType, RobotVersion};
use regex::Regex;

/// Version window of a recognizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Applicability {
    Always,
    /// From this version on.
    Since(RobotVersion),
    /// Strictly older versions only.
    Before(RobotVersion),
    /// `Since(from)` and `Before(until)` together.
    Between(RobotVersion, RobotVersion),
}

impl Applicability {
    pub fn window(from: Option<RobotVersion>, until: Option<RobotVersion>) -> Self {
        match (from, until) {
            (None, None) => Applicability::Always,
            (Some(from), None) => Applicability::Since(from),
            (None, Some(until)) => Applicability::Before(until),
            (Some(from), Some(until)) => Applicability::Between(from, until),
        }
    }

    pub fn contains(self, version: RobotVersion) -> bool {
        match self {
            Applicability::Always => true,
            Applicability::Since(from) => version.is_newer_or_equal_to(from),
            Applicability::Before(until) => version.is_older_than(until),
            Applicability::Between(from, until) => {
                version.is_newer_or_equal_to(from) && version.is_older_than(until)
            }
        }
    }
}

/// Pattern-backed cell classifier.
#[derive(Clone, Debug)]
pub struct TokenRecognizer {
    name: &'static str,
    pattern: Arc<Regex>,
    produced: RobotTokenType,
    applicability: Applicability,
    continue_with_others: bool,
    matched: Option<RobotToken>,
}

impl TokenRecognizer {
    pub fn new(name: &'static str, pattern: Regex, produced: RobotTokenType) -> Self {
        TokenRecognizer {
            name,
            pattern: Arc::new(pattern),
            produced,
            applicability: Applicability::Always,
            continue_with_others: true,
            matched: None,
        }
    }

    #[must_use]
    pub fn with_applicability(mut self, applicability: Applicability) -> Self {
        self.applicability = applicability;
        self
    }

    /// Stops the chain after this recognizer matches.
    #[must_use]
    pub fn exclusive(mut self) -> Self {
        self.continue_with_others = false;
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn produced_type(&self) -> RobotTokenType {
        self.produced
    }

    #[inline]
    pub fn applicability(&self) -> Applicability {
        self.applicability
    }

    pub fn is_applicable_for(&self, version: RobotVersion) -> bool {
        self.applicability.contains(version)
    }

    /// Whether later recognizers may also tag a cell this one matched.
    pub fn should_continue_with_other_recognizers(&self) -> bool {
        self.continue_with_others
    }

    /// Same recognizer, nothing matched yet.
    #[must_use]
    pub fn new_instance(&self) -> Self {
        TokenRecognizer {
            matched: None,
            ..self.clone()
        }
    }

    /// Tries `text` and keeps the match for [`TokenRecognizer::next`].
    ///
    /// The token produced covers only the matched prefix of `text`. Its
    /// offset is the column, since a recognizer does not know where the line
    /// starts in the file.
    pub fn has_next(&mut self, text: &str, line_number: u32, start_column: u32) -> bool {
        self.matched = self.pattern.find(text).filter(|m| m.start() == 0).map(|m| {
            RobotToken::create_positioned(
                m.as_str(),
                FilePosition::new(line_number, start_column, start_column),
                self.produced,
            )
        });
        self.matched.is_some()
    }

    /// Takes the token found by the last successful [`TokenRecognizer::has_next`].
    pub fn next(&mut self) -> Option<RobotToken> {
        self.matched.take()
    }

    /// Length in bytes of the match of `text`, if any, without keeping state.
    pub fn match_length(&self, text: &str) -> Option<usize> {
        self.pattern
            .find(text)
            .filter(|m| m.start() == 0)
            .map(|m| m.end())
    }
}

/// Case-insensitive pattern for `word` tolerating whitespace between letters.
pub fn word_with_spaces_inside(word: &str) -> String {
    let mut pattern = String::new();
    for (index, ch) in word.chars().enumerate() {
        if index > 0 {
            pattern.push_str(r"\s*");
        }
        if ch != ' ' {
            pattern.push_str(&regex::escape(&ch.to_string()));
        }
    }
    pattern
}

/// Alternation of `words`, longest first so prefixes do not win.
pub fn alternatives<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut words: Vec<&str> = words.into_iter().collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words.dedup();
    let parts: Vec<String> = words.into_iter().map(word_with_spaces_inside).collect();
    format!("(?:{})", parts.join("|"))
}

#[cfg(test)]
mod tests;
