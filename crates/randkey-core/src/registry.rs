use crate::charset::{BuiltinCharset, DIGITS, LOWERCASE};
use crate::error::{RegistryError, Result};
use crate::token::Token;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, trace};

/// An ordered, deduplicated collection of selectable tokens.
///
/// Tokens keep the position at which they were first inserted. That position
/// is the index the generator selects by, so two registries holding the same
/// tokens in a different order produce different deterministic keys for the
/// same seed.
///
/// Empty input is ignored and a token already present is never stored twice.
/// The registry itself never fails for being empty; that is checked at
/// generation time.
///
/// # Example
///
/// ```rust
/// use randkey_core::{BuiltinCharset, TokenRegistry};
///
/// let mut registry = TokenRegistry::new();
/// registry
///     .include(BuiltinCharset::Digits)
///     .add_characters("abc")
///     .add_token("語言");
///
/// let tokens = registry.materialize();
/// assert_eq!(tokens.len(), 14);
/// assert_eq!(tokens[0].as_str(), "0");
/// assert_eq!(tokens[13].as_str(), "語言");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
    seen: HashSet<Token>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts every character of a built-in class that is not yet present.
    pub fn include(&mut self, class: BuiltinCharset) -> &mut Self {
        trace!(class = class.name(), "including builtin charset");
        self.add_characters(class.characters())
    }

    /// Includes lowercase, uppercase, digits and special, in that order.
    pub fn include_all_builtins(&mut self) -> &mut Self {
        for class in BuiltinCharset::ALL {
            self.include(class);
        }
        self
    }

    /// Splits `chars` into one token per Unicode scalar value.
    ///
    /// Grapheme clusters are not kept together here; use
    /// [`add_token`](Self::add_token) for emoji sequences or phrases.
    pub fn add_characters(&mut self, chars: &str) -> &mut Self {
        for c in chars.chars() {
            self.append_unique(Token::from_char(c));
        }
        self
    }

    /// Inserts the whole of `phrase` as a single token.
    pub fn add_token(&mut self, phrase: &str) -> &mut Self {
        if let Some(token) = Token::new(phrase) {
            self.append_unique(token);
        }
        self
    }

    /// Loads tokens from a UTF-8 text file, one line at a time.
    ///
    /// With `treat_line_as_token` every non-empty line becomes one phrase
    /// token; otherwise each line is split into single characters. Line
    /// terminators (`\n` or `\r\n`) are never part of a token.
    pub fn add_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        treat_line_as_token: bool,
    ) -> Result<&mut Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| {
            RegistryError::CharsetFileUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let before = self.tokens.len();
        for line in contents.lines().filter(|line| !line.is_empty()) {
            if treat_line_as_token {
                self.add_token(line);
            } else {
                self.add_characters(line);
            }
        }

        debug!(
            path = %path.display(),
            as_phrase = treat_line_as_token,
            added = self.tokens.len() - before,
            "loaded tokens from file"
        );
        Ok(self)
    }

    /// Fills in lowercase letters followed by digits if, and only if, the
    /// registry is empty. Caller-supplied content is never touched.
    pub fn ensure_default(&mut self) -> &mut Self {
        if self.tokens.is_empty() {
            debug!("registry is empty, applying default charset");
            self.add_characters(LOWERCASE);
            self.add_characters(DIGITS);
        }
        self
    }

    /// Returns a snapshot of the tokens in insertion order.
    ///
    /// The position of a token in the returned vector is its selection index.
    pub fn materialize(&self) -> Vec<Token> {
        self.tokens.clone()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    fn append_unique(&mut self, token: Token) {
        if self.seen.insert(token.clone()) {
            self.tokens.push(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{SPECIAL, UPPERCASE};
    use crate::error::ErrorKind;
    use std::io::Write;

    fn as_strings(registry: &TokenRegistry) -> Vec<String> {
        registry
            .materialize()
            .iter()
            .map(|token| token.as_str().to_owned())
            .collect()
    }

    #[test]
    fn include_twice_is_idempotent() {
        let mut registry = TokenRegistry::new();
        registry.include(BuiltinCharset::Lowercase);
        registry.include(BuiltinCharset::Lowercase);
        assert_eq!(registry.materialize().len(), 26);
    }

    #[test]
    fn include_all_builtins_in_fixed_order() {
        let mut registry = TokenRegistry::new();
        registry.include_all_builtins();

        let expected: Vec<String> = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL]
            .concat()
            .chars()
            .map(String::from)
            .collect();
        assert_eq!(as_strings(&registry), expected);
        assert_eq!(registry.len(), 26 + 26 + 10 + 32);
    }

    #[test]
    fn add_characters_preserves_first_seen_order() {
        let mut registry = TokenRegistry::new();
        registry.add_characters("banana");
        assert_eq!(as_strings(&registry), ["b", "a", "n"]);
    }

    #[test]
    fn add_token_keeps_phrase_whole() {
        let mut registry = TokenRegistry::new();
        registry.add_token("語言").add_token("語言").add_token("");
        assert_eq!(as_strings(&registry), ["語言"]);
    }

    #[test]
    fn phrase_and_its_characters_are_distinct_tokens() {
        let mut registry = TokenRegistry::new();
        registry.add_token("ab").add_characters("ab");
        assert_eq!(as_strings(&registry), ["ab", "a", "b"]);
        assert!(registry.contains("ab"));
        assert!(registry.contains("a"));
    }

    #[test]
    fn ensure_default_fills_empty_registry() {
        let mut registry = TokenRegistry::new();
        registry.ensure_default();

        let expected: Vec<String> = format!("{LOWERCASE}{DIGITS}")
            .chars()
            .map(String::from)
            .collect();
        assert_eq!(as_strings(&registry), expected);
        assert_eq!(registry.len(), 36);

        registry.ensure_default();
        assert_eq!(registry.len(), 36);
    }

    #[test]
    fn ensure_default_never_overrides_content() {
        let mut registry = TokenRegistry::new();
        registry.add_token("xyz");
        registry.ensure_default();
        assert_eq!(as_strings(&registry), ["xyz"]);
    }

    #[test]
    fn materialize_of_empty_registry_is_empty() {
        let registry = TokenRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.materialize().is_empty());
    }

    #[test]
    fn add_from_file_splits_characters() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "abc").unwrap();
        writeln!(file).unwrap();
        write!(file, "cd\r\n").unwrap();

        let mut registry = TokenRegistry::new();
        registry.add_from_file(file.path(), false).unwrap();
        assert_eq!(as_strings(&registry), ["a", "b", "c", "d"]);
    }

    #[test]
    fn add_from_file_treats_lines_as_phrases() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "語言\r\nテスト\n\n語言\n").unwrap();

        let mut registry = TokenRegistry::new();
        registry.add_from_file(file.path(), true).unwrap();
        assert_eq!(as_strings(&registry), ["語言", "テスト"]);
    }

    #[test]
    fn add_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let mut registry = TokenRegistry::new();
        let err = registry.add_from_file(&missing, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CharsetFileUnavailable);
        assert!(registry.is_empty());
    }

    #[test]
    fn add_from_non_utf8_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x61]).unwrap();

        let mut registry = TokenRegistry::new();
        let err = registry.add_from_file(file.path(), false).unwrap_err();
        assert!(matches!(err, RegistryError::CharsetFileUnavailable { .. }));
    }
}
