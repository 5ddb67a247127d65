use smol_str::SmolStr;
use std::borrow::Borrow;
use std::fmt::Display;

/// An atomic unit of key content: a single character or a whole phrase.
///
/// Tokens are never empty. Equality is by exact content, so `"ab"` as a
/// phrase and the two single-character tokens `"a"`, `"b"` are distinct.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(SmolStr);

impl Token {
    /// Creates a token from the given text, or `None` if the text is empty.
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref();
        if text.is_empty() {
            return None;
        }
        Some(Self(SmolStr::new(text)))
    }

    pub(crate) fn from_char(c: char) -> Self {
        let mut buf = [0_u8; 4];
        Self(SmolStr::new(c.encode_utf8(&mut buf)))
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token holds more than one character.
    pub fn is_phrase(&self) -> bool {
        self.0.chars().nth(1).is_some()
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Token").field(&self.0).finish()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// `SmolStr` hashes exactly like `str`, so set lookups by `&str` are sound.
impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}
