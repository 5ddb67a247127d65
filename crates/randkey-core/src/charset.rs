//! Built-in character classes.
//!
//! The member sets are fixed literals and their order is part of the
//! generation contract: a class expands into tokens in exactly the order
//! listed here, and that order becomes the selection index space.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// The 32 printable ASCII punctuation characters, in code point order.
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A named built-in character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinCharset {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl BuiltinCharset {
    /// All classes, in the order `include_all_builtins` applies them.
    pub const ALL: [BuiltinCharset; 4] = [
        BuiltinCharset::Lowercase,
        BuiltinCharset::Uppercase,
        BuiltinCharset::Digits,
        BuiltinCharset::Special,
    ];

    /// Returns the literal member set of this class.
    pub fn characters(&self) -> &'static str {
        match self {
            BuiltinCharset::Lowercase => LOWERCASE,
            BuiltinCharset::Uppercase => UPPERCASE,
            BuiltinCharset::Digits => DIGITS,
            BuiltinCharset::Special => SPECIAL,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinCharset::Lowercase => "lowercase",
            BuiltinCharset::Uppercase => "uppercase",
            BuiltinCharset::Digits => "digits",
            BuiltinCharset::Special => "special",
        }
    }
}
