//! Identifier generation for QTI elements.
//!
//! Identifiers are opaque tokens: the letter `g` followed by 24 lowercase
//! hex digits. Generation is a capability handed to the assembler so tests
//! can swap in a deterministic sequence.

use uuid::Uuid;

/// Prefix shared by every generated identifier.
pub const ID_PREFIX: char = 'g';

/// Number of hex digits after the prefix.
pub const ID_HEX_DIGITS: usize = 24;

/// Source of unique identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Random identifiers backed by v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("{ID_PREFIX}{}", &hex[..ID_HEX_DIGITS])
    }
}

/// Deterministic identifiers counting up from a starting value.
///
/// ```
/// use mdqti::qti::{IdGenerator, SequentialIds};
///
/// let mut ids = SequentialIds::new();
/// assert_eq!(ids.next_id(), "g000000000000000000000001");
/// assert_eq!(ids.next_id(), "g000000000000000000000002");
/// ```
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(start: u128) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{ID_PREFIX}{:0width$x}", self.next, width = ID_HEX_DIGITS);
        self.next += 1;
        id
    }
}

/// Check that a string has the generated identifier shape.
pub fn is_identifier(s: &str) -> bool {
    s.strip_prefix(ID_PREFIX).is_some_and(|hex| {
        hex.len() == ID_HEX_DIGITS && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    })
}
