//! Significant characters, terminator sets and delimiter pairs.
//!
//! Every character with lexical meaning is ASCII, so a terminator set is a
//! 128-bit mask and membership is a shift and an AND.

/// String delimiter.
pub const QUOTE: u8 = b'"';
pub const START_ARG: u8 = b'(';
pub const END_ARG: u8 = b')';
pub const START_GROUP: u8 = b'{';
pub const END_GROUP: u8 = b'}';
pub const START_ARRAY: u8 = b'[';
pub const END_ARRAY: u8 = b']';
pub const NEXT_ARG: u8 = b',';
pub const END_STATEMENT: u8 = b';';
pub const SPACE: u8 = b' ';
pub const BACKSLASH: u8 = b'\\';

/// Characters that end a bare token.
pub const TOKEN_SEPARATION: TerminatorSet = TerminatorSet::new(b"<>=+-*/%&|^,!()[]{}\"; ");

/// Characters that end a single item inside an argument list.
pub const ITEM_TERMINATORS: TerminatorSet = TerminatorSet::new(b",]});");

/// A set of ASCII characters at which a scan stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TerminatorSet {
    mask: u128,
}

impl TerminatorSet {
    /// The set that stops nowhere.
    pub const EMPTY: Self = Self { mask: 0 };

    /// Build a set from a list of ASCII bytes.
    ///
    /// # Panics
    ///
    /// Panics if any byte is outside the ASCII range.
    pub const fn new(bytes: &[u8]) -> Self {
        let mut mask = 0u128;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            assert!(b < 128, "terminators must be ASCII");
            mask |= 1u128 << b;
            i += 1;
        }
        Self { mask }
    }

    /// A set holding one character.
    pub const fn single(byte: u8) -> Self {
        Self::new(&[byte])
    }

    #[inline]
    pub const fn contains(self, byte: u8) -> bool {
        byte < 128 && self.mask & (1u128 << byte) != 0
    }

    #[must_use]
    pub const fn with(self, byte: u8) -> Self {
        Self {
            mask: self.mask | Self::single(byte).mask,
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            mask: self.mask | other.mask,
        }
    }

    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }
}

/// An opening/closing character pair that [`matched_body`](crate::matched_body)
/// balances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DelimiterPair {
    open: u8,
    close: u8,
}

impl DelimiterPair {
    pub const PARENS: Self = Self::new(START_ARG, END_ARG);
    pub const BRACES: Self = Self::new(START_GROUP, END_GROUP);
    pub const BRACKETS: Self = Self::new(START_ARRAY, END_ARRAY);
    /// Both sides are `"`: the body runs to the next unescaped quote.
    pub const QUOTES: Self = Self::new(QUOTE, QUOTE);

    pub const fn new(open: u8, close: u8) -> Self {
        Self { open, close }
    }

    pub const fn open(self) -> u8 {
        self.open
    }

    pub const fn close(self) -> u8 {
        self.close
    }

    pub const fn is_quote(self) -> bool {
        self.open == QUOTE && self.close == QUOTE
    }
}
