use std::fmt::Debug;
use std::hash::Hash;

use crate::dictionary::ALPHABET_SIZE;
use crate::Code;

/// A single element of the input alphabet.
///
/// Only ordinals `0..ALPHABET_SIZE` are seeded; the seed code of a symbol is
/// its ordinal plus one.
pub trait Symbol: Copy + Eq + Hash + Debug + Send {
    fn ordinal(self) -> u32;
    fn from_ordinal(ordinal: u8) -> Self;

    fn seed_code(self) -> Option<Code> {
        let ordinal = self.ordinal();
        if ordinal < ALPHABET_SIZE {
            Some(ordinal + 1)
        } else {
            None
        }
    }
}

impl Symbol for u8 {
    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u8) -> Self {
        ordinal
    }
}

impl Symbol for char {
    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u8) -> Self {
        char::from(ordinal)
    }
}
