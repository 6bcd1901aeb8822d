use std::collections::HashMap;

use super::{Code, CompressorError, Symbol};

/// Number of seeded single-symbol entries.
pub const ALPHABET_SIZE: u32 = 255;
/// First code handed out after the seeded entries.
pub const FIRST_FREE_CODE: Code = ALPHABET_SIZE + 1;


/// Monotonic source of fresh codes, shared in shape by both dictionaries so
/// they number their entries identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeCounter {
    next: Code,
}

impl CodeCounter {
    pub fn new() -> CodeCounter {
        CodeCounter { next: FIRST_FREE_CODE }
    }

    pub fn peek(&self) -> Code {
        self.next
    }

    pub fn allocate(&mut self) -> Result<Code, CompressorError> {
        let code = self.next;
        self.next = code.checked_add(1).ok_or(CompressorError::CodeSpaceExhausted)?;
        Ok(code)
    }
}

impl Default for CodeCounter {
    fn default() -> Self {
        CodeCounter::new()
    }
}


#[derive(Debug)]
pub struct EncodeDictionary<S: Symbol> {
    entries: HashMap<Vec<S>, Code>,
    counter: CodeCounter,
}

impl<S: Symbol> EncodeDictionary<S> {
    pub fn seeded() -> EncodeDictionary<S> {
        let mut entries = HashMap::with_capacity(ALPHABET_SIZE as usize);

        for i in 0..ALPHABET_SIZE {
            entries.insert(vec![S::from_ordinal(i as u8)], i + 1);
        }

        EncodeDictionary {
            entries,
            counter: CodeCounter::new(),
        }
    }

    pub fn get(&self, word: &[S]) -> Option<Code> {
        self.entries.get(word).copied()
    }

    pub fn contains(&self, word: &[S]) -> bool {
        self.entries.contains_key(word)
    }

    /// Adds `word` under the next counter value. `word` must be new.
    pub fn insert(&mut self, word: Vec<S>) -> Result<Code, CompressorError> {
        debug_assert!(!self.entries.contains_key(&word));

        let code = self.counter.allocate()?;
        self.entries.insert(word, code);
        Ok(code)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn next_code(&self) -> Code {
        self.counter.peek()
    }
}


/// Code to word mapping, with a reverse index so "is this word already
/// known" stays a hash lookup.
#[derive(Debug)]
pub struct DecodeDictionary<S: Symbol> {
    words: HashMap<Code, Vec<S>>,
    codes: HashMap<Vec<S>, Code>,
    counter: CodeCounter,
}

impl<S: Symbol> DecodeDictionary<S> {
    pub fn seeded() -> DecodeDictionary<S> {
        let mut words = HashMap::with_capacity(ALPHABET_SIZE as usize);
        let mut codes = HashMap::with_capacity(ALPHABET_SIZE as usize);

        for i in 0..ALPHABET_SIZE {
            let word = vec![S::from_ordinal(i as u8)];
            codes.insert(word.clone(), i + 1);
            words.insert(i + 1, word);
        }

        DecodeDictionary {
            words,
            codes,
            counter: CodeCounter::new(),
        }
    }

    pub fn get(&self, code: Code) -> Option<&[S]> {
        self.words.get(&code).map(|word| word.as_slice())
    }

    pub fn contains_code(&self, code: Code) -> bool {
        self.words.contains_key(&code)
    }

    pub fn contains_word(&self, word: &[S]) -> bool {
        self.codes.contains_key(word)
    }

    #[cfg(test)]
    pub fn code_of(&self, word: &[S]) -> Option<Code> {
        self.codes.get(word).copied()
    }

    /// Adds `word` under the next counter value and returns that code.
    pub fn insert(&mut self, word: Vec<S>) -> Result<Code, CompressorError> {
        let code = self.counter.allocate()?;
        self.codes.insert(word.clone(), code);
        self.words.insert(code, word);
        Ok(code)
    }

    pub fn next_code(&self) -> Code {
        self.counter.peek()
    }
}
