use super::dictionary::{DecodeDictionary, EncodeDictionary};
use super::{Code, Compressor, CompressorError, Symbol};

use tracing::{debug, trace};


/// Output of one encoding pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded {
    pub codes: Vec<Code>,
    /// Code the dictionary would have assigned next.
    pub next_code: Code,
}

/// Output of one decoding pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<S> {
    pub symbols: Vec<S>,
    pub next_code: Code,
}


/// Single-pass LZW encoder. Consumed by [`Encoder::encode`], so every pass
/// starts from a freshly seeded dictionary.
#[derive(Debug)]
pub struct Encoder<S: Symbol> {
    dict: EncodeDictionary<S>,
}

impl<S: Symbol> Encoder<S> {
    pub fn new() -> Encoder<S> {
        Encoder {
            dict: EncodeDictionary::seeded(),
        }
    }

    pub fn encode(self, src: &[S]) -> Result<Encoded, CompressorError> {
        self.encode_with(src, |_| {})
    }

    /// Like [`Encoder::encode`], calling `inserted` with every code as it is
    /// assigned.
    fn encode_with<F>(mut self, src: &[S], mut inserted: F) -> Result<Encoded, CompressorError>
    where
        F: FnMut(Code),
    {
        let mut codes: Vec<Code> = Vec::new();
        let mut prev: Vec<S> = Vec::new();

        for (position, &symbol) in src.iter().enumerate() {
            if symbol.seed_code().is_none() {
                return Err(CompressorError::UnsupportedSymbol {
                    symbol: symbol.ordinal(),
                    position,
                });
            }

            prev.push(symbol);
            if self.dict.contains(&prev) {
                continue;
            }

            // `prev` without its last symbol is the longest known match.
            let word = std::mem::replace(&mut prev, vec![symbol]);
            match self.dict.get(&word[..word.len() - 1]) {
                Some(code) => codes.push(code),
                None => return Err(CompressorError::UnknownPrefix { position }),
            }
            inserted(self.dict.insert(word)?);
        }

        if let Some(code) = self.dict.get(&prev) {
            codes.push(code);
        }

        debug!(symbols = src.len(), codes = codes.len(), "encoded");

        Ok(Encoded {
            codes,
            next_code: self.dict.next_code(),
        })
    }
}

impl<S: Symbol> Default for Encoder<S> {
    fn default() -> Self {
        Encoder::new()
    }
}


/// Single-pass LZW decoder, the mirror of [`Encoder`].
#[derive(Debug)]
pub struct Decoder<S: Symbol> {
    dict: DecodeDictionary<S>,
}

impl<S: Symbol> Decoder<S> {
    pub fn new() -> Decoder<S> {
        Decoder {
            dict: DecodeDictionary::seeded(),
        }
    }

    pub fn decode(mut self, codes: &[Code]) -> Result<Decoded<S>, CompressorError> {
        let mut symbols: Vec<S> = Vec::new();
        let mut prev: Vec<S> = Vec::new();

        for (position, &code) in codes.iter().enumerate() {
            if !self.dict.contains_code(code) {
                // The only code the encoder can emit before the decoder knows
                // it is the one being created right now: prev + prev[0].
                if prev.is_empty() || code != self.dict.next_code() {
                    return Err(CompressorError::InvalidCode { code, position });
                }

                trace!(code, "self-referential code");
                let mut word = prev.clone();
                word.push(prev[0]);
                self.dict.insert(word)?;
            }

            let curr = match self.dict.get(code) {
                Some(word) => word.to_vec(),
                None => return Err(CompressorError::InvalidCode { code, position }),
            };

            let mut value = prev;
            value.push(curr[0]);
            if !self.dict.contains_word(&value) {
                self.dict.insert(value)?;
            }

            symbols.extend_from_slice(&curr);
            prev = curr;
        }

        debug!(codes = codes.len(), symbols = symbols.len(), "decoded");

        Ok(Decoded {
            symbols,
            next_code: self.dict.next_code(),
        })
    }
}

impl<S: Symbol> Default for Decoder<S> {
    fn default() -> Self {
        Decoder::new()
    }
}


#[derive(Debug, Default, Clone, Copy)]
pub struct LZW;

impl LZW {
    pub fn new() -> LZW {
        LZW
    }

    pub fn compress(&self, src: &[u8]) -> Result<Vec<Code>, CompressorError> {
        Compressor::compress(self, src)
    }

    pub fn decompress(&self, codes: &[Code]) -> Result<Vec<u8>, CompressorError> {
        Compressor::decompress(self, codes)
    }
}

impl Compressor for LZW {
    fn compress(&self, src: &[u8]) -> Result<Vec<Code>, CompressorError> {
        Encoder::new().encode(src).map(|encoded| encoded.codes)
    }

    fn decompress(&self, codes: &[Code]) -> Result<Vec<u8>, CompressorError> {
        Decoder::new().decode(codes).map(|decoded| decoded.symbols)
    }

    fn compress_text(&self, text: &str) -> Result<Vec<Code>, CompressorError> {
        let symbols: Vec<char> = text.chars().collect();
        Encoder::new().encode(&symbols).map(|encoded| encoded.codes)
    }

    fn decompress_text(&self, codes: &[Code]) -> Result<String, CompressorError> {
        Decoder::<char>::new()
            .decode(codes)
            .map(|decoded| decoded.symbols.into_iter().collect())
    }
}


#[cfg(test)]
mod lzw_test {
    use super::*;
    use std::collections::HashSet;

    const SCENARIOS: [&str; 10] = [
        "",
        "A",
        "AA",
        "AAA",
        "AB",
        "ABA",
        "ABBA",
        "ABBBBBBBBBBBBBBBBBA",
        "AAAAAAAAAAAAAAAAAAA",
        "ABCABCABCABCABCABC",
    ];

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn compress_res() {
        let lzw = LZW::new();

        let compressed = lzw.compress(b"TOBEORNOTTOBEORTOBEORNOT").unwrap();

        let expected: Vec<Code> = vec![
            85, 80, 67, 70, 80, 83, 79, 80, 85,
            256, 258, 260, 265, 259, 261, 263,
        ];

        assert_eq!(compressed, expected);
    }

    #[test]
    fn decompress_res() {
        let lzw = LZW::new();

        let compressed: Vec<Code> = vec![
            85, 80, 67, 70, 80, 83, 79, 80, 85,
            256, 258, 260, 265, 259, 261, 263,
        ];

        let uncompressed = lzw.decompress(&compressed).unwrap();

        assert_eq!(uncompressed, b"TOBEORNOTTOBEORTOBEORNOT".to_vec());
    }

    #[test]
    fn empty_input() {
        let lzw = LZW::new();

        assert_eq!(lzw.compress_text("").unwrap(), Vec::<Code>::new());
        assert_eq!(lzw.decompress_text(&[]).unwrap(), "");
        assert_eq!(lzw.compress(&[]).unwrap(), Vec::<Code>::new());
        assert_eq!(lzw.decompress(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn single_symbol() {
        let lzw = LZW::new();

        assert_eq!(lzw.compress_text("A").unwrap(), vec![66]);
        assert_eq!(lzw.decompress_text(&[66]).unwrap(), "A");
        assert_eq!(lzw.compress_text("\0").unwrap(), vec![1]);
        assert_eq!(lzw.compress_text("\u{fe}").unwrap(), vec![255]);
    }

    #[test]
    fn self_referential_code() {
        let lzw = LZW::new();

        let compressed = lzw.compress_text("AAA").unwrap();
        assert_eq!(compressed, vec![66, 256]);
        assert_eq!(lzw.decompress_text(&compressed).unwrap(), "AAA");

        let compressed = lzw.compress_text("AAAAAAAAAAAAAAAAAAA").unwrap();
        assert_eq!(compressed, vec![66, 256, 257, 258, 259, 258]);
        assert_eq!(lzw.decompress_text(&compressed).unwrap(), "AAAAAAAAAAAAAAAAAAA");
    }

    #[test]
    fn repeating_cycle() {
        let lzw = LZW::new();
        let text = "ABCABCABCABCABCABC";

        let compressed = lzw.compress_text(text).unwrap();
        assert!(compressed.len() < text.len());
        assert_eq!(lzw.decompress_text(&compressed).unwrap(), text);
    }

    #[test]
    fn scenarios_round_trip() {
        let lzw = LZW::new();

        for text in SCENARIOS {
            let compressed = lzw.compress_text(text).unwrap();
            assert_eq!(lzw.decompress_text(&compressed).unwrap(), text, "input {:?}", text);
        }
    }

    #[test]
    fn counters_stay_in_lock_step() {
        for text in SCENARIOS {
            let encoded = Encoder::new().encode(&chars(text)).unwrap();
            let decoded = Decoder::<char>::new().decode(&encoded.codes).unwrap();

            assert_eq!(encoded.next_code, decoded.next_code, "input {:?}", text);
            assert_eq!(decoded.symbols, chars(text));
        }
    }

    #[test]
    fn codes_assigned_in_increasing_order() {
        for text in SCENARIOS {
            let mut assigned: Vec<Code> = Vec::new();
            let encoded = Encoder::new()
                .encode_with(&chars(text), |code| assigned.push(code))
                .unwrap();

            let expected: Vec<Code> = (256..encoded.next_code).collect();
            assert_eq!(assigned, expected, "input {:?}", text);

            let mut distinct = HashSet::new();
            for &code in &encoded.codes {
                assert!(code >= 1 && code < encoded.next_code, "input {:?}: {}", text, code);
                distinct.insert(code);
            }
            assert!(distinct.len() <= text.len() + 255);
        }
    }

    #[test]
    fn codes_emitted_out_of_assignment_order() {
        let mut assigned: Vec<Code> = Vec::new();
        let encoded = Encoder::new()
            .encode_with(&chars("ABCABCABCABCABCABC"), |code| assigned.push(code))
            .unwrap();

        assert!(assigned.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(encoded.codes, vec![66, 67, 68, 256, 258, 257, 259, 262, 257]);
    }

    #[test]
    fn repetition_grows_sub_linearly() {
        let lzw = LZW::new();
        let once = "The brown dog jumped over the lazy fox or something like that. ";
        let many = once.repeat(16);

        let single = lzw.compress_text(once).unwrap().len();
        let repeated = lzw.compress_text(&many).unwrap().len();

        assert!(repeated < 16 * single);
    }

    #[test]
    fn unsupported_symbols() {
        let lzw = LZW::new();

        let r = lzw.compress_text("AB\u{ff}");
        assert_eq!(r.unwrap_err(), CompressorError::UnsupportedSymbol { symbol: 0xff, position: 2 });

        let r = lzw.compress_text("ﬁelds");
        assert_eq!(r.unwrap_err(), CompressorError::UnsupportedSymbol { symbol: 0xfb01, position: 0 });

        let r = lzw.compress(&[1, 2, 255]);
        assert_eq!(r.unwrap_err(), CompressorError::UnsupportedSymbol { symbol: 255, position: 2 });
    }

    #[test]
    fn unknown_prefix_message() {
        let e = CompressorError::UnknownPrefix { position: 7 };
        assert_eq!(e.to_string(), "no code for the pending match before position 7");
    }

    #[test]
    fn decompress_errors() {
        let lzw = LZW::new();

        let r = lzw.decompress(&[0]);
        assert_eq!(r.unwrap_err(), CompressorError::InvalidCode { code: 0, position: 0 });

        let r = lzw.decompress(&[256]);
        assert_eq!(r.unwrap_err(), CompressorError::InvalidCode { code: 256, position: 0 });

        let r = lzw.decompress(&[66, 400]);
        assert_eq!(r.unwrap_err(), CompressorError::InvalidCode { code: 400, position: 1 });

        let r = lzw.decompress(&[66, 67, 258]);
        assert_eq!(r.unwrap_err(), CompressorError::InvalidCode { code: 258, position: 2 });

        let r = lzw.decompress(&[66, 256]);
        assert!(r.is_ok());
    }
}
