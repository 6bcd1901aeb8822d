pub mod dictionary;
pub mod lzw;
mod symbol;

pub use symbol::Symbol;

use thiserror::Error;


/// Identifier of a dictionary entry. Seeded entries use `1..=255`.
pub type Code = u32;

#[derive(Debug, Error, PartialEq)]
pub enum CompressorError {
    #[error("symbol U+{symbol:04X} at position {position} is outside the seeded alphabet")]
    UnsupportedSymbol { symbol: u32, position: usize },

    #[error("code {code} at position {position} cannot be resolved")]
    InvalidCode { code: Code, position: usize },

    #[error("no code for the pending match before position {position}")]
    UnknownPrefix { position: usize },

    #[error("dictionary ran out of codes")]
    CodeSpaceExhausted,
}

pub trait Compressor: Send + Sync {
    fn compress(&self, src: &[u8]) -> Result<Vec<Code>, CompressorError>;
    fn decompress(&self, codes: &[Code]) -> Result<Vec<u8>, CompressorError>;
    fn compress_text(&self, text: &str) -> Result<Vec<Code>, CompressorError>;
    fn decompress_text(&self, codes: &[Code]) -> Result<String, CompressorError>;
}

/// Encodes `text` one `char` at a time.
pub fn encode(text: &str) -> Result<Vec<Code>, CompressorError> {
    let symbols: Vec<char> = text.chars().collect();
    lzw::Encoder::new().encode(&symbols).map(|encoded| encoded.codes)
}

pub fn decode(codes: &[Code]) -> Result<String, CompressorError> {
    lzw::Decoder::<char>::new()
        .decode(codes)
        .map(|decoded| decoded.symbols.into_iter().collect())
}

/// Encodes raw bytes. Any UTF-8 document fits the seeded alphabet this way.
pub fn encode_bytes(src: &[u8]) -> Result<Vec<Code>, CompressorError> {
    lzw::Encoder::new().encode(src).map(|encoded| encoded.codes)
}

pub fn decode_bytes(codes: &[Code]) -> Result<Vec<u8>, CompressorError> {
    lzw::Decoder::<u8>::new()
        .decode(codes)
        .map(|decoded| decoded.symbols)
}
