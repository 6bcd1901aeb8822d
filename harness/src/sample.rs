use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::HarnessError;

use compressor::{Code, Compressor};

/// Which symbol kind the compressor sees for a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One symbol per `char`; only U+0000..=U+00FE are accepted.
    Text,
    /// One symbol per byte; any UTF-8 document fits.
    #[default]
    Bytes,
}

#[derive(Debug)]
pub struct Sample {
    pub name: String,
    mode: Mode,
    body: Vec<u8>,
    codes: Option<Vec<Code>>,
}

impl Sample {
    pub fn from_text(name: impl Into<String>, text: &str, mode: Mode) -> Sample {
        Self {
            name: name.into(),
            mode,
            body: text.as_bytes().to_vec(),
            codes: None,
        }
    }

    pub fn from_file(path: &Path, mode: Mode) -> Result<Self, HarnessError> {
        let body = fs::read(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path.to_string_lossy().into_owned();
        if mode == Mode::Text && std::str::from_utf8(&body).is_err() {
            return Err(HarnessError::InvalidUtf8(name));
        }

        Ok(Self {
            name,
            mode,
            body,
            codes: None,
        })
    }

    pub fn from_codes(name: impl Into<String>, codes: Vec<Code>, mode: Mode) -> Sample {
        Self {
            name: name.into(),
            mode,
            body: Vec::new(),
            codes: Some(codes),
        }
    }

    pub fn compress(self, compressor: Arc<dyn Compressor>) -> Result<Self, HarnessError> {
        if self.is_compressed() { return Err(HarnessError::AlreadyCompressed(self.name)); }

        let codes = match self.mode {
            Mode::Text => compressor.compress_text(self.text()?)?,
            Mode::Bytes => compressor.compress(&self.body)?,
        };

        Ok(Self {
            codes: Some(codes),
            ..self
        })
    }

    /// Reconstructs the body from the codes. The sample itself is unchanged.
    pub fn decompress(&self, compressor: Arc<dyn Compressor>) -> Result<Vec<u8>, HarnessError> {
        let codes = self.codes
            .as_ref()
            .ok_or_else(|| HarnessError::NotCompressed(self.name.clone()))?;

        let body = match self.mode {
            Mode::Text => compressor.decompress_text(codes)?.into_bytes(),
            Mode::Bytes => compressor.decompress(codes)?,
        };

        Ok(body)
    }

    pub fn verify(&self, compressor: Arc<dyn Compressor>) -> Result<(), HarnessError> {
        let restored = self.decompress(compressor)?;
        if restored != self.body {
            return Err(HarnessError::Mismatch(self.name.clone()));
        }

        Ok(())
    }

    fn text(&self) -> Result<&str, HarnessError> {
        std::str::from_utf8(&self.body).map_err(|_| HarnessError::InvalidUtf8(self.name.clone()))
    }

    pub fn is_compressed(&self) -> bool {
        self.codes.is_some()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Length of the original input in bytes.
    pub fn size(&self) -> usize {
        self.body.len()
    }

    pub fn code_count(&self) -> usize {
        self.codes.as_ref().map_or(0, |codes| codes.len())
    }

    pub fn codes(&self) -> Option<&[Code]> {
        self.codes.as_deref()
    }

    pub fn take_codes(self) -> Option<Vec<Code>> {
        self.codes
    }
}
