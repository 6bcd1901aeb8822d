use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};

use compressor::Code;

use super::HarnessError;

/// Fixed number of bytes each code occupies once packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeWidth {
    #[default]
    U16,
    U32,
}

impl CodeWidth {
    pub fn bytes(self) -> usize {
        match self {
            CodeWidth::U16 => 2,
            CodeWidth::U32 => 4,
        }
    }

    pub fn from_bytes(bytes: usize) -> Option<CodeWidth> {
        match bytes {
            2 => Some(CodeWidth::U16),
            4 => Some(CodeWidth::U32),
            _ => None,
        }
    }
}

/// Packs codes little-endian, `width` bytes each.
pub fn pack(codes: &[Code], width: CodeWidth) -> Result<Vec<u8>, HarnessError> {
    let mut result = vec![0u8; codes.len() * width.bytes()];

    for (chunk, &code) in result.chunks_mut(width.bytes()).zip(codes) {
        match width {
            CodeWidth::U16 => {
                let code = u16::try_from(code)
                    .map_err(|_| HarnessError::CodeOverflow { code, width: width.bytes() })?;
                LittleEndian::write_u16(chunk, code);
            }
            CodeWidth::U32 => LittleEndian::write_u32(chunk, code),
        }
    }

    Ok(result)
}

pub fn unpack(src: &[u8], width: CodeWidth) -> Result<Vec<Code>, HarnessError> {
    if src.len() % width.bytes() != 0 {
        return Err(HarnessError::TruncatedCodes { len: src.len(), width: width.bytes() });
    }

    let codes = src
        .chunks(width.bytes())
        .map(|chunk| match width {
            CodeWidth::U16 => LittleEndian::read_u16(chunk) as Code,
            CodeWidth::U32 => LittleEndian::read_u32(chunk),
        })
        .collect();

    Ok(codes)
}

pub fn store_codes(path: &Path, codes: &[Code], width: CodeWidth) -> Result<(), HarnessError> {
    let data = pack(codes, width)?;
    let io_error = |source: std::io::Error| HarnessError::Io { path: path.to_path_buf(), source };

    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(&data).map_err(io_error)?;

    Ok(())
}

pub fn load_codes(path: &Path, width: CodeWidth) -> Result<Vec<Code>, HarnessError> {
    let io_error = |source: std::io::Error| HarnessError::Io { path: path.to_path_buf(), source };

    let mut file = File::open(path).map_err(io_error)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data).map_err(io_error)?;

    unpack(&data, width)
}
