//! Firmware Loader.
//!
//! Reads raw, headerless firmware images. The image is copied byte for byte
//! into the instruction ROM at address zero.

use std::fs;

use crate::common::error::LoaderError;

/// Loads a binary file from disk into memory.
pub fn load_binary(path: &str) -> Result<Vec<u8>, LoaderError> {
    fs::read(path).map_err(|source| LoaderError::Io {
        path: path.to_string(),
        source,
    })
}

/// Splits an image into little-endian instruction words.
///
/// A trailing partial word is zero-padded.
pub fn image_words(image: &[u8]) -> Vec<u32> {
    image
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word)
        })
        .collect()
}
