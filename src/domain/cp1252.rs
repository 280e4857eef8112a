//! Strict Windows-1252 (cp1252) codec.
//!
//! 0x00-0x7F and 0xA0-0xFF map straight onto the same Unicode scalar values.
//! The 0x80-0x9F block carries the Windows punctuation set; five of its bytes
//! are unassigned and rejected in both directions.

use crate::error::{PatchError, Result};

/// Characters for bytes 0x80..=0x9F. `None` marks an unassigned byte.
const HIGH_CONTROL_BLOCK: [Option<char>; 32] = [
    Some('\u{20AC}'), // 0x80 euro sign
    None,             // 0x81
    Some('\u{201A}'), // 0x82 single low-9 quotation mark
    Some('\u{0192}'), // 0x83 latin small f with hook
    Some('\u{201E}'), // 0x84 double low-9 quotation mark
    Some('\u{2026}'), // 0x85 horizontal ellipsis
    Some('\u{2020}'), // 0x86 dagger
    Some('\u{2021}'), // 0x87 double dagger
    Some('\u{02C6}'), // 0x88 modifier circumflex
    Some('\u{2030}'), // 0x89 per mille
    Some('\u{0160}'), // 0x8A S with caron
    Some('\u{2039}'), // 0x8B single left-pointing angle quote
    Some('\u{0152}'), // 0x8C OE ligature
    None,             // 0x8D
    Some('\u{017D}'), // 0x8E Z with caron
    None,             // 0x8F
    None,             // 0x90
    Some('\u{2018}'), // 0x91 left single quote
    Some('\u{2019}'), // 0x92 right single quote
    Some('\u{201C}'), // 0x93 left double quote
    Some('\u{201D}'), // 0x94 right double quote
    Some('\u{2022}'), // 0x95 bullet
    Some('\u{2013}'), // 0x96 en dash
    Some('\u{2014}'), // 0x97 em dash
    Some('\u{02DC}'), // 0x98 small tilde
    Some('\u{2122}'), // 0x99 trade mark
    Some('\u{0161}'), // 0x9A s with caron
    Some('\u{203A}'), // 0x9B single right-pointing angle quote
    Some('\u{0153}'), // 0x9C oe ligature
    None,             // 0x9D
    Some('\u{017E}'), // 0x9E z with caron
    Some('\u{0178}'), // 0x9F Y with diaeresis
];

/// Decode cp1252 bytes into a `String`.
pub fn decode(bytes: &[u8]) -> Result<String> {
    let mut text = String::with_capacity(bytes.len());

    for (offset, &byte) in bytes.iter().enumerate() {
        match byte_to_char(byte) {
            Some(ch) => text.push(ch),
            None => return Err(PatchError::Decode { byte, offset }),
        }
    }

    Ok(text)
}

/// Encode text as cp1252 bytes.
pub fn encode(text: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len());

    for (index, ch) in text.chars().enumerate() {
        match char_to_byte(ch) {
            Some(byte) => bytes.push(byte),
            None => return Err(PatchError::Encode { ch, index }),
        }
    }

    Ok(bytes)
}

fn byte_to_char(byte: u8) -> Option<char> {
    match byte {
        0x80..=0x9F => HIGH_CONTROL_BLOCK[usize::from(byte - 0x80)],
        _ => Some(char::from(byte)),
    }
}

fn char_to_byte(ch: char) -> Option<u8> {
    let code = u32::from(ch);
    match code {
        0x00..=0x7F | 0xA0..=0xFF => u8::try_from(code).ok(),
        _ => HIGH_CONTROL_BLOCK
            .iter()
            .position(|mapped| *mapped == Some(ch))
            .and_then(|pos| u8::try_from(pos).ok())
            .map(|pos| 0x80 + pos),
    }
}
