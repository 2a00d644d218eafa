use std::borrow::Cow;

use encoding_rs::{Encoding, SHIFT_JIS_INIT};

use crate::codepage;
use crate::error::{UnzipError, UnzipResult};

/// Decoders tried in order on a recovered byte sequence, first success
/// wins. encoding_rs implements the windows-31j superset of Shift-JIS,
/// which also accepts the NEC/IBM extension rows.
static NAME_DECODERS: &[&Encoding] = &[&SHIFT_JIS_INIT];

/// How a stored file name maps back onto the bytes the archiver wrote.
///
/// Legacy Windows tools put Shift-JIS bytes in the ZIP name field with no
/// encoding flag, so readers surface them CP437-decoded. Mapping each code
/// point back to its CP437 byte recovers the original sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reinterpreted {
    /// Every code point round-trips to one CP437 byte.
    Cp437(Vec<u8>),
    /// Some code point has no CP437 byte: the name is already real text.
    Unicode,
    /// The reader's text view is lossy; only its raw byte form is usable.
    Raw(Vec<u8>),
}

/// Map a stored name's code points back to CP437 bytes.
pub fn reinterpret_stored_name(stored: &str) -> Reinterpreted {
    if stored.contains(char::REPLACEMENT_CHARACTER) {
        return Reinterpreted::Raw(stored.as_bytes().to_vec());
    }
    let mut bytes = Vec::with_capacity(stored.len());
    for c in stored.chars() {
        match codepage::cp437_byte(c) {
            Some(b) => bytes.push(b),
            None => return Reinterpreted::Unicode,
        }
    }
    Reinterpreted::Cp437(bytes)
}

/// Decode a recovered byte sequence as Japanese text.
///
/// Strict decodes only. A name every decoder rejects is an error rather
/// than replacement characters on disk.
pub fn decode_japanese(bytes: &[u8]) -> UnzipResult<String> {
    for decoder in NAME_DECODERS {
        if let Some(text) = decoder.decode_without_bom_handling_and_without_replacement(bytes) {
            return Ok(text.into_owned());
        }
    }
    Err(UnzipError::FilenameDecode(bytes.to_vec()))
}

/// Recover the intended Unicode file name from its stored representation.
///
/// Names that are already proper Unicode (pure ASCII aside) pass through
/// unchanged, so archives written with the UTF-8 flag extract as-is.
pub fn recover_file_name(stored: &str) -> UnzipResult<Cow<'_, str>> {
    match reinterpret_stored_name(stored) {
        Reinterpreted::Cp437(bytes) => decode_japanese(&bytes).map(Cow::Owned),
        Reinterpreted::Unicode => Ok(Cow::Borrowed(stored)),
        Reinterpreted::Raw(bytes) => decode_japanese(&bytes).map(Cow::Owned),
    }
}
