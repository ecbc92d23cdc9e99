//! Guessing the kind of an ASCII-armored file from its header line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const BEGIN_MARK: &[u8] = b"-----BEGIN PGP ";
const END_MARK: &[u8] = b"-----END PGP ";

const MESSAGE_HEADER: &[u8] = b"-----BEGIN PGP MESSAGE-----";
const SIGNED_MESSAGE_HEADER: &[u8] = b"-----BEGIN PGP SIGNED MESSAGE-----";
const SIGNATURE_HEADER: &[u8] = b"-----BEGIN PGP SIGNATURE-----";

/// Kind of armored data found in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmorType {
    /// Unreadable file, no header before EOF, or an END line first.
    Error,
    /// A BEGIN header of a kind not listed below.
    Unknown,
    Message,
    SignedMessage,
    Signature,
}

/// Classifies the first armor header of the file at `path`.
pub fn guess_armor_type(path: impl AsRef<Path>) -> ArmorType {
    match File::open(path.as_ref()) {
        Ok(file) => guess_armor_type_from(BufReader::new(file)),
        Err(_) => ArmorType::Error,
    }
}

/// Classifies the first armor header read from `reader`.
///
/// Lines are handled as raw bytes, so binary or non-UTF-8 content before the
/// header is skipped like any other line.
pub fn guess_armor_type_from<R: BufRead>(mut reader: R) -> ArmorType {
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) | Err(_) => return ArmorType::Error,
            Ok(_) => {}
        }
        if line.starts_with(BEGIN_MARK) {
            break;
        }
        if line.starts_with(END_MARK) {
            return ArmorType::Error;
        }
    }

    let header = trim_line_end(&line);
    if header == MESSAGE_HEADER {
        ArmorType::Message
    } else if header == SIGNED_MESSAGE_HEADER {
        ArmorType::SignedMessage
    } else if header == SIGNATURE_HEADER {
        ArmorType::Signature
    } else {
        ArmorType::Unknown
    }
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| !matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        .map_or(0, |i| i + 1);
    &line[..end]
}
