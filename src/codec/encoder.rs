//! Token table encoding.
//!
//! Renders the winning abbreviation list into the fixed-size table DRC
//! expects: 129 entries of two lowercase hex digits per byte. Entry 0 is
//! reserved and always holds the filler abbreviation; unused slots after the
//! chosen abbreviations are padded with fillers as well.

use super::charmap::legacy_code;

/// Byte value of the filler abbreviation used to pad the table.
pub const FILLER: u8 = 0x7f;

/// Number of abbreviation slots, excluding the reserved entry 0.
pub const TABLE_SLOTS: usize = 128;

/// Warning emitted when an abbreviation contains characters above code 127
/// that the legacy table cannot represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeWarning {
    /// Index of the abbreviation in the padded table.
    pub index: usize,
    /// The abbreviation text.
    pub abbreviation: String,
    /// How many of its characters had no legacy mapping.
    pub unmapped: usize,
}

/// Encode abbreviations into the 129-entry hex token table.
///
/// Encoding is a pure function of its inputs. Character mapping:
///
/// - code points above 127 use the legacy table when `compatible` is set;
///   unmapped ones count toward a per-abbreviation [`EncodeWarning`] and
///   fall back to the raw code point truncated to one byte
/// - with `compatible` unset the legacy table is never consulted and no
///   warnings are produced
/// - a line feed encodes as carriage return
/// - everything else encodes as its raw code point
pub fn encode(abbreviations: &[String], compatible: bool) -> (Vec<String>, Vec<EncodeWarning>) {
    debug_assert!(abbreviations.len() <= TABLE_SLOTS);

    let filler = String::from(char::from(FILLER));
    let mut table: Vec<&str> = Vec::with_capacity(TABLE_SLOTS + 1);
    table.push(&filler);
    table.extend(abbreviations.iter().map(String::as_str));
    while table.len() < TABLE_SLOTS + 1 {
        table.push(&filler);
    }

    let mut tokens = Vec::with_capacity(table.len());
    let mut warnings = Vec::new();
    for (index, abbreviation) in table.iter().enumerate() {
        let mut hex = String::with_capacity(abbreviation.len() * 2);
        let mut unmapped = 0;
        for c in abbreviation.chars() {
            let code = encode_char(c, compatible, &mut unmapped);
            hex.push_str(&format!("{code:02x}"));
        }
        if unmapped > 0 {
            warnings.push(EncodeWarning {
                index,
                abbreviation: (*abbreviation).to_string(),
                unmapped,
            });
        }
        tokens.push(hex);
    }
    (tokens, warnings)
}

fn encode_char(c: char, compatible: bool, unmapped: &mut usize) -> u8 {
    let code_point = c as u32;
    if code_point > 127 {
        if compatible {
            if let Some(code) = legacy_code(c) {
                return code;
            }
            *unmapped += 1;
        }
        (code_point & 0xff) as u8
    } else if c == '\n' {
        b'\r'
    } else {
        code_point as u8
    }
}
