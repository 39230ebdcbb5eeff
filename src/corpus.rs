//! Input and output documents.
//!
//! The input is the JSON database emitted by the DRC frontend. The
//! tokenizer consumes three text groups (`messages`, `sysmess`,
//! `locations`), each an array of entries carrying a `Text` field. DRC
//! databases are stored as ISO-8859-1, so the loader decodes bytes to code
//! points before handing the document to the JSON parser.
//!
//! The output is the token file: an encoding-scheme tag plus the 129
//! hex-encoded abbreviation definitions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokError};

/// One text entry inside a database group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextEntry {
    /// The entry's text.
    #[serde(rename = "Text")]
    pub text: String,
}

/// The subset of a DRC database the tokenizer consumes.
///
/// A database with a missing group is rejected at load time; the search
/// assumes a well-formed list of strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    /// Game messages.
    pub messages: Vec<TextEntry>,
    /// System messages.
    pub sysmess: Vec<TextEntry>,
    /// Location descriptions.
    pub locations: Vec<TextEntry>,
}

impl Database {
    /// Parse a database from ISO-8859-1 encoded bytes.
    ///
    /// Each byte maps to the code point of the same value, so accented
    /// characters in the 0xA0-0xFF range survive the round trip into
    /// [`String`] unchanged.
    pub fn from_latin1_bytes(bytes: &[u8]) -> Result<Self> {
        let text: String = bytes.iter().map(|&b| char::from(b)).collect();
        Ok(serde_json::from_str(&text)?)
    }

    /// Load a database from a file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| TokError::Database(format!("failed to read {}: {e}", path.display())))?;
        Self::from_latin1_bytes(&bytes)
            .map_err(|e| TokError::Database(format!("failed to parse {}: {e}", path.display())))
    }

    /// All texts in group order: messages, then sysmess, then locations.
    pub fn texts(&self) -> Vec<String> {
        self.messages
            .iter()
            .chain(&self.sysmess)
            .chain(&self.locations)
            .map(|entry| entry.text.clone())
            .collect()
    }
}

/// The token file consumed by DRC: scheme tag plus hex token definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenFile {
    /// Encoding scheme tag; always `"advanced"`.
    pub compression: String,
    /// Hex-encoded token definitions, 129 entries.
    pub tokens: Vec<String>,
}

impl TokenFile {
    /// Wrap encoded tokens in the output document.
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            compression: "advanced".to_string(),
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_database() {
        let json = r#"{
            "messages": [{"Text": "hello"}, {"Text": "world"}],
            "sysmess": [{"Text": "ok"}],
            "locations": [{"Text": "a dark room"}]
        }"#;

        let db = Database::from_latin1_bytes(json.as_bytes()).unwrap();
        assert_eq!(
            db.texts(),
            vec!["hello", "world", "ok", "a dark room"]
        );
    }

    #[test]
    fn test_missing_group_is_fatal() {
        let json = r#"{"messages": [], "sysmess": []}"#;
        assert!(Database::from_latin1_bytes(json.as_bytes()).is_err());
    }

    #[test]
    fn test_latin1_decoding() {
        // 0xE1 is 'a' acute in ISO-8859-1
        let mut bytes = br#"{"messages": [{"Text": "m"#.to_vec();
        bytes.push(0xE1);
        bytes.extend_from_slice(br#"s"}], "sysmess": [], "locations": []}"#);

        let db = Database::from_latin1_bytes(&bytes).unwrap();
        assert_eq!(db.texts(), vec!["m\u{e1}s"]);
    }

    #[test]
    fn test_token_file_shape() {
        let file = TokenFile::new(vec!["7f".to_string()]);
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["compression"], "advanced");
        assert_eq!(json["tokens"][0], "7f");
    }
}
