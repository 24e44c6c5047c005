use std::collections::HashMap;

use tracing::debug;

use crate::data;
use crate::error::ConvertError;

/// Arpabet-to-IPA converter.
///
/// Owns the active conversion table. Every instance starts from the
/// built-in table ([`data::DEFAULT_TABLE`]); [`set_table`] replaces it
/// wholesale.
///
/// [`set_table`]: Converter::set_table
pub struct Converter {
    table: HashMap<String, String>,
}

impl Converter {
    /// Construct a converter with the built-in table.
    pub fn new() -> Self {
        Self {
            table: data::default_table().clone(),
        }
    }

    /// The active conversion table.
    pub fn table(&self) -> &HashMap<String, String> {
        &self.table
    }

    /// Replace the conversion table wholesale. Prior contents are
    /// discarded; there is no merging.
    ///
    /// An empty map, or any entry with an empty phoneme code or empty
    /// IPA symbol, is rejected and the active table is left unchanged.
    pub fn set_table(&mut self, table: HashMap<String, String>) -> Result<(), ConvertError> {
        if table.is_empty() || table.iter().any(|(k, v)| k.is_empty() || v.is_empty()) {
            return Err(ConvertError::InvalidTable);
        }
        debug!(entries = table.len(), "conversion table replaced");
        self.table = table;
        Ok(())
    }

    /// Replace the conversion table from a JSON document.
    ///
    /// The document must be a JSON object mapping phoneme codes to IPA
    /// symbols, e.g. `{"AH0": "ə", "CH": "tʃ"}`. Any other shape —
    /// null, a number, a string, an array of symbols — is not a
    /// phoneme-to-symbol association and is rejected.
    pub fn set_table_json(&mut self, json: &str) -> Result<(), ConvertError> {
        let table: HashMap<String, String> =
            serde_json::from_str(json).map_err(|_| ConvertError::InvalidTable)?;
        self.set_table(table)
    }

    /// Convert a whitespace-separated string of Arpabet phonemes into
    /// one contiguous IPA string.
    ///
    /// Tokens are looked up verbatim: lookup is case-sensitive and a
    /// stress digit is part of the key, so `AH` and `AH0` resolve
    /// independently. Conversion stops at the first unknown token.
    pub fn convert(&self, input: &str) -> Result<String, ConvertError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ConvertError::EmptyPhoneme);
        }

        let mut ipa = String::new();
        for phoneme in input.split_whitespace() {
            match self.table.get(phoneme) {
                Some(symbol) => ipa.push_str(symbol),
                None => {
                    return Err(ConvertError::UnknownPhoneme {
                        phoneme: phoneme.to_string(),
                    });
                }
            }
        }
        Ok(ipa)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
