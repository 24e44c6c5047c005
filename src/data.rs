use std::collections::HashMap;
use std::sync::OnceLock;

/// Built-in Arpabet-to-IPA conversion table.
///
/// Stress digits are part of the lookup key, so every stressed variant of
/// a vowel is listed next to its bare form. Keys are unique and values
/// are never empty.
pub const DEFAULT_TABLE: &[(&str, &str)] = &[
    // Vowels (monophthongs)
    ("AO", "ɔ"), ("AO0", "ɔ"), ("AO1", "ɔ"), ("AO2", "ɔ"),
    ("AA", "ɑ"), ("AA0", "ɑ"), ("AA1", "ɑ"), ("AA2", "ɑ"),
    ("IY", "i"), ("IY0", "i"), ("IY1", "i"), ("IY2", "i"),
    ("UW", "u"), ("UW0", "u"), ("UW1", "u"), ("UW2", "u"),
    ("EH", "e"), ("EH0", "e"), ("EH1", "e"), ("EH2", "e"),
    ("IH", "ɪ"), ("IH0", "ɪ"), ("IH1", "ɪ"), ("IH2", "ɪ"),
    ("UH", "ʊ"), ("UH0", "ʊ"), ("UH1", "ʊ"), ("UH2", "ʊ"),
    // AH0 reduces to schwa; bare AH and AH1/AH2 stay ʌ.
    ("AH", "ʌ"), ("AH0", "ə"), ("AH1", "ʌ"), ("AH2", "ʌ"),
    ("AE", "æ"), ("AE0", "æ"), ("AE1", "æ"), ("AE2", "æ"),
    ("AX", "ə"), ("AX0", "ə"), ("AX1", "ə"), ("AX2", "ə"),
    // Vowels (diphthongs)
    ("EY", "eɪ"), ("EY0", "eɪ"), ("EY1", "eɪ"), ("EY2", "eɪ"),
    ("AY", "aɪ"), ("AY0", "aɪ"), ("AY1", "aɪ"), ("AY2", "aɪ"),
    ("OW", "oʊ"), ("OW0", "oʊ"), ("OW1", "oʊ"), ("OW2", "oʊ"),
    ("AW", "aʊ"), ("AW0", "aʊ"), ("AW1", "aʊ"), ("AW2", "aʊ"),
    ("OY", "ɔɪ"), ("OY0", "ɔɪ"), ("OY1", "ɔɪ"), ("OY2", "ɔɪ"),
    // Vowels (r-colored)
    ("ER", "ɜr"), ("ER0", "ɜr"), ("ER1", "ɜr"), ("ER2", "ɜr"),
    ("AXR", "ər"), ("AXR0", "ər"), ("AXR1", "ər"), ("AXR2", "ər"),
    // Stops
    ("P", "p"), ("B", "b"), ("T", "t"), ("D", "d"), ("K", "k"), ("G", "g"),
    // Affricates
    ("CH", "tʃ"), ("JH", "dʒ"),
    // Fricatives
    ("F", "f"), ("V", "v"), ("TH", "θ"), ("DH", "ð"), ("S", "s"),
    ("Z", "z"), ("SH", "ʃ"), ("ZH", "ʒ"), ("HH", "h"),
    // Nasals
    ("M", "m"), ("N", "n"), ("NG", "ŋ"),
    // Liquids
    ("L", "l"), ("R", "r"),
    // Semivowels
    ("W", "w"), ("Y", "j"),
];

/// The default table as a lookup map. Built on first use, then shared;
/// converters clone it at construction.
pub fn default_table() -> &'static HashMap<String, String> {
    static TABLE: OnceLock<HashMap<String, String>> = OnceLock::new();
    TABLE.get_or_init(|| {
        DEFAULT_TABLE
            .iter()
            .map(|&(arpabet, ipa)| (arpabet.to_string(), ipa.to_string()))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<&str> = DEFAULT_TABLE.iter().map(|&(k, _)| k).collect();
        assert_eq!(keys.len(), DEFAULT_TABLE.len());
    }

    #[test]
    fn entries_are_well_formed() {
        assert_eq!(DEFAULT_TABLE.len(), 92);
        for &(arpabet, ipa) in DEFAULT_TABLE {
            assert!(
                arpabet.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "malformed key: {arpabet}"
            );
            assert!(!ipa.is_empty(), "empty symbol for {arpabet}");
        }
    }

    #[test]
    fn lookup_map_matches_static_table() {
        let map = default_table();
        assert_eq!(map.len(), DEFAULT_TABLE.len());
        for &(arpabet, ipa) in DEFAULT_TABLE {
            assert_eq!(map.get(arpabet).map(String::as_str), Some(ipa));
        }
    }
}
