/// Failures reported by [`Converter`](crate::Converter).
///
/// Every failure is terminal for the call that produced it; nothing is
/// retried and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// A replacement conversion table was rejected at the API boundary.
    #[error("invalid conversion table")]
    InvalidTable,

    /// The input contained no phoneme tokens after trimming.
    ///
    /// The message wording is historical; empty and all-whitespace
    /// inputs both land here.
    #[error("arpabet phoneme cannot be null")]
    EmptyPhoneme,

    /// A token was absent from the active table. Carries the literal
    /// offending token; tokens after it were not examined.
    #[error("phoneme \"{phoneme}\" was not found")]
    UnknownPhoneme { phoneme: String },
}
