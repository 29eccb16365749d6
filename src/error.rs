//! Errors raised while turning an export into a digest.

use crate::export::Section;

/// Errors that can occur while digesting a Jefit export.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error(
        "Could not find the {section} section. Ensure you are using the full Jefit export."
    )]
    MissingSection { section: Section },

    #[error("The {section} section has no `{column}` column")]
    MissingColumn {
        section: Section,
        column: &'static str,
    },

    #[error("Export is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("Months of history must be between 1 and 36 (got {months})")]
    InvalidWindow { months: u32 },
}
