use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Atom serial numbers start at 1, got 0.")]
    ZeroSerial,
}

/// Converts 1-based atom serial numbers from the command line to 0-based indices.
pub fn serials_to_indices(serials: &[usize]) -> Result<Vec<usize>, ParseError> {
    serials
        .iter()
        .map(|&s| s.checked_sub(1).ok_or(ParseError::ZeroSerial))
        .collect()
}
