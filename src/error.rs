//! Errors raised by the tip pipeline.
//!
//! Both variants of [`TipError`] are terminal for the search that raised them.
//! A tip count that differs from the requested one is not an error; see
//! [`crate::tips::CountMismatch`].

/// Why a raw text response could not be turned into tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("response is empty")]
    EmptyResponse,

    #[error("response contains no numbered points")]
    NoMarkers,

    #[error("numbered points in response are all empty")]
    NoContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TipError {
    #[error("plant name is empty")]
    EmptyPlantName,

    #[error("could not parse tips: {0}")]
    Parse(#[from] ParseError),
}
