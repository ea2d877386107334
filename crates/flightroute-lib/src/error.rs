use thiserror::Error;

/// Convenient result alias for the flightroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// An unreachable destination is *not* an error: the engines report it via
/// [`crate::SearchStatus::Unreachable`] so callers can tell a missing path
/// apart from malformed input.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when adding an airport whose code is already registered.
    #[error("duplicate airport code: {code}")]
    DuplicateAirport { code: String },

    /// Raised when a referenced airport code is absent from the network.
    #[error("unknown airport code: {code}")]
    UnknownAirport { code: String },

    /// Raised when a route references an endpoint that has not been added.
    #[error("route endpoint {code} is not part of the network")]
    UnknownEndpoint { code: String },

    /// Raised when a route carries a negative or non-finite weight. The
    /// route endpoints are named `origin`/`destination` here because a
    /// field called `source` would be picked up as the error's cause.
    #[error("invalid weight {weight} on route {origin} -> {destination}")]
    InvalidWeight {
        origin: String,
        destination: String,
        weight: f64,
    },

    /// Raised when an airport code is blank.
    #[error("invalid airport code: {code:?}")]
    InvalidAirportCode { code: String },

    /// Raised when airport coordinates fall outside the valid ranges.
    #[error("invalid coordinates ({latitude}, {longitude}) for airport {code}")]
    InvalidCoordinates {
        code: String,
        latitude: f64,
        longitude: f64,
    },

    /// Raised when an external cancellation signal is observed mid-search.
    #[error("search cancelled")]
    Cancelled,
}
