//! Translation of ABCI application codes into gRPC statuses.
//!
//! Codes are those of the SDK root codespace (`sdk`). Anything that is not
//! listed in [`SDK_STATUS_CODES`], `0` included, becomes [`Code::Unknown`].

use tonic::{Code, Status};

/// `ErrInvalidRequest`
pub const ERR_INVALID_REQUEST: u32 = 18;
/// `ErrUnauthorized`
pub const ERR_UNAUTHORIZED: u32 = 4;
/// `ErrKeyNotFound`
pub const ERR_KEY_NOT_FOUND: u32 = 22;

/// ABCI code to status code lookup table.
pub const SDK_STATUS_CODES: &[(u32, Code)] = &[
    (ERR_INVALID_REQUEST, Code::InvalidArgument),
    (ERR_UNAUTHORIZED, Code::Unauthenticated),
    (ERR_KEY_NOT_FOUND, Code::NotFound),
];

/// Returns the status code an ABCI response code maps to.
pub fn status_code(code: u32) -> Code {
    SDK_STATUS_CODES
        .iter()
        .find(|(abci_code, _)| *abci_code == code)
        .map_or(Code::Unknown, |(_, status_code)| *status_code)
}

/// Converts a failed ABCI response into a status carrying the response log.
pub fn translate(code: u32, log: impl Into<String>) -> Status {
    Status::new(status_code(code), log)
}
