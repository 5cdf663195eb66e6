use core::time::Duration;

use displaydoc::Display;

#[derive(Debug, Display)]
pub enum Error {
    /// RPC call `{operation}` failed: `{source}`
    Rpc {
        operation: &'static str,
        source: tendermint_rpc::Error,
    },
    /// RPC call `{operation}` did not complete within `{timeout:?}`
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },
    /// query rejected by the application: `{0}`
    Status(tonic::Status),
    /// proof is required but the node returned none
    ProofUnavailable,
    /// could not decode proof op into CommitmentProof at index `{index}`: `{reason}`
    ProofDecode { index: usize, reason: String },
    /// expected an LBM message at index `{index}`, got a `{kind}` message
    UnexpectedMessage { index: usize, kind: &'static str },
    /// light block is for chain `{got}`, expected `{expected}`
    ChainIdMismatch { expected: String, got: String },
    /// invalid light block: `{reason}`
    LightBlock { reason: String },
    /// custom error: `{reason}`
    Custom { reason: String },
}

impl Error {
    pub(crate) fn rpc(operation: &'static str) -> impl FnOnce(tendermint_rpc::Error) -> Self {
        move |source| Self::Rpc { operation, source }
    }

    /// The status of a rejected query, if this is one.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            Self::Status(status) => Some(status),
            _ => None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rpc { source, .. } => Some(source),
            Self::Status(status) => Some(status),
            _ => None,
        }
    }
}

impl From<tonic::Status> for Error {
    fn from(status: tonic::Status) -> Self {
        Self::Status(status)
    }
}
