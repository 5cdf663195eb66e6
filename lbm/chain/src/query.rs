use tendermint::abci::Code;
use tendermint::block::Height;
use tendermint::merkle::proof::ProofOps;
use tendermint_rpc::endpoint::abci_query::AbciQuery;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, trace};

use crate::client::AbciQueryClient;
use crate::error::Error;
use crate::proof::{convert_proofs, requires_proof, MerkleProof};
use crate::status::translate;

const ABCI_QUERY: &str = "abci_query";

/// An ABCI query against the remote chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryRequest {
    pub path: String,
    /// The query key.
    pub data: Vec<u8>,
    /// Height to query at, `0` meaning latest.
    pub height: Height,
    /// Whether the caller wants the answer proven.
    pub prove: bool,
}

impl QueryRequest {
    pub fn new(path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
            height: Height::from(0_u32),
            prove: false,
        }
    }

    pub fn at_height(self, height: Height) -> Self {
        Self { height, ..self }
    }

    pub fn with_proof(self) -> Self {
        Self {
            prove: true,
            ..self
        }
    }

    /// The height as the RPC endpoint expects it.
    pub fn query_height(&self) -> Option<Height> {
        if self.height.value() == 0 {
            None
        } else {
            Some(self.height)
        }
    }
}

/// The answer to a [`QueryRequest`].
#[derive(Clone, Debug, PartialEq)]
pub struct QueryResponse {
    pub code: Code,
    /// Diagnostic text. Only informational when `code` is OK.
    pub log: String,
    pub info: String,
    pub codespace: String,
    pub key: Vec<u8>,
    pub value: Vec<u8>,
    /// Proof as returned by the node.
    pub proof_ops: Option<ProofOps>,
    /// Normalized proof, set when the query had to be proven.
    pub proof: Option<MerkleProof>,
    pub height: Height,
}

impl From<AbciQuery> for QueryResponse {
    fn from(response: AbciQuery) -> Self {
        Self {
            code: response.code,
            log: response.log,
            info: response.info,
            codespace: response.codespace,
            key: response.key,
            value: response.value,
            proof_ops: response.proof,
            proof: None,
            height: response.height,
        }
    }
}

/// Runs queries through an [`AbciQueryClient`], turning rejected queries into
/// errors and normalizing the proofs of queries that need one.
#[derive(Clone, Debug)]
pub struct QueryGateway<C> {
    client: C,
}

impl<C: AbciQueryClient> QueryGateway<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Sends `request` and waits for the answer until `deadline`.
    ///
    /// When `request.prove` is set and the path is a proven store query, the
    /// response comes back with [`QueryResponse::proof`] filled in, or the call
    /// fails.
    pub async fn query(
        &self,
        request: QueryRequest,
        deadline: Instant,
    ) -> Result<QueryResponse, Error> {
        debug!(
            path = %request.path,
            height = %request.height,
            prove = request.prove,
            "sending abci query"
        );

        let started = Instant::now();
        let mut response = timeout_at(deadline, self.client.abci_query(&request))
            .await
            .map_err(|_| Error::Timeout {
                operation: ABCI_QUERY,
                timeout: deadline.saturating_duration_since(started),
            })?
            .map_err(Error::rpc(ABCI_QUERY))?;

        if !response.code.is_ok() {
            return Err(translate(response.code.value(), response.log).into());
        }

        // answers from a trusted node, or to subspace queries, are not proven
        if !request.prove || !requires_proof(&request.path) {
            return Ok(response);
        }

        let proof = convert_proofs(response.proof_ops.as_ref())?;
        trace!(layers = proof.len(), "converted query proof");
        response.proof = Some(proof);

        Ok(response)
    }
}
