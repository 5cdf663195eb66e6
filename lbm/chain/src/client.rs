//! Capabilities the query core needs from the remote chain, and their
//! implementations over a Tendermint RPC client.

use tendermint::block::Height;
use tendermint::chain::Id as ChainId;
use tendermint::{account, validator};
use tendermint_rpc::{Client, HttpClient, Paging};
use tracing::debug;

pub use tendermint_light_client_verifier::types::LightBlock;

use crate::error::Error;
use crate::query::{QueryRequest, QueryResponse};

/// Something able to run ABCI queries against the chain.
#[tonic::async_trait]
pub trait AbciQueryClient: Send + Sync {
    async fn abci_query(&self, request: &QueryRequest)
        -> Result<QueryResponse, tendermint_rpc::Error>;
}

/// Something able to supply light blocks, i.e. the signed headers and
/// validator sets proofs are verified against.
#[tonic::async_trait]
pub trait LightBlockProvider: Send + Sync {
    /// Fetches the light block at `height`, or the latest one if `None`.
    async fn light_block(&self, height: Option<Height>) -> Result<LightBlock, Error>;
}

#[tonic::async_trait]
impl AbciQueryClient for HttpClient {
    async fn abci_query(
        &self,
        request: &QueryRequest,
    ) -> Result<QueryResponse, tendermint_rpc::Error> {
        let response = Client::abci_query(
            self,
            Some(request.path.clone()),
            request.data.clone(),
            request.query_height(),
            request.prove,
        )
        .await?;

        Ok(response.into())
    }
}

/// Light block provider bound to a single RPC endpoint and chain.
#[derive(Clone, Debug)]
pub struct RpcLightProvider {
    chain_id: ChainId,
    client: HttpClient,
}

impl RpcLightProvider {
    pub fn new(chain_id: ChainId, client: HttpClient) -> Self {
        Self { chain_id, client }
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    async fn validators(&self, height: Height) -> Result<Vec<validator::Info>, Error> {
        let response = self
            .client
            .validators(height, Paging::All)
            .await
            .map_err(Error::rpc("validators"))?;

        Ok(response.validators)
    }
}

fn check_chain_id(expected: &ChainId, got: &ChainId) -> Result<(), Error> {
    if got != expected {
        return Err(Error::ChainIdMismatch {
            expected: expected.to_string(),
            got: got.to_string(),
        });
    }

    Ok(())
}

/// Builds the validator set that signed the header at `height`, with
/// `proposer` as its proposer.
fn signing_validator_set(
    height: Height,
    validators: Vec<validator::Info>,
    proposer: account::Id,
) -> Result<validator::Set, Error> {
    if validators.is_empty() {
        return Err(Error::LightBlock {
            reason: format!("empty validator set at height {height}"),
        });
    }

    validator::Set::with_proposer(validators, proposer).map_err(|e| Error::LightBlock {
        reason: format!("invalid validator set at height {height}: {e}"),
    })
}

#[tonic::async_trait]
impl LightBlockProvider for RpcLightProvider {
    async fn light_block(&self, height: Option<Height>) -> Result<LightBlock, Error> {
        let commit = async {
            match height {
                Some(height) => self.client.commit(height).await,
                None => self.client.latest_commit().await,
            }
            .map_err(Error::rpc("commit"))
        };
        let status = async { self.client.status().await.map_err(Error::rpc("status")) };

        let (commit, status) = tokio::try_join!(commit, status)?;

        let signed_header = commit.signed_header;
        check_chain_id(&self.chain_id, &signed_header.header.chain_id)?;

        let height = signed_header.header.height;
        debug!(%height, chain_id = %self.chain_id, "fetched signed header");

        let (validators, next_validators) = tokio::try_join!(
            self.validators(height),
            self.validators(height.increment()),
        )?;

        let validators =
            signing_validator_set(height, validators, signed_header.header.proposer_address)?;

        Ok(LightBlock::new(
            signed_header,
            validators,
            validator::Set::new(next_validators, None),
            status.node_info.id,
        ))
    }
}
