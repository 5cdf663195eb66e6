use std::time::Duration;

use lbm_chain::client::{AbciQueryClient, LightBlock, LightBlockProvider, RpcLightProvider};
use lbm_chain::error::Error;
use lbm_chain::query::{QueryGateway, QueryRequest, QueryResponse};
use tendermint::block::Height;
use tendermint::chain::Id as ChainId;
use tendermint_rpc::HttpClient;
use tokio::time::Instant;
use tracing::info;

use crate::config::LbmProviderConfig;

/// Client for a single LBM chain: ABCI queries through a [`QueryGateway`] and
/// light blocks through a [`LightBlockProvider`]. By default both run over the
/// same RPC endpoint.
#[derive(Clone, Debug)]
pub struct ChainClient<C = HttpClient, L = RpcLightProvider> {
    config: LbmProviderConfig,
    timeout: Duration,
    gateway: QueryGateway<C>,
    light_provider: L,
}

impl ChainClient {
    pub fn new(config: LbmProviderConfig) -> Result<Self, Error> {
        let (gateway, light_provider, timeout) = Self::init(&config)?;

        Ok(Self {
            config,
            timeout,
            gateway,
            light_provider,
        })
    }

    /// Builds the RPC client and the light block provider from `config`.
    fn init(
        config: &LbmProviderConfig,
    ) -> Result<(QueryGateway<HttpClient>, RpcLightProvider, Duration), Error> {
        let timeout = config.timeout();

        let rpc_client = HttpClient::new(config.rpc_addr.clone()).map_err(|e| Error::Custom {
            reason: format!("failed to create RPC client for {}: {e}", config.rpc_addr),
        })?;

        let chain_id = ChainId::try_from(config.id.clone()).map_err(|e| Error::Custom {
            reason: format!("invalid chain id `{}`: {e}", config.id),
        })?;

        info!(chain_id = %chain_id, rpc_addr = %config.rpc_addr, ?timeout, "initialized chain client");

        Ok((
            QueryGateway::new(rpc_client.clone()),
            RpcLightProvider::new(chain_id, rpc_client),
            timeout,
        ))
    }

}

impl<C, L> ChainClient<C, L>
where
    C: AbciQueryClient,
    L: LightBlockProvider,
{
    /// Assembles a client from already built collaborators.
    pub fn from_parts(
        config: LbmProviderConfig,
        gateway: QueryGateway<C>,
        light_provider: L,
    ) -> Self {
        let timeout = config.timeout();

        Self {
            config,
            timeout,
            gateway,
            light_provider,
        }
    }

    pub fn config(&self) -> &LbmProviderConfig {
        &self.config
    }

    /// Runs an ABCI query, bounded by the configured timeout.
    pub async fn query(&self, request: QueryRequest) -> Result<QueryResponse, Error> {
        self.gateway
            .query(request, Instant::now() + self.timeout)
            .await
    }

    /// Fetches the light block at `height`, or the latest one.
    pub async fn light_block(&self, height: Option<Height>) -> Result<LightBlock, Error> {
        tokio::time::timeout(self.timeout, self.light_provider.light_block(height))
            .await
            .map_err(|_| Error::Timeout {
                operation: "light_block",
                timeout: self.timeout,
            })?
    }
}
