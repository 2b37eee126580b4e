use async_trait::async_trait;
use ethers::{
    middleware::SignerMiddleware,
    providers::{JsonRpcClient, Middleware, Provider, ProviderError},
    signers::Signer,
    types::{Address, U256},
};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Block selection parameter for balance and nonce queries. `Committed` and
/// `Finalized` are zkSync Era tags; `Latest` is accepted by both networks.
/// https://docs.zksync.io/build/api-reference/conventions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    #[default]
    Latest,
    Committed,
    Finalized,
}

impl fmt::Display for BlockTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Latest => "latest",
            Self::Committed => "committed",
            Self::Finalized => "finalized",
        };
        formatter.write_str(tag)
    }
}

impl FromStr for BlockTag {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "latest" => Ok(Self::Latest),
            "committed" => Ok(Self::Committed),
            "finalized" => Ok(Self::Finalized),
            other => Err(format!(
                "unknown block tag {other:?}, expected \"latest\", \"committed\" or \"finalized\""
            )),
        }
    }
}

/// Balance and nonce queries parameterized by [`BlockTag`], issued as raw
/// JSON-RPC requests so the zkSync-specific tags can be passed through.
#[async_trait]
pub trait ZKSProvider {
    async fn get_balance_at(&self, of: Address, block: BlockTag) -> Result<U256, ProviderError>;

    /// Returns the account's transaction count at the given block.
    async fn get_transaction_count_at(
        &self,
        of: Address,
        block: BlockTag,
    ) -> Result<U256, ProviderError>;
}

#[async_trait]
impl<P: JsonRpcClient> ZKSProvider for Provider<P> {
    async fn get_balance_at(&self, of: Address, block: BlockTag) -> Result<U256, ProviderError> {
        self.request("eth_getBalance", (of, block)).await
    }

    async fn get_transaction_count_at(
        &self,
        of: Address,
        block: BlockTag,
    ) -> Result<U256, ProviderError> {
        self.request("eth_getTransactionCount", (of, block)).await
    }
}

#[async_trait]
impl<M, S> ZKSProvider for SignerMiddleware<M, S>
where
    M: Middleware + ZKSProvider,
    S: Signer,
{
    async fn get_balance_at(&self, of: Address, block: BlockTag) -> Result<U256, ProviderError> {
        self.inner().get_balance_at(of, block).await
    }

    async fn get_transaction_count_at(
        &self,
        of: Address,
        block: BlockTag,
    ) -> Result<U256, ProviderError> {
        self.inner().get_transaction_count_at(of, block).await
    }
}
