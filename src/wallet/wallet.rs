use super::{DemoWalletError, Network, WalletOps};
use crate::{
    contracts::erc20::ERC20,
    zks_provider::{BlockTag, ZKSProvider},
    zks_utils::{tx_succeeded, ERA_SEPOLIA_CHAIN_ID, ETH_SEPOLIA_CHAIN_ID},
};
use async_trait::async_trait;
use ethers::{
    prelude::{
        k256::{
            ecdsa::{RecoveryId, Signature as RecoverableSignature},
            schnorr::signature::hazmat::PrehashSigner,
        },
        MiddlewareBuilder, SignerMiddleware,
    },
    providers::Middleware,
    signers::{Signer, Wallet},
    types::{Address, TransactionReceipt, U256},
};
use std::sync::Arc;

/// A local signer bound to the two Sepolia networks. Either provider may be
/// absent; operations that need the missing side fail with a provider error
/// instead of touching the network.
pub struct DemoWallet<M, D>
where
    M: Middleware,
    D: PrehashSigner<(RecoverableSignature, RecoveryId)>,
{
    pub eth_provider: Option<Arc<SignerMiddleware<M, Wallet<D>>>>,
    pub era_provider: Option<Arc<SignerMiddleware<M, Wallet<D>>>>,
    pub wallet: Wallet<D>,
}

impl<M, D> DemoWallet<M, D>
where
    M: Middleware + 'static,
    D: PrehashSigner<(RecoverableSignature, RecoveryId)> + Sync + Send + Clone,
{
    pub fn new(wallet: Wallet<D>, era_provider: Option<M>, eth_provider: Option<M>) -> Self {
        Self {
            wallet: wallet.clone().with_chain_id(ERA_SEPOLIA_CHAIN_ID),
            era_provider: era_provider.map(|provider| {
                provider
                    .with_signer(wallet.clone().with_chain_id(ERA_SEPOLIA_CHAIN_ID))
                    .into()
            }),
            eth_provider: eth_provider.map(|provider| {
                provider
                    .with_signer(wallet.with_chain_id(ETH_SEPOLIA_CHAIN_ID))
                    .into()
            }),
        }
    }

    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    pub fn get_eth_provider(
        &self,
    ) -> Result<Arc<SignerMiddleware<M, Wallet<D>>>, DemoWalletError<M, D>> {
        match &self.eth_provider {
            Some(eth_provider) => Ok(Arc::clone(eth_provider)),
            None => Err(DemoWalletError::NoL1ProviderError()),
        }
    }

    pub fn get_era_provider(
        &self,
    ) -> Result<Arc<SignerMiddleware<M, Wallet<D>>>, DemoWalletError<M, D>> {
        match &self.era_provider {
            Some(era_provider) => Ok(Arc::clone(era_provider)),
            None => Err(DemoWalletError::NoL2ProviderError()),
        }
    }

    fn provider_for(
        &self,
        network: Network,
    ) -> Result<Arc<SignerMiddleware<M, Wallet<D>>>, DemoWalletError<M, D>> {
        match network {
            Network::Eth => self.get_eth_provider(),
            Network::Era => self.get_era_provider(),
        }
    }

    pub async fn balance_of(
        &self,
        of: Address,
        network: Network,
        block: BlockTag,
    ) -> Result<U256, DemoWalletError<M, D>>
    where
        M: ZKSProvider,
    {
        Ok(self.provider_for(network)?.get_balance_at(of, block).await?)
    }

    pub async fn transaction_count_of(
        &self,
        of: Address,
        network: Network,
        block: BlockTag,
    ) -> Result<U256, DemoWalletError<M, D>>
    where
        M: ZKSProvider,
    {
        Ok(self
            .provider_for(network)?
            .get_transaction_count_at(of, block)
            .await?)
    }

    /// Submits `approve(spender, amount)` on the token from this wallet's
    /// account and waits for the receipt. Nonce selection, gas estimation and
    /// broadcast are left to the signer middleware.
    pub async fn submit_erc20_approval(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TransactionReceipt, DemoWalletError<M, D>> {
        let era_provider = self.get_era_provider()?;
        ERC20::new(token, era_provider)
            .approve(spender, amount)
            .send()
            .await?
            .await?
            .ok_or(DemoWalletError::MissingReceiptError())
    }
}

#[async_trait]
impl<M, D> WalletOps for DemoWallet<M, D>
where
    M: Middleware + ZKSProvider + 'static,
    D: PrehashSigner<(RecoverableSignature, RecoveryId)> + Sync + Send + Clone + 'static + std::fmt::Debug,
{
    type Error = DemoWalletError<M, D>;

    async fn get_balance(
        &self,
        of: Address,
        network: Network,
        block: BlockTag,
    ) -> Result<U256, Self::Error> {
        self.balance_of(of, network, block).await
    }

    async fn get_transaction_count(
        &self,
        of: Address,
        network: Network,
        block: BlockTag,
    ) -> Result<U256, Self::Error> {
        self.transaction_count_of(of, network, block).await
    }

    async fn approve_erc20(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<bool, Self::Error> {
        let receipt = self.submit_erc20_approval(token, spender, amount).await?;
        Ok(tx_succeeded(&receipt))
    }
}
