use ethers::{
    prelude::{
        k256::{
            ecdsa::{RecoveryId, Signature as RecoverableSignature},
            schnorr::signature::hazmat::PrehashSigner,
        },
        signer::SignerMiddlewareError,
        SignerMiddleware,
    },
    providers::{Middleware, ProviderError},
    signers::{Wallet, WalletError},
};
use ethers_contract::ContractError;

#[derive(thiserror::Error, Debug)]
pub enum DemoWalletError<M, D>
where
    M: Middleware,
    D: PrehashSigner<(RecoverableSignature, RecoveryId)> + Sync + Send,
{
    #[error("Provider error: {0}")]
    ProviderError(#[from] ProviderError),
    #[error("Middleware error: {0}")]
    MiddlewareError(#[from] SignerMiddlewareError<M, Wallet<D>>),
    #[error("Wallet error: {0}")]
    EthWalletError(#[from] WalletError),
    #[error("No L1 Ethereum provider")]
    NoL1ProviderError(),
    #[error("No L2 zkSync Era provider")]
    NoL2ProviderError(),
    #[error("Transaction was submitted but no receipt came back")]
    MissingReceiptError(),
    #[error("{0}")]
    CustomError(String),
}

impl<M, D> From<ContractError<SignerMiddleware<M, Wallet<D>>>> for DemoWalletError<M, D>
where
    M: Middleware,
    D: PrehashSigner<(RecoverableSignature, RecoveryId)> + Sync + Send,
{
    fn from(value: ContractError<SignerMiddleware<M, Wallet<D>>>) -> Self {
        Self::CustomError(format!("{value:?}"))
    }
}
