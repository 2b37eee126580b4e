use crate::zks_provider::BlockTag;
use async_trait::async_trait;
use ethers::types::{Address, U256};
use std::{fmt, str::FromStr};

/// Which of the two configured networks an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    /// Ethereum Sepolia (L1).
    Eth,
    /// zkSync Era Sepolia (L2).
    Era,
}

impl fmt::Display for Network {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eth => "eth",
            Self::Era => "era",
        };
        formatter.write_str(name)
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "eth" => Ok(Self::Eth),
            "era" => Ok(Self::Era),
            other => Err(format!(
                "unknown network {other:?}, expected \"eth\" or \"era\""
            )),
        }
    }
}

/// The operations the demo needs from a wallet: balance and nonce lookups on
/// either network plus an ERC-20 approval on the L2. [`super::DemoWallet`] is
/// the production implementation; tests substitute fakes.
#[async_trait]
pub trait WalletOps {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get_balance(
        &self,
        of: Address,
        network: Network,
        block: BlockTag,
    ) -> Result<U256, Self::Error>;

    async fn get_transaction_count(
        &self,
        of: Address,
        network: Network,
        block: BlockTag,
    ) -> Result<U256, Self::Error>;

    /// Submits an `approve(spender, amount)` on the given token and reports
    /// whether the transaction succeeded.
    async fn approve_erc20(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<bool, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::Network;

    #[test]
    fn networks_parse_and_display() {
        assert_eq!("eth".parse::<Network>(), Ok(Network::Eth));
        assert_eq!("era".parse::<Network>(), Ok(Network::Era));
        assert_eq!(Network::Era.to_string(), "era");
        assert!("mainnet".parse::<Network>().is_err());
    }
}
