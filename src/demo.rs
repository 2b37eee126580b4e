//! The demo flow: snapshot both test accounts on both networks, read the
//! first account's nonce, then submit one ERC-20 approval from it.
//!
//! Everything runs in one strictly sequential pass. The first failure aborts
//! the run, wrapped with the operation and account that caused it, and no
//! result line is logged for anything past the failure point.

use crate::{
    config::DemoConfig,
    units,
    wallet::{Network, WalletOps},
    zks_provider::BlockTag,
};
use ethers::types::{Address, U256};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub address: Address,
    /// L1 balance in ETH, exact decimal string.
    pub eth_balance: String,
    /// L2 balance in ETH at the `committed` block, exact decimal string.
    pub era_balance: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoReport {
    pub before: [AccountSnapshot; 2],
    pub after: [AccountSnapshot; 2],
    pub nonce_latest: U256,
    pub nonce_committed: U256,
    pub approved_amount: U256,
    pub approval_submitted: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum DemoError<E>
where
    E: std::error::Error,
{
    #[error("{operation} failed for account {account:?}: {source}")]
    Account {
        operation: &'static str,
        account: Address,
        source: E,
    },
    #[error("ERC-20 approval for spender {spender:?} failed: {source}")]
    Approval { spender: Address, source: E },
}

pub async fn run<W>(
    config: &DemoConfig,
    wallet: &W,
    token: Address,
    spender: Address,
    amount: U256,
) -> Result<DemoReport, DemoError<W::Error>>
where
    W: WalletOps,
{
    let accounts = [config.account_1.address, config.account_2.address];

    let before = snapshot_accounts(wallet, accounts, "before").await?;
    // No transfer happens in between; the demo deliberately reads the same
    // balances twice. See DESIGN.md.
    let after = snapshot_accounts(wallet, accounts, "after").await?;

    let nonce_account = config.account_1.address;
    let nonce_latest = nonce(wallet, nonce_account, BlockTag::Latest).await?;
    let nonce_committed = nonce(wallet, nonce_account, BlockTag::Committed).await?;

    log::info!("Approving {amount} base units of {token:?} for spender {spender:?}");
    let approval_submitted = wallet
        .approve_erc20(token, spender, amount)
        .await
        .map_err(|source| DemoError::Approval { spender, source })?;
    log::info!("Approval submitted: {approval_submitted}");

    Ok(DemoReport {
        before,
        after,
        nonce_latest,
        nonce_committed,
        approved_amount: amount,
        approval_submitted,
    })
}

async fn snapshot_accounts<W>(
    wallet: &W,
    accounts: [Address; 2],
    label: &str,
) -> Result<[AccountSnapshot; 2], DemoError<W::Error>>
where
    W: WalletOps,
{
    let [first, second] = accounts;
    Ok([
        snapshot(wallet, first, label).await?,
        snapshot(wallet, second, label).await?,
    ])
}

async fn snapshot<W>(
    wallet: &W,
    account: Address,
    label: &str,
) -> Result<AccountSnapshot, DemoError<W::Error>>
where
    W: WalletOps,
{
    let eth = wallet
        .get_balance(account, Network::Eth, BlockTag::Latest)
        .await
        .map_err(|source| DemoError::Account {
            operation: "L1 balance query",
            account,
            source,
        })?;
    let era = wallet
        .get_balance(account, Network::Era, BlockTag::Committed)
        .await
        .map_err(|source| DemoError::Account {
            operation: "L2 balance query",
            account,
            source,
        })?;

    let snapshot = AccountSnapshot {
        address: account,
        eth_balance: units::format_eth(eth),
        era_balance: units::format_eth(era),
    };
    log::info!(
        "[{label}] {:?}: {} ETH on L1, {} ETH on zkSync Era",
        snapshot.address,
        snapshot.eth_balance,
        snapshot.era_balance
    );
    Ok(snapshot)
}

async fn nonce<W>(
    wallet: &W,
    account: Address,
    block: BlockTag,
) -> Result<U256, DemoError<W::Error>>
where
    W: WalletOps,
{
    let nonce = wallet
        .get_transaction_count(account, Network::Era, block)
        .await
        .map_err(|source| DemoError::Account {
            operation: "nonce query",
            account,
            source,
        })?;
    log::info!("Nonce for {account:?} at {block}: {nonce}");
    Ok(nonce)
}

#[cfg(test)]
mod tests {
    use super::{run, DemoError};
    use crate::{
        config::{DemoConfig, TestAccount},
        wallet::{Network, WalletOps},
        zks_provider::BlockTag,
    };
    use async_trait::async_trait;
    use ethers::{
        signers::{LocalWallet, Signer},
        types::{Address, U256},
    };
    use std::{collections::HashMap, str::FromStr, sync::Mutex};

    const KEY_1: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const KEY_2: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    #[derive(thiserror::Error, Debug)]
    #[error("mock rpc connection error")]
    struct MockError;

    #[derive(Default)]
    struct MockWallet {
        balances: HashMap<(Network, Address), U256>,
        nonces: HashMap<Address, U256>,
        fail_balance_for: Option<Address>,
        approvals: Mutex<Vec<(Address, Address, U256)>>,
    }

    #[async_trait]
    impl WalletOps for MockWallet {
        type Error = MockError;

        async fn get_balance(
            &self,
            of: Address,
            network: Network,
            _block: BlockTag,
        ) -> Result<U256, Self::Error> {
            if self.fail_balance_for == Some(of) {
                return Err(MockError);
            }
            Ok(self
                .balances
                .get(&(network, of))
                .copied()
                .unwrap_or_default())
        }

        async fn get_transaction_count(
            &self,
            of: Address,
            _network: Network,
            _block: BlockTag,
        ) -> Result<U256, Self::Error> {
            Ok(self.nonces.get(&of).copied().unwrap_or_default())
        }

        async fn approve_erc20(
            &self,
            token: Address,
            spender: Address,
            amount: U256,
        ) -> Result<bool, Self::Error> {
            self.approvals.lock().unwrap().push((token, spender, amount));
            Ok(true)
        }
    }

    fn test_config() -> DemoConfig {
        let signer_1 = LocalWallet::from_str(KEY_1).unwrap();
        let signer_2 = LocalWallet::from_str(KEY_2).unwrap();
        DemoConfig {
            account_1: TestAccount {
                address: signer_1.address(),
                signer: signer_1,
            },
            account_2: TestAccount {
                address: signer_2.address(),
                signer: signer_2,
            },
        }
    }

    fn token() -> Address {
        Address::repeat_byte(0x10)
    }

    #[tokio::test]
    async fn one_ether_is_reported_as_one_point_zero() {
        let config = test_config();
        let one_eth = U256::exp10(18);
        let mut wallet = MockWallet::default();
        for account in [config.account_1.address, config.account_2.address] {
            wallet.balances.insert((Network::Eth, account), one_eth);
            wallet.balances.insert((Network::Era, account), one_eth);
        }

        let spender = config.account_2.address;
        let report = run(&config, &wallet, token(), spender, U256::zero())
            .await
            .unwrap();

        assert_eq!(report.before[0].eth_balance, "1.0");
        assert_eq!(report.before[0].era_balance, "1.0");
        assert_eq!(report.before, report.after);
    }

    #[tokio::test]
    async fn zero_amount_approval_is_submitted_with_zero() {
        let config = test_config();
        let wallet = MockWallet::default();
        let spender = config.account_2.address;

        let report = run(&config, &wallet, token(), spender, U256::zero())
            .await
            .unwrap();

        assert!(report.approval_submitted);
        assert_eq!(report.approved_amount, U256::zero());
        let approvals = wallet.approvals.lock().unwrap();
        assert_eq!(approvals.as_slice(), &[(token(), spender, U256::zero())]);
    }

    #[tokio::test]
    async fn nonces_are_read_for_the_first_account() {
        let config = test_config();
        let mut wallet = MockWallet::default();
        wallet.nonces.insert(config.account_1.address, 7_u64.into());

        let report = run(
            &config,
            &wallet,
            token(),
            config.account_2.address,
            U256::zero(),
        )
        .await
        .unwrap();

        assert_eq!(report.nonce_latest, U256::from(7_u64));
        assert_eq!(report.nonce_committed, U256::from(7_u64));
    }

    #[tokio::test]
    async fn failing_balance_aborts_before_any_approval() {
        let config = test_config();
        let mut wallet = MockWallet::default();
        wallet.fail_balance_for = Some(config.account_2.address);

        let result = run(
            &config,
            &wallet,
            token(),
            config.account_2.address,
            U256::zero(),
        )
        .await;

        match result {
            Err(DemoError::Account {
                operation,
                account,
                ..
            }) => {
                assert_eq!(operation, "L1 balance query");
                assert_eq!(account, config.account_2.address);
            }
            other => panic!("expected an account error, got {other:?}"),
        }
        assert!(wallet.approvals.lock().unwrap().is_empty());
    }
}
