use ethers::types::{TransactionReceipt, U64};

/* Networks */

pub const ETH_SEPOLIA_CHAIN_ID: u64 = 11_155_111;
pub const ERA_SEPOLIA_CHAIN_ID: u64 = 300;

pub const ETH_SEPOLIA_RPC_URL: &str = "https://ethereum-sepolia-rpc.publicnode.com";
pub const ERA_SEPOLIA_RPC_URL: &str = "https://sepolia.era.zksync.dev";

/// A receipt without a status field counts as a success, matching the
/// pre-Byzantium convention the RPC stack still allows.
pub fn tx_succeeded(receipt: &TransactionReceipt) -> bool {
    let tx_has_failed = receipt.status.as_ref().is_some_and(U64::is_zero);
    !tx_has_failed
}

#[cfg(test)]
mod tests {
    use super::tx_succeeded;
    use ethers::types::TransactionReceipt;

    #[test]
    fn status_one_is_a_success() {
        let receipt = TransactionReceipt {
            status: Some(1_u64.into()),
            ..Default::default()
        };
        assert!(tx_succeeded(&receipt));
    }

    #[test]
    fn status_zero_is_a_failure() {
        let receipt = TransactionReceipt {
            status: Some(0_u64.into()),
            ..Default::default()
        };
        assert!(!tx_succeeded(&receipt));
    }

    #[test]
    fn missing_status_is_a_success() {
        let receipt = TransactionReceipt::default();
        assert!(tx_succeeded(&receipt));
    }
}
