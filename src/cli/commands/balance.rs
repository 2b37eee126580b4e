use crate::cli::ZKSyncDemoConfig;
use crate::{
    providers::Provider,
    types::Address,
    units,
    wallet::Network,
    zks_provider::{BlockTag, ZKSProvider},
};
use clap::Args;

#[derive(Args)]
pub(crate) struct Balance {
    #[clap(short, long, name = "ACCOUNT_ADDRESS")]
    pub account: Address,
    #[clap(short, long, default_value = "era", name = "NETWORK")]
    pub network: Network,
    #[clap(short, long, default_value = "latest", name = "BLOCK_TAG")]
    pub block: BlockTag,
}

pub(crate) async fn run(args: Balance, config: ZKSyncDemoConfig) -> anyhow::Result<()> {
    let provider = Provider::try_from(config.rpc_url(args.network))?;
    let balance = provider.get_balance_at(args.account, args.block).await?;
    log::info!(
        "{:?} holds {} ETH ({balance} wei) on {} at the {} block",
        args.account,
        units::format_eth(balance),
        args.network,
        args.block
    );

    Ok(())
}
