use crate::cli::ZKSyncDemoConfig;
use crate::{
    providers::Provider,
    types::Address,
    wallet::Network,
    zks_provider::{BlockTag, ZKSProvider},
};
use clap::Args;

#[derive(Args)]
pub(crate) struct Nonce {
    #[clap(short, long, name = "ACCOUNT_ADDRESS")]
    pub account: Address,
    #[clap(short, long, default_value = "era", name = "NETWORK")]
    pub network: Network,
    #[clap(short, long, default_value = "latest", name = "BLOCK_TAG")]
    pub block: BlockTag,
}

pub(crate) async fn run(args: Nonce, config: ZKSyncDemoConfig) -> anyhow::Result<()> {
    let provider = Provider::try_from(config.rpc_url(args.network))?;
    let nonce = provider
        .get_transaction_count_at(args.account, args.block)
        .await?;
    log::info!(
        "Transaction count for {:?} on {} at the {} block: {nonce}",
        args.account,
        args.network,
        args.block
    );

    Ok(())
}
