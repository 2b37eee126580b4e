use crate::cli::ZKSyncDemoConfig;
use crate::{
    config::DemoConfig,
    providers::Provider,
    types::{Address, U256},
    wallet::{DemoWallet, WalletOps},
};
use clap::Args;

#[derive(Args)]
pub(crate) struct Approve {
    #[clap(short, long, name = "TOKEN_ADDRESS")]
    pub token: Address,
    #[clap(short, long, name = "SPENDER_ADDRESS")]
    pub spender: Address,
    #[clap(short, long, default_value = "0", name = "AMOUNT_IN_BASE_UNITS")]
    pub amount: U256,
}

pub(crate) async fn run(args: Approve, config: ZKSyncDemoConfig) -> anyhow::Result<()> {
    let demo_config = DemoConfig::load(&config.config_path)?;
    let era_provider = Provider::try_from(config.l2_rpc_url.as_str())?;
    let wallet = DemoWallet::new(
        demo_config.account_1.signer.clone(),
        Some(era_provider),
        None,
    );

    let submitted = wallet
        .approve_erc20(args.token, args.spender, args.amount)
        .await?;
    log::info!(
        "Approved {} base units of {:?} for spender {:?}: submitted = {submitted}",
        args.amount,
        args.token,
        args.spender
    );

    Ok(())
}
