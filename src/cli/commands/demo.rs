use crate::cli::ZKSyncDemoConfig;
use crate::{
    config::DemoConfig,
    providers::Provider,
    types::{Address, U256},
    wallet::DemoWallet,
};
use clap::Args;

#[derive(Args)]
pub(crate) struct Demo {
    #[clap(short, long, name = "TOKEN_ADDRESS")]
    pub token: Address,
    /// Defaults to the second configured test wallet.
    #[clap(short, long, name = "SPENDER_ADDRESS")]
    pub spender: Option<Address>,
    #[clap(short, long, default_value = "0", name = "AMOUNT_IN_BASE_UNITS")]
    pub amount: U256,
}

pub(crate) async fn run(args: Demo, config: ZKSyncDemoConfig) -> anyhow::Result<()> {
    let demo_config = DemoConfig::load(&config.config_path)?;
    let eth_provider = Provider::try_from(config.l1_rpc_url.as_str())?;
    let era_provider = Provider::try_from(config.l2_rpc_url.as_str())?;
    let wallet = DemoWallet::new(
        demo_config.account_1.signer.clone(),
        Some(era_provider),
        Some(eth_provider),
    );

    let spender = args.spender.unwrap_or(demo_config.account_2.address);
    let report = crate::demo::run(&demo_config, &wallet, args.token, spender, args.amount).await?;
    log::info!(
        "Demo finished: approval of {} base units submitted = {}",
        report.approved_amount,
        report.approval_submitted
    );

    Ok(())
}
