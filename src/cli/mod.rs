pub(crate) mod commands;
use crate::{
    wallet::Network,
    zks_utils::{ERA_SEPOLIA_RPC_URL, ETH_SEPOLIA_RPC_URL},
};
use clap::{command, Args, Parser, Subcommand};
use commands::{approve, balance, demo, nonce, Approve, Balance, Demo, Nonce};

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name="zksync-sepolia-demo", author, version=VERSION_STRING, about, long_about = None)]
struct ZKSyncDemo {
    #[command(subcommand)]
    command: ZKSyncDemoCommand,
    #[clap(flatten)]
    config: ZKSyncDemoConfig,
}

#[derive(Args)]
pub struct ZKSyncDemoConfig {
    #[clap(long = "config", default_value = "config.ini", name = "CONFIG_FILE")]
    pub config_path: String,
    #[clap(long, default_value = ETH_SEPOLIA_RPC_URL)]
    pub l1_rpc_url: String,
    #[clap(long, default_value = ERA_SEPOLIA_RPC_URL)]
    pub l2_rpc_url: String,
}

impl ZKSyncDemoConfig {
    pub fn rpc_url(&self, network: Network) -> &str {
        match network {
            Network::Eth => &self.l1_rpc_url,
            Network::Era => &self.l2_rpc_url,
        }
    }
}

#[derive(Subcommand)]
enum ZKSyncDemoCommand {
    Balance(Balance),
    Nonce(Nonce),
    Approve(Approve),
    Demo(Demo),
}

pub async fn start() -> anyhow::Result<()> {
    let ZKSyncDemo { command, config } = ZKSyncDemo::parse();
    match command {
        ZKSyncDemoCommand::Balance(args) => balance::run(args, config).await?,
        ZKSyncDemoCommand::Nonce(args) => nonce::run(args, config).await?,
        ZKSyncDemoCommand::Approve(args) => approve::run(args, config).await?,
        ZKSyncDemoCommand::Demo(args) => demo::run(args, config).await?,
    };

    Ok(())
}
