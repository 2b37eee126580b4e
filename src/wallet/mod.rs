mod errors;
pub use errors::DemoWalletError;

mod ops;
pub use ops::{Network, WalletOps};

mod wallet;
pub use wallet::DemoWallet;
