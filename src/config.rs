//! Loader for the `config.ini` test-account credentials.
//!
//! The file carries a single `[zksync_test]` section with two address/key
//! pairs. Keys are validated eagerly: the address must be well-formed (and
//! EIP-55 correct when written in mixed case) and the private key must decode
//! to exactly the configured address.

use ethers::{
    signers::{LocalWallet, Signer},
    types::Address,
    utils::to_checksum,
};
use ini::{Ini, Properties};
use std::{path::Path, str::FromStr};

pub const CONFIG_SECTION: &str = "zksync_test";
pub const TEST_WALLET_1: &str = "test_wallet_1";
pub const TEST_PRIMARY_KEY_1: &str = "test_primary_key_1";
pub const TEST_WALLET_2: &str = "test_wallet_2";
pub const TEST_PRIMARY_KEY_2: &str = "test_primary_key_2";

const PRIVATE_KEY_BYTES: usize = 32;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Parse(#[from] ini::ParseError),
    #[error("missing section [{0}]")]
    MissingSection(&'static str),
    #[error("missing key {key:?} in section [{section}]")]
    MissingKey {
        section: &'static str,
        key: &'static str,
    },
    #[error("{key:?} is not a valid address: {message}")]
    InvalidAddress { key: &'static str, message: String },
    #[error("{key:?} fails its EIP-55 checksum, expected {expected}")]
    BadChecksum {
        key: &'static str,
        expected: String,
    },
    #[error("{key:?} is not a valid private key: {message}")]
    InvalidPrivateKey { key: &'static str, message: String },
    #[error("{key:?} derives {derived}, which is not the configured {expected}")]
    AddressMismatch {
        key: &'static str,
        derived: String,
        expected: String,
    },
}

/// One configured test account: the public address plus the signer derived
/// from its private key.
#[derive(Clone, Debug)]
pub struct TestAccount {
    pub address: Address,
    pub signer: LocalWallet,
}

#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub account_1: TestAccount,
    pub account_2: TestAccount,
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ini = Ini::load_from_file(path).map_err(|err| match err {
            ini::Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                ConfigError::NotFound(path.display().to_string())
            }
            ini::Error::Io(io) => ConfigError::Io(io),
            ini::Error::Parse(parse) => ConfigError::Parse(parse),
        })?;
        Self::from_ini(&ini)
    }

    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let section = ini
            .section(Some(CONFIG_SECTION))
            .ok_or(ConfigError::MissingSection(CONFIG_SECTION))?;
        Ok(Self {
            account_1: TestAccount::from_section(section, TEST_WALLET_1, TEST_PRIMARY_KEY_1)?,
            account_2: TestAccount::from_section(section, TEST_WALLET_2, TEST_PRIMARY_KEY_2)?,
        })
    }
}

impl TestAccount {
    fn from_section(
        section: &Properties,
        wallet_key: &'static str,
        private_key: &'static str,
    ) -> Result<Self, ConfigError> {
        let address = parse_checksummed(required(section, wallet_key)?, wallet_key)?;
        let signer = parse_private_key(required(section, private_key)?, private_key)?;

        let derived = signer.address();
        if derived != address {
            return Err(ConfigError::AddressMismatch {
                key: private_key,
                derived: to_checksum(&derived, None),
                expected: to_checksum(&address, None),
            });
        }

        Ok(Self { address, signer })
    }
}

fn required<'section>(
    section: &'section Properties,
    key: &'static str,
) -> Result<&'section str, ConfigError> {
    section.get(key).ok_or(ConfigError::MissingKey {
        section: CONFIG_SECTION,
        key,
    })
}

/// Accepts an all-lowercase address or a correctly EIP-55 checksummed one.
/// A mixed-case address with a wrong checksum is rejected rather than
/// silently normalized.
fn parse_checksummed(raw: &str, key: &'static str) -> Result<Address, ConfigError> {
    let address = Address::from_str(raw).map_err(|err| ConfigError::InvalidAddress {
        key,
        message: err.to_string(),
    })?;

    let body = raw.strip_prefix("0x").unwrap_or(raw);
    let expected = to_checksum(&address, None);
    if body.bytes().any(|byte| byte.is_ascii_uppercase()) && format!("0x{body}") != expected {
        return Err(ConfigError::BadChecksum { key, expected });
    }

    Ok(address)
}

fn parse_private_key(raw: &str, key: &'static str) -> Result<LocalWallet, ConfigError> {
    let body = raw.strip_prefix("0x").unwrap_or(raw);
    let bytes = hex::decode(body).map_err(|err| ConfigError::InvalidPrivateKey {
        key,
        message: err.to_string(),
    })?;
    if bytes.len() != PRIVATE_KEY_BYTES {
        return Err(ConfigError::InvalidPrivateKey {
            key,
            message: format!("expected {PRIVATE_KEY_BYTES} bytes, got {}", bytes.len()),
        });
    }
    LocalWallet::from_bytes(&bytes).map_err(|err| ConfigError::InvalidPrivateKey {
        key,
        message: err.to_string(),
    })
}
