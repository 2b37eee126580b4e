pub(crate) mod balance;
pub(crate) use balance::Balance;

pub(crate) mod nonce;
pub(crate) use nonce::Nonce;

pub(crate) mod approve;
pub(crate) use approve::Approve;

pub(crate) mod demo;
pub(crate) use demo::Demo;
