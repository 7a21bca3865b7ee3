#![no_std]

mod errors;
mod events;
mod storage;
mod types;
mod wallet;

pub use errors::WalletError;
pub use events::{
    ApprovalRevoked, DepositFunds, TransactionApproved, TransactionExecuted, TransactionSubmitted,
};
pub use types::{DataKey, Transaction};
pub use wallet::{MultisigWallet, MultisigWalletClient};
