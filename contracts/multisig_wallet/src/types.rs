use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Token,
    Owners,
    Owner(Address),
    Required,
    TransactionCount,
    Transaction(u64),
    Approval(u64, Address),
}

/// A proposed outbound transfer of the pooled token.
///
/// `to` and `value` are fixed at submission; only `executed` and
/// `num_confirmations` change afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub to: Address,
    pub value: i128,
    pub executed: bool,
    pub num_confirmations: u32,
}
