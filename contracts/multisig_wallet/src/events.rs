use soroban_sdk::{contractevent, Address};

#[contractevent(topics = ["deposit"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositFunds {
    #[topic]
    pub sender: Address,
    pub amount: i128,
}

#[contractevent(topics = ["submit"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionSubmitted {
    pub index: u64,
}

#[contractevent(topics = ["approve"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionApproved {
    #[topic]
    pub owner: Address,
    pub index: u64,
}

#[contractevent(topics = ["revoke"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalRevoked {
    #[topic]
    pub owner: Address,
    pub index: u64,
}

#[contractevent(topics = ["execute"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionExecuted {
    pub index: u64,
}
