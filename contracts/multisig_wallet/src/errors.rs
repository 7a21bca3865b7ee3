use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    OwnersRequired = 3,
    InvalidOwner = 4,
    DuplicateOwner = 5,
    NotOwner = 6,
    TransactionDoesNotExist = 7,
    AlreadyApproved = 8,
    NotApproved = 9,
    AlreadyExecuted = 10,
    NotEnoughApprovals = 11,
    FailedToSendFunds = 12,
    InvalidAmount = 13,
}
