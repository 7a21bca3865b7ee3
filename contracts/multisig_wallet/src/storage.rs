use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::{DataKey, Transaction};

const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn require_initialized(env: &Env) {
    if !is_initialized(env) {
        panic_with_error!(env, WalletError::NotInitialized);
    }
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_entry(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn write_config(env: &Env, owners: &Vec<Address>, token: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Initialized, &true);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::Owners, owners);
    instance.set(&DataKey::Required, &owners.len());
    instance.set(&DataKey::TransactionCount, &0u64);

    for owner in owners.iter() {
        instance.set(&DataKey::Owner(owner), &true);
    }
}

pub fn read_owners(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .unwrap_or_else(|| panic_with_error!(env, WalletError::NotInitialized))
}

pub fn is_owner(env: &Env, owner: &Address) -> bool {
    env.storage().instance().has(&DataKey::Owner(owner.clone()))
}

pub fn read_required(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Required)
        .unwrap_or_else(|| panic_with_error!(env, WalletError::NotInitialized))
}

pub fn read_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, WalletError::NotInitialized))
}

pub fn read_transaction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0u64)
}

/// Appends `tx` to the transaction sequence and returns its index.
pub fn push_transaction(env: &Env, tx: &Transaction) -> u64 {
    let index = read_transaction_count(env);
    write_transaction(env, index, tx);
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &(index + 1));
    index
}

pub fn read_transaction(env: &Env, index: u64) -> Option<Transaction> {
    if index >= read_transaction_count(env) {
        return None;
    }
    env.storage().persistent().get(&DataKey::Transaction(index))
}

pub fn write_transaction(env: &Env, index: u64, tx: &Transaction) {
    let key = DataKey::Transaction(index);
    env.storage().persistent().set(&key, tx);
    bump_entry(env, &key);
}

pub fn is_approved(env: &Env, index: u64, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Approval(index, owner.clone()))
        .unwrap_or(false)
}

/// Records or clears one cell of the approval matrix. Cleared cells are
/// removed so the matrix only holds active approvals.
pub fn write_approval(env: &Env, index: u64, owner: &Address, approved: bool) {
    let key = DataKey::Approval(index, owner.clone());
    if approved {
        env.storage().persistent().set(&key, &true);
        bump_entry(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}
