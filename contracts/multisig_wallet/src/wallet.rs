use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, Env, Map, String, Vec,
};

use crate::errors::WalletError;
use crate::events::{
    ApprovalRevoked, DepositFunds, TransactionApproved, TransactionExecuted, TransactionSubmitted,
};
use crate::storage;
use crate::types::Transaction;

/// Strkeys of the all-zero account and contract ids; neither can own a wallet.
const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
const NULL_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    /// Registers the owner set and the token held in the pool.
    ///
    /// Every owner must approve a transaction before it can execute.
    pub fn initialize(env: Env, owners: Vec<Address>, token: Address) {
        if storage::is_initialized(&env) {
            panic_with_error!(&env, WalletError::AlreadyInitialized);
        }

        if owners.is_empty() {
            panic_with_error!(&env, WalletError::OwnersRequired);
        }

        let null_account = Address::from_string(&String::from_str(&env, NULL_ACCOUNT));
        let null_contract = Address::from_string(&String::from_str(&env, NULL_CONTRACT));

        let mut accepted: Map<Address, bool> = Map::new(&env);
        for owner in owners.iter() {
            if owner == null_account || owner == null_contract {
                panic_with_error!(&env, WalletError::InvalidOwner);
            }
            if accepted.contains_key(owner.clone()) {
                panic_with_error!(&env, WalletError::DuplicateOwner);
            }
            accepted.set(owner, true);
        }

        storage::write_config(&env, &owners, &token);
        storage::bump_instance(&env);

        log!(&env, "wallet initialized", owners.len(), token);
    }

    /// Moves `amount` of the pooled token from `from` into the wallet.
    /// Anyone may deposit; a zero amount still emits the event.
    pub fn deposit(env: Env, from: Address, amount: i128) {
        storage::require_initialized(&env);

        if amount < 0 {
            panic_with_error!(&env, WalletError::InvalidAmount);
        }

        from.require_auth();

        let token = token::Client::new(&env, &storage::read_token(&env));
        token.transfer(&from, &env.current_contract_address(), &amount);

        storage::bump_instance(&env);
        DepositFunds {
            sender: from.clone(),
            amount,
        }
        .publish(&env);
        log!(&env, "deposit", from, amount);
    }

    pub fn submit_transaction(env: Env, owner: Address, to: Address, value: i128) -> u64 {
        Self::require_owner(&env, &owner);

        // The value is checked against the pool only at execution.
        if value < 0 {
            panic_with_error!(&env, WalletError::InvalidAmount);
        }

        let index = storage::push_transaction(
            &env,
            &Transaction {
                to,
                value,
                executed: false,
                num_confirmations: 0,
            },
        );

        storage::bump_instance(&env);
        TransactionSubmitted { index }.publish(&env);
        log!(&env, "transaction submitted", index, owner);

        index
    }

    pub fn approve_transaction(env: Env, owner: Address, index: u64) {
        Self::require_owner(&env, &owner);

        let mut tx = Self::load_transaction(&env, index);

        if tx.executed {
            panic_with_error!(&env, WalletError::AlreadyExecuted);
        }

        if storage::is_approved(&env, index, &owner) {
            panic_with_error!(&env, WalletError::AlreadyApproved);
        }

        storage::write_approval(&env, index, &owner, true);
        tx.num_confirmations += 1;
        storage::write_transaction(&env, index, &tx);

        storage::bump_instance(&env);
        TransactionApproved {
            owner: owner.clone(),
            index,
        }
        .publish(&env);
        log!(&env, "transaction approved", index, owner, tx.num_confirmations);
    }

    pub fn revoke_approval(env: Env, owner: Address, index: u64) {
        Self::require_owner(&env, &owner);

        let mut tx = Self::load_transaction(&env, index);

        // Approvals freeze once the transfer has gone out.
        if tx.executed {
            panic_with_error!(&env, WalletError::AlreadyExecuted);
        }

        if !storage::is_approved(&env, index, &owner) {
            panic_with_error!(&env, WalletError::NotApproved);
        }

        storage::write_approval(&env, index, &owner, false);
        tx.num_confirmations -= 1;
        storage::write_transaction(&env, index, &tx);

        storage::bump_instance(&env);
        ApprovalRevoked {
            owner: owner.clone(),
            index,
        }
        .publish(&env);
        log!(&env, "approval revoked", index, owner, tx.num_confirmations);
    }

    /// Sends the transaction's value to its recipient once every owner has
    /// approved it.
    ///
    /// `executed` is committed before control passes to the token contract.
    /// A failed transfer aborts the invocation and with it that write; the
    /// transaction can be executed again once the transfer can succeed.
    pub fn execute_transaction(env: Env, owner: Address, index: u64) {
        Self::require_owner(&env, &owner);

        let mut tx = Self::load_transaction(&env, index);

        if tx.executed {
            panic_with_error!(&env, WalletError::AlreadyExecuted);
        }

        if tx.num_confirmations < storage::read_required(&env) {
            panic_with_error!(&env, WalletError::NotEnoughApprovals);
        }

        tx.executed = true;
        storage::write_transaction(&env, index, &tx);

        let token = token::Client::new(&env, &storage::read_token(&env));
        let sent = token.try_transfer(&env.current_contract_address(), &tx.to, &tx.value);
        if !matches!(sent, Ok(Ok(()))) {
            log!(&env, "transfer failed", index, tx.to, tx.value);
            panic_with_error!(&env, WalletError::FailedToSendFunds);
        }

        storage::bump_instance(&env);
        TransactionExecuted { index }.publish(&env);
        log!(&env, "transaction executed", index, owner);
    }

    pub fn is_owner(env: Env, owner: Address) -> bool {
        storage::is_owner(&env, &owner)
    }

    pub fn get_owners(env: Env) -> Vec<Address> {
        storage::require_initialized(&env);
        storage::read_owners(&env)
    }

    pub fn required_approvals(env: Env) -> u32 {
        storage::require_initialized(&env);
        storage::read_required(&env)
    }

    pub fn token(env: Env) -> Address {
        storage::require_initialized(&env);
        storage::read_token(&env)
    }

    /// Pooled balance held by the wallet.
    pub fn balance(env: Env) -> i128 {
        storage::require_initialized(&env);
        let token = token::Client::new(&env, &storage::read_token(&env));
        token.balance(&env.current_contract_address())
    }

    pub fn get_transaction_count(env: Env) -> u64 {
        storage::require_initialized(&env);
        storage::read_transaction_count(&env)
    }

    pub fn get_transaction(env: Env, index: u64) -> Transaction {
        storage::require_initialized(&env);
        Self::load_transaction(&env, index)
    }

    pub fn is_approved(env: Env, index: u64, owner: Address) -> bool {
        storage::require_initialized(&env);
        storage::is_approved(&env, index, &owner)
    }

    /// Owners holding an active approval on `index`, in owner order.
    pub fn get_approvers(env: Env, index: u64) -> Vec<Address> {
        storage::require_initialized(&env);
        Self::load_transaction(&env, index);

        let mut approvers = Vec::new(&env);
        for owner in storage::read_owners(&env).iter() {
            if storage::is_approved(&env, index, &owner) {
                approvers.push_back(owner);
            }
        }
        approvers
    }

    fn require_owner(env: &Env, owner: &Address) {
        storage::require_initialized(env);
        owner.require_auth();

        if !storage::is_owner(env, owner) {
            panic_with_error!(env, WalletError::NotOwner);
        }
    }

    fn load_transaction(env: &Env, index: u64) -> Transaction {
        storage::read_transaction(env, index)
            .unwrap_or_else(|| panic_with_error!(env, WalletError::TransactionDoesNotExist))
    }
}
