//! ItemContract - existence-gated CRUD and ownership transfer over world state.
//!
//! Every operation re-reads world state before acting and issues at most one
//! write; nothing is cached between calls. Concurrency control belongs to
//! the ledger: two transactions racing on the same id are resolved at
//! commit, not here.
//!
//! ## Example
//!
//! ```ignore
//! use item_ledger::{InMemoryContext, ItemContract};
//!
//! let contract = ItemContract::default();
//! let ctx = InMemoryContext::new();
//!
//! contract.create_item(&ctx, "X1", "Alice", "Lamp")?;
//! let previous = contract.transfer_item(&ctx, "X1", "Bob")?;
//! assert_eq!(previous, "Alice");
//! ```

use tracing::{debug, info};

use crate::auth::AuthorizationPolicy;
use crate::config::ContractConfig;
use crate::context::TransactionContext;
use crate::error::ContractError;
use crate::item::{default_bootstrap, Item};
use crate::state::ScanGuard;

/// The record store adapter.
#[derive(Debug, Clone)]
pub struct ItemContract {
    policy: AuthorizationPolicy,
    bootstrap: Vec<Item>,
}

impl Default for ItemContract {
    fn default() -> Self {
        Self::new(AuthorizationPolicy::default())
    }
}

impl ItemContract {
    /// Contract with the given allow-list and the stock bootstrap set.
    pub fn new(policy: AuthorizationPolicy) -> Self {
        Self {
            policy,
            bootstrap: default_bootstrap(),
        }
    }

    pub fn from_config(config: &ContractConfig) -> Self {
        Self {
            policy: config.authorization.clone(),
            bootstrap: config.bootstrap.clone(),
        }
    }

    /// Replace the records `init_ledger` writes.
    pub fn with_bootstrap(mut self, items: Vec<Item>) -> Self {
        self.bootstrap = items;
        self
    }

    pub fn policy(&self) -> &AuthorizationPolicy {
        &self.policy
    }

    pub fn bootstrap(&self) -> &[Item] {
        &self.bootstrap
    }

    /// Write the bootstrap set, overwriting any records already at those ids.
    pub fn init_ledger(&self, ctx: &dyn TransactionContext) -> Result<(), ContractError> {
        for item in &self.bootstrap {
            let bytes = item.to_bytes()?;
            ctx.stub().put_state(&item.id, bytes)?;
        }

        info!(count = self.bootstrap.len(), "initialized ledger");
        Ok(())
    }

    /// Whether a record is stored under `id`.
    pub fn item_exists(
        &self,
        ctx: &dyn TransactionContext,
        id: &str,
    ) -> Result<bool, ContractError> {
        require_id(id)?;
        Ok(ctx.stub().get_state(id)?.is_some())
    }

    /// Store a new record. Fails with `AlreadyExists` if `id` is taken.
    pub fn create_item(
        &self,
        ctx: &dyn TransactionContext,
        id: &str,
        owner: &str,
        value: &str,
    ) -> Result<(), ContractError> {
        if self.item_exists(ctx, id)? {
            return Err(ContractError::AlreadyExists { id: id.to_string() });
        }

        let item = Item::new(id, owner, value);
        ctx.stub().put_state(id, item.to_bytes()?)?;

        info!(id, owner, "created item");
        Ok(())
    }

    pub fn read_item(&self, ctx: &dyn TransactionContext, id: &str) -> Result<Item, ContractError> {
        require_id(id)?;
        let bytes = ctx
            .stub()
            .get_state(id)?
            .ok_or_else(|| ContractError::NotFound { id: id.to_string() })?;

        debug!(id, "read item");
        Item::from_bytes(&bytes)
    }

    /// Replace every field of an existing record.
    pub fn update_item(
        &self,
        ctx: &dyn TransactionContext,
        id: &str,
        owner: &str,
        value: &str,
    ) -> Result<(), ContractError> {
        if !self.item_exists(ctx, id)? {
            return Err(ContractError::NotFound { id: id.to_string() });
        }

        let item = Item::new(id, owner, value);
        ctx.stub().put_state(id, item.to_bytes()?)?;

        info!(id, owner, "updated item");
        Ok(())
    }

    pub fn delete_item(&self, ctx: &dyn TransactionContext, id: &str) -> Result<(), ContractError> {
        if !self.item_exists(ctx, id)? {
            return Err(ContractError::NotFound { id: id.to_string() });
        }

        ctx.stub().del_state(id)?;

        info!(id, "deleted item");
        Ok(())
    }

    /// Set a new owner, leaving the other fields alone. Returns the previous owner.
    pub fn transfer_item(
        &self,
        ctx: &dyn TransactionContext,
        id: &str,
        new_owner: &str,
    ) -> Result<String, ContractError> {
        let mut item = self.read_item(ctx, id)?;
        let previous = std::mem::replace(&mut item.owner, new_owner.to_string());

        ctx.stub().put_state(id, item.to_bytes()?)?;

        info!(id, from = %previous, to = new_owner, "transferred item");
        Ok(previous)
    }

    /// Every record in world state, in key order.
    ///
    /// One undecodable entry fails the whole listing. The range cursor is
    /// closed on every path out.
    pub fn get_all_items(&self, ctx: &dyn TransactionContext) -> Result<Vec<Item>, ContractError> {
        let mut scan = ScanGuard::new(ctx.stub().get_state_by_range("", "")?);

        let mut items = Vec::new();
        for entry in scan.by_ref() {
            let kv = entry?;
            items.push(Item::from_bytes(&kv.value)?);
        }
        scan.close()?;

        debug!(count = items.len(), "listed items");
        Ok(items)
    }

    /// Check the caller's certificate common name against the allow-list.
    pub fn check_authorization(&self, ctx: &dyn TransactionContext) -> Result<(), ContractError> {
        let identity = ctx.client_identity();
        let token = identity.caller_identity()?;
        let certificate = identity.extract_certificate(&token)?;

        self.policy.check(certificate.common_name())?;

        debug!(principal = certificate.common_name(), "caller authorized");
        Ok(())
    }
}

fn require_id(id: &str) -> Result<(), ContractError> {
    if id.is_empty() {
        return Err(ContractError::InvalidArgument("item id must not be empty".into()));
    }
    Ok(())
}
