//! Chaincode - routes named transactions to `ItemContract` operations.
//!
//! The ledger runtime delivers a transaction name and a list of string
//! arguments. `Chaincode` holds the contract and a registry of named
//! handlers, checks arity, applies the authorization gate to state-changing
//! transactions when the policy enforces it, and encodes the result.
//!
//! ## Example
//!
//! ```ignore
//! use item_ledger::{Chaincode, InMemoryContext, InvocationRequest, ItemContract};
//!
//! let chaincode = Chaincode::new(ItemContract::default());
//! let ctx = InMemoryContext::new();
//!
//! chaincode.invoke(&ctx, "InitLedger", &[])?;
//! let response = chaincode.invoke_request(&ctx, &InvocationRequest::new("ReadItem", ["Item1"]));
//! assert!(response.is_ok());
//! ```
//!
//! ## Payloads
//!
//! | Transaction    | Kind     | Args              | Payload             |
//! |----------------|----------|-------------------|---------------------|
//! | `InitLedger`   | Submit   | -                 | empty               |
//! | `ItemExists`   | Evaluate | id                | `true` / `false`    |
//! | `CreateItem`   | Submit   | id, owner, value  | empty               |
//! | `ReadItem`     | Evaluate | id                | item JSON           |
//! | `UpdateItem`   | Submit   | id, owner, value  | empty               |
//! | `DeleteItem`   | Submit   | id                | empty               |
//! | `TransferItem` | Submit   | id, new owner     | previous owner      |
//! | `GetAllItems`  | Evaluate | -                 | JSON array of items |

mod transaction;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::context::TransactionContext;
use crate::contract::ItemContract;
use crate::error::ContractError;

pub use transaction::{InvocationRequest, Response, TransactionKind};

type Handler = Box<
    dyn Fn(&ItemContract, &dyn TransactionContext, &[String]) -> Result<Vec<u8>, ContractError>
        + Send
        + Sync,
>;

/// A registered transaction.
struct Transaction {
    kind: TransactionKind,
    arity: usize,
    handle: Handler,
}

/// Transaction registry and dispatcher for an `ItemContract`.
pub struct Chaincode {
    contract: ItemContract,
    transactions: HashMap<String, Transaction>,
}

impl Chaincode {
    /// Dispatcher with the item transactions registered.
    pub fn new(contract: ItemContract) -> Self {
        Self {
            contract,
            transactions: HashMap::new(),
        }
        .transaction("InitLedger", TransactionKind::Submit, 0, |contract, ctx, _| {
            contract.init_ledger(ctx)?;
            Ok(Vec::new())
        })
        .transaction("ItemExists", TransactionKind::Evaluate, 1, |contract, ctx, args| {
            let exists = contract.item_exists(ctx, &args[0])?;
            Ok(exists.to_string().into_bytes())
        })
        .transaction("CreateItem", TransactionKind::Submit, 3, |contract, ctx, args| {
            contract.create_item(ctx, &args[0], &args[1], &args[2])?;
            Ok(Vec::new())
        })
        .transaction("ReadItem", TransactionKind::Evaluate, 1, |contract, ctx, args| {
            contract.read_item(ctx, &args[0])?.to_bytes()
        })
        .transaction("UpdateItem", TransactionKind::Submit, 3, |contract, ctx, args| {
            contract.update_item(ctx, &args[0], &args[1], &args[2])?;
            Ok(Vec::new())
        })
        .transaction("DeleteItem", TransactionKind::Submit, 1, |contract, ctx, args| {
            contract.delete_item(ctx, &args[0])?;
            Ok(Vec::new())
        })
        .transaction("TransferItem", TransactionKind::Submit, 2, |contract, ctx, args| {
            let previous = contract.transfer_item(ctx, &args[0], &args[1])?;
            Ok(previous.into_bytes())
        })
        .transaction("GetAllItems", TransactionKind::Evaluate, 0, |contract, ctx, _| {
            let items = contract.get_all_items(ctx)?;
            Ok(serde_json::to_vec(&items)?)
        })
    }

    /// Register a transaction handler taking exactly `arity` arguments.
    ///
    /// Uses builder pattern - returns `self` for chaining. Registering an
    /// existing name replaces it.
    pub fn transaction<F>(
        mut self,
        name: &str,
        kind: TransactionKind,
        arity: usize,
        handler: F,
    ) -> Self
    where
        F: Fn(&ItemContract, &dyn TransactionContext, &[String]) -> Result<Vec<u8>, ContractError>
            + Send
            + Sync
            + 'static,
    {
        self.transactions.insert(
            name.to_string(),
            Transaction {
                kind,
                arity,
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Dispatch a transaction by name.
    pub fn invoke(
        &self,
        ctx: &dyn TransactionContext,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        let transaction = self
            .transactions
            .get(function)
            .ok_or_else(|| ContractError::UnknownTransaction(function.to_string()))?;

        if args.len() != transaction.arity {
            return Err(ContractError::InvalidArgument(format!(
                "{} expects {} argument(s), got {}",
                function,
                transaction.arity,
                args.len()
            )));
        }

        if transaction.kind == TransactionKind::Submit && self.contract.policy().enforce {
            self.contract.check_authorization(ctx)?;
        }

        debug!(transaction = function, "invoking transaction");
        (transaction.handle)(&self.contract, ctx, args)
    }

    /// Dispatch an `InvocationRequest`, folding errors into the `Response`.
    pub fn invoke_request(
        &self,
        ctx: &dyn TransactionContext,
        request: &InvocationRequest,
    ) -> Response {
        match self.invoke(ctx, &request.function, &request.args) {
            Ok(payload) => Response::ok(payload),
            Err(err) => {
                warn!(transaction = %request.function, error = %err, "transaction failed");
                Response::error(&err)
            }
        }
    }

    /// Registered transaction names, sorted.
    pub fn transactions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transactions.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn kind(&self, name: &str) -> Option<TransactionKind> {
        self.transactions.get(name).map(|t| t.kind)
    }

    pub fn contract(&self) -> &ItemContract {
        &self.contract
    }
}
