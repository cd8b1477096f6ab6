//! Routing of runtime invocations to contract functions.
//!
//! A runtime addresses a function either by its bare name (`put`) or
//! namespaced by contract (`KeyValueContract:put`). Arguments arrive as
//! strings and are checked for arity before the function runs.

use kvchain_shim::{Chaincode, Context, Response};
use tracing::debug;

use crate::contract::KeyValueContract;
use crate::error::{ContractError, ContractResult};

/// Run `function` with `args`, returning the payload on success.
///
/// `get` yields the value bytes; `put` and `delete` yield an empty payload.
pub fn route(
    contract: &KeyValueContract,
    ctx: &mut Context<'_>,
    function: &str,
    args: &[&str],
) -> ContractResult<Vec<u8>> {
    let name = resolve(function)?;
    debug!(tx_id = ctx.tx_id(), function = name, args = args.len(), "dispatch");
    match name {
        "put" => {
            expect_args(args, 2)?;
            contract.put(ctx, args[0], args[1])?;
            Ok(Vec::new())
        }
        "get" => {
            expect_args(args, 1)?;
            Ok(contract.get(ctx, args[0])?.into_bytes())
        }
        "delete" => {
            expect_args(args, 1)?;
            contract.delete(ctx, args[0])?;
            Ok(Vec::new())
        }
        _ => Err(ContractError::UnknownFunction(function.to_owned())),
    }
}

/// Run `function` with `args` and wrap the outcome in a [`Response`].
pub fn dispatch(
    contract: &KeyValueContract,
    ctx: &mut Context<'_>,
    function: &str,
    args: &[&str],
) -> Response {
    match route(contract, ctx, function, args) {
        Ok(payload) => Response::success(payload),
        Err(err) => Response::error(err.to_string()),
    }
}

/// Strip a matching contract namespace from `function` and check the
/// remaining name is one of [`KeyValueContract::FUNCTIONS`].
fn resolve(function: &str) -> ContractResult<&str> {
    let name = match function.split_once(':') {
        Some((namespace, name)) if namespace == KeyValueContract::NAME => name,
        Some(_) => return Err(ContractError::UnknownFunction(function.to_owned())),
        None => function,
    };
    if !KeyValueContract::FUNCTIONS.contains(&name) {
        return Err(ContractError::UnknownFunction(function.to_owned()));
    }
    Ok(name)
}

fn expect_args(args: &[&str], expected: usize) -> ContractResult<()> {
    if args.len() != expected {
        return Err(ContractError::ArgumentCount {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

impl Chaincode for KeyValueContract {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn invoke(&self, ctx: &mut Context<'_>, function: &str, args: &[&str]) -> Response {
        dispatch(self, ctx, function, args)
    }
}
