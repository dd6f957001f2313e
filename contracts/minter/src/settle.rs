//! Fee settlement through the token transfer proxy.

use soroban_sdk::{token, Address, Env, Map};

use crate::claim::MintClaim;
use crate::errors::MinterError;
use crate::interfaces::TransferProxyClient;

/// Move every claimed fee from `payer` to its recipient, in signed order.
///
/// The payer must have approved `proxy` for at least the cumulative amount
/// required per token contract, and must hold at least that balance. An
/// empty fee list is a no-op. Transfers already executed when a later one
/// fails are rolled back with the rest of the invocation.
pub fn settle(
    e: &Env,
    payer: &Address,
    claim: &MintClaim,
    proxy: &Address,
) -> Result<(), MinterError> {
    let count = claim.fee_recipients.len();
    if count == 0 {
        return Ok(());
    }

    let mut required: Map<Address, i128> = Map::new(e);
    for i in 0..count {
        let fee_token = claim.fee_tokens.get_unchecked(i);
        let total = required.get(fee_token.clone()).unwrap_or(0) + claim.fee_amounts.get_unchecked(i);
        required.set(fee_token, total);
    }
    for (fee_token, total) in required.iter() {
        let client = token::TokenClient::new(e, &fee_token);
        if client.allowance(payer, proxy) < total {
            return Err(MinterError::InsufficientAllowance);
        }
        if client.balance(payer) < total {
            return Err(MinterError::InsufficientBalance);
        }
    }

    let proxy_client = TransferProxyClient::new(e, proxy);
    let this = e.current_contract_address();
    for i in 0..count {
        proxy_client.transfer_from(
            &this,
            &claim.fee_tokens.get_unchecked(i),
            payer,
            &claim.fee_recipients.get_unchecked(i),
            &claim.fee_amounts.get_unchecked(i),
        );
    }
    Ok(())
}
