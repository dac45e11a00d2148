use crate::utils::{VaultError, FEE_DENOMINATOR};

uint::construct_uint! {
    struct U256(4);
}

/// Splits a withdrawal into the part paid out to the user and the part routed
/// to the fee collector.
///
/// # Arguments
/// * `amount` - Amount being withdrawn, in token base units
/// * `fee_rate` - Fee numerator over `FEE_DENOMINATOR` (3 = 0.3%)
///
/// # Returns
/// * `Result<(user_share, fee_share), VaultError>` - `fee_share` is
///   `floor(amount * fee_rate / FEE_DENOMINATOR)` and the two shares always
///   add up to `amount`
pub fn calculate_vault_fee(amount: u128, fee_rate: u64) -> Result<(u128, u128), VaultError> {
    if fee_rate > FEE_DENOMINATOR {
        return Err(VaultError::InvalidParameter);
    }

    if fee_rate == 0 || amount == 0 {
        return Ok((amount, 0));
    }

    // 256-bit product, so any u128 amount is priced exactly
    let fee = U256::from(amount) * U256::from(fee_rate) / U256::from(FEE_DENOMINATOR);
    let fee_share = u128::try_from(fee).map_err(|_| VaultError::OverflowInCast)?;

    // fee_rate <= FEE_DENOMINATOR keeps fee_share <= amount
    let user_share = amount
        .checked_sub(fee_share)
        .ok_or(VaultError::OverflowInSub)?;

    Ok((user_share, fee_share))
}
