use anchor_lang::error_code;


#[error_code]
pub enum VaultError {
    #[msg("Caller is not the vault admin")]
    Unauthorized,

    #[msg("Invalid parameter")]
    InvalidParameter,

    #[msg("Withdrawal exceeds ledger balance")]
    InsufficientBalance,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Vault token is not set")]
    TokenNotSet,

    #[msg("Token mint does not match the vault token")]
    InvalidTokenMint,

    #[msg("Ledger entry does not belong to signer")]
    InvalidDepositor,

    #[msg("Overflow in add")]
    OverflowInAdd,

    #[msg("Overflow in sub")]
    OverflowInSub,

    #[msg("Overflow in cast")]
    OverflowInCast,
}
