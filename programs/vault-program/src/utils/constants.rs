pub const VAULT_SEED: &str = "vault";
pub const DEPOSITOR_SEED: &str = "depositor";

/// Fee rates are numerators over this denominator (3 = 0.3%).
pub const FEE_DENOMINATOR: u64 = 1_000;
