use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Daily cost used when an account is registered without one.
pub const DEFAULT_DAILY_COST: Decimal = dec!(104.00);

/// Oldest year a ledger month may be opened for.
pub const MIN_LEDGER_YEAR: i32 = 1900;

/// Latest year a ledger month may be opened for.
pub const MAX_LEDGER_YEAR: i32 = 9999;
