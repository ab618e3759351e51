pub mod balances;
pub mod gas;
pub mod native_currency;
pub mod token;
