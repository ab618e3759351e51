pub mod balances;
pub mod error;
pub mod max_amount;
pub mod networks;
pub mod state;
#[cfg(test)]
pub mod tests;
pub mod utils;
