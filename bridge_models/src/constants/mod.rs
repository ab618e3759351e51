pub mod chains;
pub mod tokens;
