pub mod checkout;
pub mod config;
pub mod console;
pub mod git;
pub mod state;
