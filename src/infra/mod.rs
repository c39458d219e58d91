pub mod cli;
pub mod config;
pub mod ledger;
pub mod terminal;
pub mod wallet;
