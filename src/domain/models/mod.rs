pub mod account;
pub mod credential;
pub mod preferences;
