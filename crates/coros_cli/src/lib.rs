//! Command-line front end over the [`coros_client`] session client.
//!
//! The flows here are presentation glue: they log in, fetch one page of
//! activities, and either render a table or download one chosen export
//! file. All vendor-contract logic lives in `coros_client`.

pub mod commands;
pub mod error;
pub mod render;
