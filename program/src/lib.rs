//! Counter program
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod entrypoint;
pub mod error;
pub mod instruction;
pub mod processor;
pub mod state;

solana_pubkey::declare_id!("EQ46cykdBXa9je65PeA4P6Uv5aXb9wJWNtf3jAckYzQ4");

/// Size in bytes of a counter account's data
pub const COUNTER_ACCOUNT_LEN: usize = std::mem::size_of::<state::CounterState>();
