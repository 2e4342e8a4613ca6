// src/lib.rs

//! Listing Watcher Library
//!
//! Checks the IDX listing activity page for new IPO/listing links and
//! sends each unseen one to a Telegram chat.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
