pub mod args;
pub mod classify;
pub mod complete;
pub mod config;
pub mod dispatch;
pub mod generate;
pub mod shared;
