mod args_handle;
mod config;

pub use args_handle::{args_handle, Args};
pub use config::Config;
