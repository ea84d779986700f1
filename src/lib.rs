pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::shell::Shell;
pub use config::{cli::LocalStorage, CliConfig};
pub use core::{codec, list::ShoppingList};
pub use domain::model::Item;
pub use utils::error::{ListError, Result};
