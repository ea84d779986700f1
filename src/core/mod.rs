pub mod codec;
pub mod list;

pub use crate::domain::model::Item;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
