pub mod directory;

pub use crate::domain::locale::Locale;
pub use crate::domain::model::{Department, RawEntry};
pub use crate::domain::ports::{ConfigProvider, DirectorySource};
pub use crate::utils::error::Result;
