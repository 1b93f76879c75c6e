pub mod assigner;
pub mod engine;

pub use crate::domain::model::{Assignment, Exclusions, Pairing, Participants};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
