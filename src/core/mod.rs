pub mod counter;
pub mod engine;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{CountReport, LetterCounts, SourceText};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
