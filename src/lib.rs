pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use self::core::{
    counter::{count_chars, count_letters},
    engine::{CountEngine, RunOutcome},
    pipeline::CountPipeline,
};
pub use domain::model::{CountReport, InputSource, LetterCounts, OutputFormat, SortOrder};
pub use utils::error::{CountError, Result};
