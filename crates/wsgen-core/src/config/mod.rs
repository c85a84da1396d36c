//! `worksheet.toml` configuration

mod model;

pub use model::{
    CONFIG_FILE_NAME, DelimiterOverrides, EngineConfig, ProblemSpec, WorksheetConfig,
    WorksheetSection,
};
