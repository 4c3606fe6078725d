pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod git;
pub mod logging;
pub mod materialize;
pub mod model;
pub mod plan;
pub mod preview;
pub mod profile;
pub mod prompt;
pub mod run;
pub mod stats;
pub mod util;
