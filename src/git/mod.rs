pub mod command;
pub mod repo;

pub use command::{set_local_identity, Identity, StagedCommit};
pub use repo::{GitRepo, HistoryIndex};
