use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown intensity '{0}' (expected one of: light, medium, heavy)")]
    UnknownIntensity(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Target path is not writable: {}", .0.display())]
    NotWritable(PathBuf),
    #[error("git {command} failed: {stderr}")]
    GitCommand { command: String, stderr: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Git init error: {0}")]
    Init(#[from] Box<gix::init::Error>),
    #[error("Git open error: {0}")]
    Open(#[from] Box<gix::open::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Commit decode error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::init::Error> for SimError {
    fn from(err: gix::init::Error) -> Self {
        SimError::Init(Box::new(err))
    }
}

impl From<gix::open::Error> for SimError {
    fn from(err: gix::open::Error) -> Self {
        SimError::Open(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for SimError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        SimError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for SimError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        SimError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for SimError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        SimError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for SimError {
    fn from(err: gix::objs::decode::Error) -> Self {
        SimError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for SimError {
    fn from(err: gix::object::commit::Error) -> Self {
        SimError::Commit(Box::new(err))
    }
}
