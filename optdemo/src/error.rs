use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("{0}")]
    Lookup(#[from] optparse::LookupError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;
