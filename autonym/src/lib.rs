pub mod code;
pub mod error;
pub mod lookup;
pub mod probe;
pub mod report;

pub use error::Error;

pub type AResult<T> = anyhow::Result<T>;
