pub mod convert;
pub use convert::{MeshDocument, convert, convert_with, parse};

pub mod error;
pub use error::{MeshError, Result};

pub mod paths;
pub use paths::run;

mod parameters;
pub use parameters::{Args, LogLevel, Options};
