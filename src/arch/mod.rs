mod detect;
mod machine;

pub use detect::{host, QueryError};
pub use machine::{known_architectures, Machine};

#[cfg(unix)]
pub use detect::{uname, UtsName};
