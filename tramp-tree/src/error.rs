use std::fmt;

use crate::strategy::Strategy;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A traversal was requested by a name that is not one of the known strategies.
    InvalidStrategy(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidStrategy(name) => {
                write!(f, "invalid traversal strategy `{}`, expected one of: ", name)?;
                for (i, strategy) in Strategy::ALL.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", strategy)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {}
