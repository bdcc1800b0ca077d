use std::{error::Error, fmt, io};

/// Malformed launcher environment: a variable is present but not numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvErr {
    pub var: &'static str,
    pub value: String,
}

impl fmt::Display for EnvErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.var, self.value)
    }
}

impl Error for EnvErr {}

/// Boundary conversion for binaries / I/O APIs.
impl From<EnvErr> for io::Error {
    fn from(value: EnvErr) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, value)
    }
}
