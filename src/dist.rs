use std::env;

use crate::error::EnvErr;

const RANK: &str = "RANK";
const LOCAL_RANK: &str = "LOCAL_RANK";
const WORLD_SIZE: &str = "WORLD_SIZE";

/// Launcher-environment identity of this process.
///
/// `requested` is true when a distributed launcher exported the full set of
/// rank variables, even before any process group exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistInfo {
    pub requested: bool,
    pub rank: usize,
    pub local_rank: usize,
    pub world_size: usize,
}

impl DistInfo {
    /// Single-process identity.
    pub fn solo() -> Self {
        Self {
            requested: false,
            rank: 0,
            local_rank: 0,
            world_size: 1,
        }
    }

    /// Reads `RANK`, `LOCAL_RANK` and `WORLD_SIZE`.
    ///
    /// All three present means a distributed launch; anything less is a
    /// plain single-process run. Present but non-numeric values are an
    /// [`EnvErr`].
    pub fn from_env() -> Result<Self, EnvErr> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EnvErr> {
        let (Some(rank), Some(local_rank), Some(world_size)) =
            (lookup(RANK), lookup(LOCAL_RANK), lookup(WORLD_SIZE))
        else {
            return Ok(Self::solo());
        };

        Ok(Self {
            requested: true,
            rank: parse_var(RANK, &rank)?,
            local_rank: parse_var(LOCAL_RANK, &local_rank)?,
            world_size: parse_var(WORLD_SIZE, &world_size)?,
        })
    }

    pub fn is_primary(&self) -> bool {
        self.rank == 0
    }
}

fn parse_var(var: &'static str, value: &str) -> Result<usize, EnvErr> {
    value.trim().parse().map_err(|_| EnvErr {
        var,
        value: value.to_string(),
    })
}

/// Best-effort rank of this process: `RANK` if set and numeric, else 0.
pub fn rank() -> usize {
    env::var(RANK)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Prints to stdout on the primary process only; other ranks no-op.
///
/// Informational training-console output, not structured logging.
pub fn print0(msg: impl AsRef<str>) {
    if rank() == 0 {
        println!("{}", msg.as_ref());
    }
}
