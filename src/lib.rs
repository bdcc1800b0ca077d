pub mod basedir;
pub mod clock;
pub mod config;
pub mod dist;
pub mod error;
pub mod flops;
pub mod governor;
pub mod history;
pub mod profiler;
pub mod sensor;

pub use basedir::base_dir;
pub use clock::{Clock, SystemClock};
pub use config::ThermalConfig;
pub use dist::{DistInfo, print0, rank};
pub use error::EnvErr;
pub use flops::peak_flops_bf16;
pub use governor::{ThermalGovernor, ThermalState};
pub use history::TempHistory;
pub use profiler::{ResourceSnapshot, SystemProfiler};
pub use sensor::{SysfsSensor, TempSensor};
