use std::{env, io, thread, time::Duration};

use log::info;

use train_ops::{
    DistInfo, SysfsSensor, SystemClock, SystemProfiler, ThermalConfig, ThermalGovernor, print0,
};

const DEFAULT_INTERVAL_SECS: u64 = 10;

/// Standalone host monitor: emits a resource snapshot per tick on rank 0 and
/// runs the thermal governor against the live sensor. An optional first
/// argument bounds the number of ticks; the default is to run until killed.
fn main() -> io::Result<()> {
    env_logger::init();

    let dist = DistInfo::from_env().map_err(io::Error::from)?;
    info!(rank = dist.rank, world_size = dist.world_size; "thermal watch starting");

    let interval = env::var("WATCH_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);
    let ticks: Option<u64> = env::args().nth(1).and_then(|v| v.parse().ok());

    let mut governor = ThermalGovernor::new(ThermalConfig::default(), SysfsSensor::new(), SystemClock);
    let mut history = governor.new_history();
    let mut profiler = SystemProfiler::new();

    let mut taken = 0u64;
    loop {
        let snapshot = profiler.capture();
        print0(serde_json::to_string(&snapshot).map_err(io::Error::other)?);

        if governor.check_and_pause(&mut history, snapshot.cpu_temp_c) {
            info!("thermal pause window ended, history reset");
        }

        taken += 1;
        if ticks.is_some_and(|n| taken >= n) {
            break;
        }
        thread::sleep(Duration::from_secs(interval));
    }

    Ok(())
}
