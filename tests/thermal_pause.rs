use std::{cell::RefCell, collections::VecDeque, rc::Rc, time::Duration};

use train_ops::{ThermalConfig, ThermalGovernor};

/// Sensor script plus a sleep recorder, both shared with the governor.
type Script = Rc<RefCell<VecDeque<f64>>>;
type SleepLog = Rc<RefCell<Vec<Duration>>>;

fn scripted(readings: &[f64]) -> (Box<dyn FnMut() -> f64>, Box<dyn FnMut(Duration)>, Script, SleepLog) {
    let script = Rc::new(RefCell::new(readings.iter().copied().collect::<VecDeque<_>>()));
    let sleeps = Rc::new(RefCell::new(Vec::new()));

    let sensor_script = Rc::clone(&script);
    let sensor = Box::new(move || {
        sensor_script
            .borrow_mut()
            .pop_front()
            .expect("sensor script exhausted")
    });

    let sleep_log = Rc::clone(&sleeps);
    let clock = Box::new(move |d: Duration| sleep_log.borrow_mut().push(d));

    (sensor, clock, script, sleeps)
}

#[test]
fn cool_history_never_pauses() {
    let sensor = || -> f64 { panic!("sensor must not be polled while cool") };
    let clock = |_: Duration| panic!("clock must not sleep while cool");
    let mut governor = ThermalGovernor::new(ThermalConfig::default(), sensor, clock);
    let mut history = governor.new_history();

    for temp in [70.0, 72.0, 75.0] {
        assert!(!governor.check_and_pause(&mut history, temp));
    }
    assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![70.0, 72.0, 75.0]);
}

#[test]
fn history_never_exceeds_capacity() {
    let cfg = ThermalConfig {
        history_size: 20,
        ..ThermalConfig::default()
    };
    let sensor = || -> f64 { panic!("sensor must not be polled") };
    let clock = |_: Duration| {};
    let mut governor = ThermalGovernor::new(cfg, sensor, clock);
    let mut history = governor.new_history();

    for step in 0..27 {
        assert!(!governor.check_and_pause(&mut history, 60.0 + step as f64 * 0.1));
        assert!(history.len() <= 20);
    }
    // Strict FIFO: exactly the last 20 samples, in insertion order.
    let kept: Vec<f64> = history.iter().copied().collect();
    let expected: Vec<f64> = (7..27).map(|s| 60.0 + s as f64 * 0.1).collect();
    assert_eq!(kept, expected);
}

#[test]
fn pause_blocks_until_cooled_then_clears_history() {
    // Seeded with the triggering mean (95.0), the pause buffer evolves as:
    //   [95]                         seed
    //   [95,85]            mean 90.0 len 2, too few samples
    //   [95,85,82]         mean 87.3 still hot
    //   [95,85,82,79]      mean 85.3 still hot
    //   [95,85,82,79,78]   mean 83.8 still hot
    //   [85,82,79,78,60]   mean 76.8 < 80, resume
    let (sensor, clock, script, sleeps) = scripted(&[85.0, 82.0, 79.0, 78.0, 60.0]);
    let mut governor = ThermalGovernor::new(ThermalConfig::default(), sensor, clock);
    let mut history = governor.new_history();

    assert!(governor.check_and_pause(&mut history, 95.0));

    assert!(history.is_empty());
    assert!(script.borrow().is_empty());
    let sleeps = sleeps.borrow();
    assert_eq!(sleeps.len(), 5);
    assert!(sleeps.iter().all(|d| *d == Duration::from_secs(10)));
}

#[test]
fn two_cool_samples_are_not_enough_to_resume() {
    // After the first poll the buffer is [92, 50]: mean 71 is below the
    // resume threshold but only two samples exist, so the loop must keep
    // going and poll once more.
    let (sensor, clock, script, sleeps) = scripted(&[50.0, 50.0]);
    let mut governor = ThermalGovernor::new(ThermalConfig::default(), sensor, clock);
    let mut history = governor.new_history();

    assert!(governor.check_and_pause(&mut history, 92.0));

    assert!(script.borrow().is_empty());
    assert_eq!(sleeps.borrow().len(), 2);
    assert!(history.is_empty());
}

#[test]
fn sentinel_readings_never_pause() {
    // An unreadable sensor reports 0.0, which reads as cold.
    let sensor = || -> f64 { panic!("sensor must not be polled") };
    let clock = |_: Duration| {};
    let mut governor = ThermalGovernor::new(ThermalConfig::default(), sensor, clock);
    let mut history = governor.new_history();

    for _ in 0..30 {
        assert!(!governor.check_and_pause(&mut history, 0.0));
    }
    assert_eq!(history.len(), 20);
    assert_eq!(history.mean(), 0.0);
}

#[test]
fn custom_thresholds_drive_the_episode() {
    let cfg = ThermalConfig {
        pause_threshold: 60.0,
        resume_threshold: 40.0,
        history_size: 3,
        poll_interval: Duration::from_millis(250),
        ..ThermalConfig::default()
    };
    // Seed mean 65; [65,30] mean 47.5 len 2; [65,30,30] mean 41.7 >= 40;
    // [65,30,30,20] mean 36.25 < 40, resume.
    let (sensor, clock, script, sleeps) = scripted(&[30.0, 30.0, 20.0]);
    let mut governor = ThermalGovernor::new(cfg, sensor, clock);
    let mut history = governor.new_history();

    assert!(!governor.check_and_pause(&mut history, 55.0));
    assert!(governor.check_and_pause(&mut history, 75.0));

    assert!(history.is_empty());
    assert!(script.borrow().is_empty());
    let sleeps = sleeps.borrow();
    assert_eq!(sleeps.len(), 3);
    assert!(sleeps.iter().all(|d| *d == Duration::from_millis(250)));
}
