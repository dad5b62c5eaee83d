/*!
 * Configuration Tests
 * File and environment loading
 */

use mlfq_sim::scheduler::QUANTA_ENV;
use mlfq_sim::{ConfigError, Mlfq, MlfqConfig};
use serial_test::serial;
use std::io::Write;

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"levels": 4, "quanta": [5, 10, 20, 40]}}"#).unwrap();

    let config = MlfqConfig::load(file.path()).unwrap();
    assert_eq!(config.levels(), 4);

    let mlfq = Mlfq::new(config);
    assert_eq!(mlfq.quantum(3), Some(40));
}

#[test]
fn test_load_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"quanta": [5, -1]}}"#).unwrap();

    assert!(matches!(
        MlfqConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        MlfqConfig::load("/nonexistent/mlfq.json"),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
#[serial]
fn test_config_from_env() {
    std::env::set_var(QUANTA_ENV, "3,6,12,24");
    let config = MlfqConfig::from_env();
    std::env::remove_var(QUANTA_ENV);

    assert_eq!(config.unwrap().quanta(), &[3, 6, 12, 24]);
}

#[test]
#[serial]
fn test_config_from_env_default() {
    std::env::remove_var(QUANTA_ENV);
    assert_eq!(MlfqConfig::from_env().unwrap(), MlfqConfig::default());
}

#[test]
#[serial]
fn test_config_from_env_invalid() {
    std::env::set_var(QUANTA_ENV, "10,0");
    let config = MlfqConfig::from_env();
    std::env::remove_var(QUANTA_ENV);

    assert_eq!(
        config,
        Err(ConfigError::NonPositiveQuantum {
            level: 1,
            quantum: 0
        })
    );
}
