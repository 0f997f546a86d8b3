//! `ClockworkConfig::from_default_location` search order.
//!
//! Changes the process working directory, so it lives alone in this test binary.

use clockwork::{ClockworkConfig, ConfigError};
use std::env;
use std::fs;
use tempfile::tempdir;

#[test]
fn searches_current_then_parent_directory() {
    let root = tempdir().unwrap();
    let project = root.path().join("project");
    fs::create_dir(&project).unwrap();

    let previous = env::current_dir().unwrap();
    env::set_current_dir(&project).unwrap();

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        assert!(matches!(
            ClockworkConfig::from_default_location(),
            Err(ConfigError::NotFound)
        ));

        fs::write(root.path().join("clockwork.toml"), "[circle]\nunit = \"hour\"\n").unwrap();
        let config = ClockworkConfig::from_default_location().unwrap();
        assert_eq!(config.circle().unwrap().full_arc(), 24.0);

        fs::write(project.join("clockwork.toml"), "[circle]\nunit = \"grad\"\n").unwrap();
        let config = ClockworkConfig::from_default_location().unwrap();
        assert_eq!(config.circle().unwrap().full_arc(), 400.0);

        fs::write(project.join("clockwork.toml"), "[circle\n").unwrap();
        assert!(matches!(
            ClockworkConfig::from_default_location(),
            Err(ConfigError::Parse(_))
        ));
    }));

    env::set_current_dir(previous).unwrap();
    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
}
