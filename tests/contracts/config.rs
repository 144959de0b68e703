//! Configuration contracts
//!
//! Precedence, highest first: flags, FOLDER_DIFF_* variables, config file,
//! defaults.

use crate::common::*;

#[test]
fn contract_config_file_sets_mode_and_excludes() {
    let env = reference_env();
    let config = env.write_config("[compare]\nmode = \"nameOnly\"\nexclude = [\"d.txt\"]\n");
    let config = config.to_string_lossy().to_string();

    let result = env.compare(&["--config", &config]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("(mode: nameOnly)"));
    assert!(!result.stdout.contains("d.txt"));
}

#[test]
fn contract_flag_overrides_config_file() {
    let env = reference_env();
    let config = env.write_config("[compare]\nmode = \"nameOnly\"\n");
    let config = config.to_string_lossy().to_string();

    let result = env.compare(&["--config", &config, "--mode", "content"]);

    assert!(result.stdout.contains("~ b.txt"));
}

#[test]
fn contract_env_overrides_config_file() {
    let env = reference_env();
    let config = env.write_config("[compare]\nmode = \"content\"\n");
    let config = config.to_string_lossy().to_string();

    let result = env.run_with_env(
        &[&env.source_arg(), &env.target_arg(), "--config", &config],
        &[("FOLDER_DIFF_MODE", "nameOnly")],
    );

    assert!(result.stdout.contains("(mode: nameOnly)"));
}

#[test]
fn contract_missing_explicit_config_fails() {
    let env = reference_env();
    let missing = env.home.path().join("absent.toml");
    let missing = missing.to_string_lossy().to_string();

    let result = env.compare(&["--config", &missing]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid config"));
}

#[test]
fn contract_unknown_config_key_warns_but_runs() {
    let env = reference_env();
    let config = env.write_config("[compare]\nexcludes = [\"*.tmp\"]\n");
    let config = config.to_string_lossy().to_string();

    let result = env.compare(&["--config", &config]);

    assert!(result.success);
    assert!(result.stderr.contains("unknown config key"));
    assert!(result.stderr.contains("did you mean 'exclude'"));
}
