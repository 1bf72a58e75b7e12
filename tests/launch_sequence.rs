// Integration tests for the launch sequence
//
// These cover the observable invocation properties:
// - Conditional data preparation (only when the dataset is missing)
// - The unconditional pretraining call and its flag set
// - Exit-outcome propagation from the pretraining program

use std::fs;
use std::sync::Mutex;

use pretrain_launch::config::LaunchConfig;
use pretrain_launch::pipeline::Launcher;
use pretrain_launch::runner::{CommandRunner, Invocation, RunOutcome, RunnerError};
use tempfile::TempDir;

/// Records invocations instead of spawning, replying with scripted outcomes
struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    outcomes: Mutex<Vec<RunOutcome>>,
}

impl RecordingRunner {
    fn succeeding() -> Self {
        Self::scripted(Vec::new())
    }

    /// Outcomes are consumed in order; once exhausted every call succeeds
    fn scripted(outcomes: Vec<RunOutcome>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcomes: Mutex::new(outcomes),
        }
    }

    fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunOutcome, RunnerError> {
        self.calls.lock().unwrap().push(invocation.clone());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            Ok(RunOutcome::success())
        } else {
            Ok(outcomes.remove(0))
        }
    }
}

/// Default config with the dataset path moved into a scratch directory
fn config_in(dir: &TempDir) -> LaunchConfig {
    let mut config = LaunchConfig::default();
    config.data_file = dir.path().join("data/wikitext-103-raw-v1.txt");
    config
}

fn write_dataset(config: &LaunchConfig) {
    fs::create_dir_all(config.data_file.parent().unwrap()).unwrap();
    fs::write(&config.data_file, "the corpus\n").unwrap();
}

#[test]
fn present_dataset_skips_preparation() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    write_dataset(&config);

    let runner = RecordingRunner::succeeding();
    let outcome = Launcher::new(&config, &runner).launch().unwrap();

    assert!(outcome.is_success());
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, config.pretrain_program);
}

#[test]
fn missing_dataset_runs_preparation_first() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let runner = RecordingRunner::succeeding();
    Launcher::new(&config, &runner).launch().unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].program, config.prepare_program);
    assert!(calls[0].args.is_empty(), "preparation takes no arguments");
    assert_eq!(calls[1].program, config.pretrain_program);
}

#[test]
fn pretrain_flags_match_configuration() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    write_dataset(&config);

    let runner = RecordingRunner::succeeding();
    Launcher::new(&config, &runner).launch().unwrap();

    let calls = runner.calls();
    let expected = vec![
        "--train_cfg".to_string(),
        "config/pretrain.json".to_string(),
        "--model_cfg".to_string(),
        "config/bert_base.json".to_string(),
        "--data_file".to_string(),
        config.data_file.display().to_string(),
        "--vocab".to_string(),
        "data/vocab.txt".to_string(),
        "--save_dir".to_string(),
        "model".to_string(),
        "--max_len".to_string(),
        "512".to_string(),
        "--max_pred".to_string(),
        "20".to_string(),
        "--mask_prob".to_string(),
        "0.15".to_string(),
    ];
    assert_eq!(calls[0].args, expected);
}

#[test]
fn failed_preparation_does_not_stop_the_launch() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let runner =
        RecordingRunner::scripted(vec![RunOutcome::from_code(3), RunOutcome::success()]);
    let outcome = Launcher::new(&config, &runner).launch().unwrap();

    assert!(outcome.is_success());
    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].program, config.pretrain_program);
}

#[test]
fn launch_outcome_is_the_pretrain_outcome() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    write_dataset(&config);

    let runner = RecordingRunner::scripted(vec![RunOutcome::from_code(7)]);
    let outcome = Launcher::new(&config, &runner).launch().unwrap();

    assert_eq!(outcome.code(), 7);
    assert!(!outcome.is_success());
}

#[test]
fn overridden_hyperparameters_reach_the_command_line() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.max_len = 256;
    config.mask_prob = 0.2;
    write_dataset(&config);

    let runner = RecordingRunner::succeeding();
    Launcher::new(&config, &runner).launch().unwrap();

    let args = &runner.calls()[0].args;
    let value_of = |flag: &str| {
        let at = args.iter().position(|a| a == flag).unwrap();
        args[at + 1].clone()
    };
    assert_eq!(value_of("--max_len"), "256");
    assert_eq!(value_of("--mask_prob"), "0.2");
}
