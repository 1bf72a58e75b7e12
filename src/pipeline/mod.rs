// Launch pipeline
//
// Strictly sequential launcher behavior: make sure the dataset exists,
// then hand off to the external pretraining program.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::LaunchConfig;
use crate::errors;
use crate::runner::{CommandRunner, Invocation, RunOutcome};

pub struct Launcher<'a> {
    config: &'a LaunchConfig,
    runner: &'a dyn CommandRunner,
}

impl<'a> Launcher<'a> {
    pub fn new(config: &'a LaunchConfig, runner: &'a dyn CommandRunner) -> Self {
        Self { config, runner }
    }

    /// Run the full launch sequence and return the pretraining outcome
    pub fn launch(&self) -> Result<RunOutcome> {
        self.ensure_dataset();
        self.pretrain()
    }

    /// Check the dataset file, running the preparation program when absent.
    ///
    /// Preparation problems are logged and do not stop the launch: the
    /// pretraining program is invoked unconditionally and decides for
    /// itself whether it can proceed without the dataset.
    pub fn ensure_dataset(&self) {
        if self.config.data_file.exists() {
            info!(
                data_file = %self.config.data_file.display(),
                "Dataset present, skipping preparation"
            );
            return;
        }

        info!(
            data_file = %self.config.data_file.display(),
            "Dataset missing, running data preparation"
        );

        // Invoked with no arguments; the program owns its own paths
        let invocation = Invocation::new(&self.config.prepare_program);
        match self.runner.run(&invocation) {
            Ok(outcome) if outcome.is_success() => {
                info!("Data preparation finished");
            }
            Ok(outcome) => {
                warn!(
                    code = outcome.code(),
                    "Data preparation exited with failure, continuing"
                );
            }
            Err(e) => {
                warn!(error = %e, "Could not run data preparation, continuing");
            }
        }

        if !self.config.data_file.exists() {
            warn!(
                "{}",
                errors::dataset_unavailable_error(&self.config.data_file)
            );
        }
    }

    /// Unconditional pretraining invocation with the configured flags
    fn pretrain(&self) -> Result<RunOutcome> {
        let invocation = self.pretrain_invocation();
        info!(save_dir = %self.config.save_dir.display(), "Starting pretraining");

        let outcome = self.runner.run(&invocation).with_context(|| {
            errors::program_unavailable_error(&self.config.pretrain_program, "Pretraining program")
        })?;

        if outcome.is_success() {
            info!("Pretraining completed");
        } else {
            warn!(code = outcome.code(), "Pretraining exited with failure");
        }

        Ok(outcome)
    }

    /// Build the pretraining command line
    pub fn pretrain_invocation(&self) -> Invocation {
        Invocation::new(&self.config.pretrain_program)
            .flag("--train_cfg", self.config.train_cfg.display())
            .flag("--model_cfg", self.config.model_cfg.display())
            .flag("--data_file", self.config.data_file.display())
            .flag("--vocab", self.config.vocab.display())
            .flag("--save_dir", self.config.save_dir.display())
            .flag("--max_len", self.config.max_len)
            .flag("--max_pred", self.config.max_pred)
            .flag("--mask_prob", self.config.mask_prob)
    }
}
