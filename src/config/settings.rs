// Launch configuration structs

use std::path::PathBuf;

/// Everything the launcher needs to assemble its two invocations.
///
/// The path and hyperparameter fields are passed through to the external
/// pretraining program verbatim; their meaning is owned by that program.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Data-preparation program, invoked with no arguments when the
    /// dataset file is missing
    pub prepare_program: PathBuf,

    /// Pretraining program
    pub pretrain_program: PathBuf,

    /// Training configuration file (--train_cfg)
    pub train_cfg: PathBuf,

    /// Model configuration file (--model_cfg)
    pub model_cfg: PathBuf,

    /// Raw text corpus consumed by the pretraining program (--data_file)
    pub data_file: PathBuf,

    /// Vocabulary file (--vocab)
    pub vocab: PathBuf,

    /// Directory the pretraining program writes checkpoints into (--save_dir)
    pub save_dir: PathBuf,

    /// Maximum sequence length (--max_len)
    pub max_len: usize,

    /// Maximum masked predictions per sequence (--max_pred)
    pub max_pred: usize,

    /// Token masking probability (--mask_prob)
    pub mask_prob: f64,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            prepare_program: PathBuf::from("scripts/prepare_data.py"),
            pretrain_program: PathBuf::from("scripts/pretrain.py"),
            train_cfg: PathBuf::from("config/pretrain.json"),
            model_cfg: PathBuf::from("config/bert_base.json"),
            data_file: PathBuf::from("data/wikitext-103-raw-v1.txt"),
            vocab: PathBuf::from("data/vocab.txt"),
            save_dir: PathBuf::from("model"),
            max_len: 512,
            max_pred: 20,
            mask_prob: 0.15,
        }
    }
}
