// Pretrain-launch - masked-language-model pretraining launcher
// Library exports

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod runner;
