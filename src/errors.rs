// User-friendly error messages
//
// Converts launch failures into actionable messages that point at the
// external programs and files involved.

use std::fmt;
use std::path::Path;

/// Format an unrunnable-program error with helpful suggestions
pub fn program_unavailable_error(path: &Path, description: &str) -> String {
    format!(
        "{} could not be run: {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • Program does not exist at this path\n\
        • Program is not executable\n\
        • Launcher started from the wrong working directory\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check the path:\n\
           \x1b[36mls -l {}\x1b[0m\n\n\
        2. Make it executable:\n\
           \x1b[36mchmod +x {}\x1b[0m\n\n\
        3. Point launch.toml at the right program:\n\
           \x1b[36mpretrain_program = \"scripts/pretrain.py\"\x1b[0m",
        description,
        path.display(),
        path.display(),
        path.display()
    )
}

/// Format a missing-dataset error with helpful suggestions
pub fn dataset_unavailable_error(path: &Path) -> String {
    format!(
        "Dataset not found: {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • Data preparation has never been run\n\
        • Preparation program failed before writing the corpus\n\
        • launch.toml points at the wrong data_file\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Run the preparation program by hand:\n\
           \x1b[36mscripts/prepare_data.py\x1b[0m\n\n\
        2. Check the file:\n\
           \x1b[36mls -l {}\x1b[0m",
        path.display(),
        path.display()
    )
}

/// Wrap a generic error with a suggestion
pub fn wrap_error_with_suggestion(error: impl fmt::Display, suggestion: &str) -> String {
    format!(
        "{}\n\n\
        \x1b[1;33mSuggestion:\x1b[0m {}",
        error, suggestion
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_program_unavailable_names_the_program() {
        let msg = program_unavailable_error(
            &PathBuf::from("scripts/pretrain.py"),
            "Pretraining program",
        );
        assert!(msg.contains("scripts/pretrain.py"));
        assert!(msg.contains("chmod +x"));
    }

    #[test]
    fn test_dataset_unavailable_suggests_preparation() {
        let msg = dataset_unavailable_error(&PathBuf::from("data/wikitext-103-raw-v1.txt"));
        assert!(msg.contains("data/wikitext-103-raw-v1.txt"));
        assert!(msg.contains("prepare_data.py"));
    }
}
