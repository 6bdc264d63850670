//! Interactive stdin prompts.

use anyhow::{Context, Result};
use std::io::Write;

/// Print a prompt and read one trimmed line from stdin.
pub fn line(message: &str) -> Result<String> {
    print!("{message}");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("failed to read from stdin")?;
    Ok(answer.trim().to_string())
}

/// Prompt for a line, substituting `default` when the answer is empty.
pub fn line_or(message: &str, default: &str) -> Result<String> {
    let answer = line(message)?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Ask a y/n question; only an exact `y` (case-insensitive) is yes.
pub fn confirm(message: &str) -> Result<bool> {
    let answer = line(message)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_y_confirms() {
        assert!(is_yes("y"));
        assert!(is_yes("Y"));
        assert!(!is_yes("yes"));
        assert!(!is_yes("yeah"));
        assert!(!is_yes("yellow"));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }
}
