use crate::errors::{Error, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::Command;

/// Run `git pull` inside `repo_dir`.
pub fn git_pull(repo_dir: &Path) -> Result<()> {
    let git = which::which("git").map_err(|e| Error::Git(format!("git not found in PATH: {e}")))?;

    tracing::info!("Pulling latest changes in {}", repo_dir.display());
    let status = Command::new(git)
        .arg("pull")
        .current_dir(repo_dir)
        .status()
        .map_err(|e| Error::Git(format!("failed to run git pull: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::Git(format!("git pull exited with {status}")))
    }
}

/// Pure function to interpret a yes/no answer
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}

/// Ask whether to continue after a failed pull.
pub fn confirm_without_pull(input: &mut impl BufRead, prompt_out: &mut impl Write) -> Result<()> {
    writeln!(prompt_out, "! could not pull latest changes from remote !")?;
    write!(prompt_out, "proceed without pulling? (y/n): ")?;
    prompt_out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if is_affirmative(&answer) {
        Ok(())
    } else {
        writeln!(prompt_out, "aborting...")?;
        Err(Error::Aborted("latest changes were not pulled".into()))
    }
}

/// Pull, and on failure let the user decide whether to continue.
pub fn try_pull(repo_dir: &Path) -> Result<()> {
    match git_pull(repo_dir) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::warn!("{}", e);
            let stdin = std::io::stdin();
            confirm_without_pull(&mut stdin.lock(), &mut std::io::stderr())
        }
    }
}
