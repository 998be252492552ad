//! `mdbtools` backed table source
//!
//! Runs `mdb-tables` and `mdb-export` against a password-protected archive.
//! The password is handed to the tools through `MDB_JET_PASSWORD`.

use crate::error::LoaderError;
use crate::source::TableSource;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

const PASSWORD_ENV: &str = "MDB_JET_PASSWORD";
const TABLES_PROGRAM: &str = "mdb-tables";
const EXPORT_PROGRAM: &str = "mdb-export";

/// Table source reading an `.mdb` file with `mdbtools`
#[derive(Clone)]
pub struct MdbToolsSource {
    path: PathBuf,
    password: String,
}

impl fmt::Debug for MdbToolsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MdbToolsSource")
            .field("path", &self.path)
            .field("password", &"***")
            .finish()
    }
}

impl MdbToolsSource {
    /// Open an archive. Fails immediately when the file does not exist.
    pub fn new(path: impl AsRef<Path>, password: &str) -> crate::error::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(LoaderError::SourceNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        Ok(Self {
            path,
            password: password.to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run(&self, program: &str, args: &[&str], table: &str) -> crate::error::Result<String> {
        debug!("Running {} for {}", program, table);
        let output = Command::new(program)
            .arg(&self.path)
            .args(args)
            .env(PASSWORD_ENV, &self.password)
            .output()
            .map_err(|e| spawn_error(program, table, e))?;

        check_output(program, table, output)
    }
}

fn spawn_error(program: &str, table: &str, err: io::Error) -> anyhow::Error {
    let reason = if err.kind() == io::ErrorKind::NotFound {
        format!(
            "{} not found; install mdbtools (apt-get install mdbtools / brew install mdbtools)",
            program
        )
    } else {
        format!("failed to run {}: {}", program, err)
    };

    LoaderError::TableExportFailed {
        table: table.to_string(),
        reason,
    }
    .into()
}

fn check_output(program: &str, table: &str, output: Output) -> crate::error::Result<String> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(LoaderError::TableExportFailed {
            table: table.to_string(),
            reason: format!("{} exited with {}: {}", program, output.status, stderr.trim()),
        }
        .into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split `mdb-tables -1` output into table names
fn parse_table_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

impl TableSource for MdbToolsSource {
    fn list_tables(&self) -> crate::error::Result<Vec<String>> {
        let stdout = self.run(TABLES_PROGRAM, &["-1"], "<table list>")?;
        Ok(parse_table_list(&stdout))
    }

    fn export_table(&self, name: &str) -> crate::error::Result<String> {
        self.run(EXPORT_PROGRAM, &[name], name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_source_not_found() {
        let err = MdbToolsSource::new("/definitely/not/here.mdb", "secret").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoaderError>(),
            Some(LoaderError::SourceNotFound { .. })
        ));
    }

    #[test]
    fn test_existing_file_opens() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = MdbToolsSource::new(file.path(), "secret").unwrap();
        assert_eq!(source.path(), file.path());
    }

    #[test]
    fn test_debug_hides_password() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = MdbToolsSource::new(file.path(), "secret").unwrap();
        let printed = format!("{:?}", source);
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn test_parse_table_list() {
        let names = parse_table_list("players_atp\ngames_atp\n\n  tours_atp \n");
        assert_eq!(names, vec!["players_atp", "games_atp", "tours_atp"]);
    }

    #[test]
    fn test_spawn_error_mentions_install() {
        let err = spawn_error(
            EXPORT_PROGRAM,
            "games_atp",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("install mdbtools"));
    }
}
