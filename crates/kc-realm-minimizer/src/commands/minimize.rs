//! Minimize command implementation.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::model::RealmDocument;
use crate::transform::minimize;
use crate::{MinimizerError, MinimizerResult};

/// What a minimize run read, wrote and kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Input file.
    pub input_path: PathBuf,
    /// Size of the input file in bytes.
    pub input_bytes: usize,
    /// Output file.
    pub output_path: PathBuf,
    /// Size of the output file in bytes.
    pub output_bytes: usize,
    /// Retained client IDs.
    pub clients: Vec<String>,
    /// Retained realm role names.
    pub roles: Vec<String>,
    /// Usernames carried through.
    pub users: Vec<String>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "input: {} ({} bytes)",
            self.input_path.display(),
            self.input_bytes
        )?;
        writeln!(
            f,
            "output: {} ({} bytes)",
            self.output_path.display(),
            self.output_bytes
        )?;
        writeln!(f, "clients: {:?}", self.clients)?;
        writeln!(f, "roles: {:?}", self.roles)?;
        write!(f, "users: {:?}", self.users)
    }
}

/// Runs the minimize command: reads `input`, writes the minimized realm to
/// `output`.
///
/// The output file is written only once the whole document has been
/// transformed, so a failing input never creates or touches it.
pub fn run_minimize(input: &Path, output: &Path) -> MinimizerResult<Summary> {
    let bytes = std::fs::read(input).map_err(|e| MinimizerError::io(input, e))?;
    tracing::info!(path = %input.display(), bytes = bytes.len(), "read realm export");

    let document = RealmDocument::from_slice(&bytes)?;
    tracing::debug!(
        realm = %document.realm,
        clients = document.clients.len(),
        roles = document.realm_roles.len(),
        users = document.users.len(),
        "parsed realm export"
    );

    let minimal = minimize(document);
    let json = minimal.to_json()?;

    std::fs::write(output, &json).map_err(|e| MinimizerError::io(output, e))?;
    tracing::info!(path = %output.display(), bytes = json.len(), "wrote minimized realm");

    Ok(Summary {
        input_path: input.to_path_buf(),
        input_bytes: bytes.len(),
        output_path: output.to_path_buf(),
        output_bytes: json.len(),
        clients: to_owned(minimal.client_ids()),
        roles: to_owned(minimal.role_names()),
        users: to_owned(minimal.usernames()),
    })
}

fn to_owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_renders_five_lines() {
        let summary = Summary {
            input_path: PathBuf::from("full-realm.json"),
            input_bytes: 120_345,
            output_path: PathBuf::from("hamster-world-realm.json"),
            output_bytes: 2_048,
            clients: vec!["my-app".to_string()],
            roles: vec!["app-admin".to_string(), "staff".to_string()],
            users: vec![],
        };

        assert_eq!(
            summary.to_string(),
            "input: full-realm.json (120345 bytes)\n\
             output: hamster-world-realm.json (2048 bytes)\n\
             clients: [\"my-app\"]\n\
             roles: [\"app-admin\", \"staff\"]\n\
             users: []"
        );
    }

    #[test]
    fn minimizes_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("full-realm.json");
        let output = dir.path().join("realm.json");
        std::fs::write(
            &input,
            r#"{"realm":"shop","clients":[{"clientId":"broker"},{"clientId":"web"}],"users":[{"username":"alice"}]}"#,
        )
        .unwrap();

        let summary = run_minimize(&input, &output).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(summary.output_bytes, written.len());
        assert_eq!(summary.input_bytes, std::fs::metadata(&input).unwrap().len() as usize);
        assert_eq!(summary.clients, ["web"]);
        assert!(summary.roles.is_empty());
        assert_eq!(summary.users, ["alice"]);
    }

    #[test]
    fn missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("realm.json");

        let err = run_minimize(&dir.path().join("absent.json"), &output).unwrap_err();

        assert!(matches!(err, MinimizerError::Io { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn schema_error_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("full-realm.json");
        let output = dir.path().join("realm.json");
        std::fs::write(&input, r#"{"realm":"shop","users":[{"email":"x@example.com"}]}"#).unwrap();
        std::fs::write(&output, "previous").unwrap();

        let err = run_minimize(&input, &output).unwrap_err();

        assert!(matches!(err, MinimizerError::Schema { entity: "user", .. }));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
    }
}
