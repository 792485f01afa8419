use crate::terminal::execute_line;
use smartcalc::{trace_categories, VariableStore};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the rc file location
pub(crate) const RC_ENV: &str = "SMARTCALC_RC";

/// Get home directory
pub(crate) fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

/// Location of the startup file: $SMARTCALC_RC, else ~/.smartcalcrc
pub(crate) fn rc_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(RC_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs_home().map(|h| h.join(".smartcalcrc"))
}

/// Load and execute the rc file if it exists
pub(crate) fn load_rc(store: &mut VariableStore) {
    let path = match rc_path() {
        Some(p) => p,
        None => return,
    };

    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return, // Silently skip if missing
    };

    load_rc_content(store, &content, &path.display().to_string());
}

/// Execute rc content line by line; results are not printed and errors only
/// warn. Returns the number of lines that succeeded.
pub(crate) fn load_rc_content(store: &mut VariableStore, content: &str, label: &str) -> usize {
    let mut applied = 0;

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        tracing::debug!(target: trace_categories::INPUT, "{} line {}", label, line_num + 1);
        match execute_line(store, trimmed, false) {
            Ok(_) => applied += 1,
            Err(e) => eprintln!("Warning: {} line {}: {}", label, line_num + 1, e),
        }
    }

    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rc_assignments_seed_the_store() {
        let mut store = VariableStore::new();
        let content = "# defaults\nrate = 3\n\nbase = 100\n";
        assert_eq!(load_rc_content(&mut store, content, "test"), 2);
        assert_eq!(store.get("rate"), Some(3));
        assert_eq!(store.get("base"), Some(100));
    }

    #[test]
    fn bad_lines_are_skipped() {
        let mut store = VariableStore::new();
        let content = "a = 1\n1 = 2\nb = a\n";
        assert_eq!(load_rc_content(&mut store, content, "test"), 2);
        assert_eq!(store.get("b"), Some(1));
    }

    #[test]
    fn rc_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calcrc");
        fs::write(&path, "width = 8\nheight = 3\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut store = VariableStore::new();
        load_rc_content(&mut store, &content, &path.display().to_string());
        assert_eq!(store.get("width"), Some(8));
        assert_eq!(store.get("height"), Some(3));
    }
}
