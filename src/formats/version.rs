//! `version.ini` language definitions
//!
//! Maps language IDs to display names via `LANGUAGE_<NAME> = id` lines.
//! Used only to decorate diagnostics with a language label derived from
//! the container file name.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Prefix of language definition lines
const LANGUAGE_PREFIX: &str = "LANGUAGE_";

/// File-name prefix a language container is expected to carry
const FILE_PREFIX: &str = "language";

/// Name of the definitions file looked up next to a container
const VERSION_FILE: &str = "version.ini";

/// Read language definitions from a `version.ini` file.
///
/// Returns `None` when the file is missing, unreadable, or defines no
/// languages, so callers can drop the label decoration entirely.
#[must_use]
pub fn read_language_map<P: AsRef<Path>>(path: P) -> Option<HashMap<u32, String>> {
    parse_language_map(&fs::read_to_string(path).ok()?)
}

/// Parse `version.ini` content. Blank lines and `--` comments are
/// ignored; so is any line not shaped `LANGUAGE_<NAME> = <integer>`.
#[must_use]
pub fn parse_language_map(content: &str) -> Option<HashMap<u32, String>> {
    let mut languages = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("--") {
            continue;
        }
        let Some(rest) = line.strip_prefix(LANGUAGE_PREFIX) else {
            continue;
        };
        let Some((name, value)) = rest.split_once('=') else {
            continue;
        };
        if let Ok(id) = value.trim().parse::<u32>() {
            languages.insert(id, name.trim().to_string());
        }
    }
    if languages.is_empty() {
        None
    } else {
        Some(languages)
    }
}

/// Build the decorative ` [Name (id)]` label for a container path from
/// the `language<digit>` file-name convention.
///
/// Any miss - no map, unconventional file name, unknown ID - yields an
/// empty label rather than an error.
#[must_use]
pub fn language_label(dat_path: &Path, languages: Option<&HashMap<u32, String>>) -> String {
    let Some(languages) = languages else {
        return String::new();
    };
    let Some(file_name) = dat_path.file_name().and_then(OsStr::to_str) else {
        return String::new();
    };
    let Some(rest) = file_name.strip_prefix(FILE_PREFIX) else {
        return String::new();
    };
    let Some(id) = rest.chars().next().and_then(|c| c.to_digit(10)) else {
        return String::new();
    };
    languages
        .get(&id)
        .map(|name| format!(" [{name} ({id})]"))
        .unwrap_or_default()
}

/// Look up the label for a container, loading `version.ini` from the
/// container's own directory.
#[must_use]
pub fn language_label_for<P: AsRef<Path>>(dat_path: P) -> String {
    let dat_path = dat_path.as_ref();
    let ini_path = dat_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(VERSION_FILE);
    let languages = read_language_map(ini_path);
    language_label(dat_path, languages.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INI: &str = "-- comment line\n\nLANGUAGE_ENGLISH = 0\nLANGUAGE_GERMAN = 1\nOTHER = 9\n";

    #[test]
    fn test_parse_language_map() {
        let map = parse_language_map(INI).unwrap();
        assert_eq!(map.get(&0).map(String::as_str), Some("ENGLISH"));
        assert_eq!(map.get(&1).map(String::as_str), Some("GERMAN"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_empty_or_commented_content_yields_none() {
        assert_eq!(parse_language_map(""), None);
        assert_eq!(parse_language_map("-- nothing here\n"), None);
        assert_eq!(parse_language_map("LANGUAGE_BROKEN = x\n"), None);
    }

    #[test]
    fn test_label_from_file_name() {
        let map = parse_language_map(INI);
        assert_eq!(
            language_label(Path::new("language0.dat"), map.as_ref()),
            " [ENGLISH (0)]"
        );
        assert_eq!(
            language_label(Path::new("data/language1.dat"), map.as_ref()),
            " [GERMAN (1)]"
        );
        // Unknown ID, unconventional name, missing map: empty label.
        assert_eq!(language_label(Path::new("language7.dat"), map.as_ref()), "");
        assert_eq!(language_label(Path::new("strings.dat"), map.as_ref()), "");
        assert_eq!(language_label(Path::new("language0.dat"), None), "");
    }

    #[test]
    fn test_label_for_loads_sibling_ini() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("version.ini"), INI).unwrap();
        let dat = dir.path().join("language1.dat");
        assert_eq!(language_label_for(&dat), " [GERMAN (1)]");
        // No version.ini next to the container: label disappears.
        assert_eq!(language_label_for(Path::new("language1.dat")), "");
    }
}
