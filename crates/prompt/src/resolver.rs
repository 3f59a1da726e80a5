//! Prompt resolution against a registry directory.
//!
//! A registry is a directory whose immediate, non-hidden subdirectories are
//! namespaces. Each namespace holds prompt files named
//! `<name>-<version>.md` (or legacy `<name>.md`). Every call re-reads the
//! filesystem; nothing is cached between calls.

use crate::frontmatter::{missing_required_keys, parse_frontmatter};
use crate::specifier::{parse_specifier, PromptSpecifier, VersionSelector};
use crate::types::{legacy_file_name, versioned_file_name, PromptRecord, PROMPT_EXTENSION};
use promptctl_core::{AppError, AppResult};
use std::cmp::Ordering;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of resolving a specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NotFound,
    Unique(PromptRecord),
    /// Several candidates, highest version first
    Ambiguous(Vec<PromptRecord>),
}

impl Resolution {
    /// The single record, or a `Resolution` error describing what was found.
    pub fn into_unique(self, spec: &PromptSpecifier) -> AppResult<PromptRecord> {
        match self {
            Resolution::Unique(record) => Ok(record),
            Resolution::NotFound => Err(AppError::Resolution(format!(
                "No prompt matches '{}'",
                spec
            ))),
            Resolution::Ambiguous(records) => {
                let candidates = records
                    .iter()
                    .map(|r| r.specifier().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(AppError::Resolution(format!(
                    "'{}' is ambiguous, candidates: {}",
                    spec, candidates
                )))
            }
        }
    }
}

/// A file that has frontmatter but lacks required keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPromptFile {
    pub path: PathBuf,
    pub missing: Vec<&'static str>,
}

/// Resolves prompt specifiers against one registry root.
#[derive(Debug, Clone)]
pub struct PromptResolver {
    root: PathBuf,
}

impl PromptResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of all namespace directories, sorted.
    ///
    /// A missing root yields no namespaces. A root that exists but cannot be
    /// read is `NotReadable`.
    pub fn namespaces(&self) -> AppResult<Vec<String>> {
        Ok(self
            .namespace_dirs()?
            .iter()
            .filter_map(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    /// Every prompt in the registry. Files without frontmatter are skipped.
    ///
    /// The order follows directory enumeration and is not part of the
    /// contract; use [`sort_records`] when an order matters.
    ///
    /// # Example
    /// ```no_run
    /// use promptctl_prompt::PromptResolver;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let resolver = PromptResolver::new("/home/me/.promptctl/registry");
    /// for record in resolver.list_all()? {
    ///     println!("{}/{}@{}", record.namespace, record.name, record.version);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_all(&self) -> AppResult<Vec<PromptRecord>> {
        let mut records = Vec::new();

        for path in self.prompt_files()? {
            if let Some(record) = load_record(&path)? {
                records.push(record);
            }
        }

        tracing::debug!("Found {} prompts under {:?}", records.len(), self.root);
        Ok(records)
    }

    /// Resolve a raw specifier string.
    pub fn resolve_str(&self, raw: &str) -> AppResult<Resolution> {
        self.resolve(&parse_specifier(raw))
    }

    /// Resolve a specifier.
    ///
    /// - no match: `NotFound`
    /// - `@latest`: `Unique` holding the highest version
    /// - one match: `Unique`
    /// - several matches: `Ambiguous`, highest version first
    pub fn resolve(&self, spec: &PromptSpecifier) -> AppResult<Resolution> {
        let resolution = select(self.list_all()?, spec);

        match &resolution {
            Resolution::NotFound => tracing::debug!("'{}' matched nothing", spec),
            Resolution::Unique(record) => {
                tracing::debug!("'{}' resolved to {:?}", spec, record.source_path)
            }
            Resolution::Ambiguous(records) => {
                tracing::debug!("'{}' matched {} prompts", spec, records.len())
            }
        }

        Ok(resolution)
    }

    /// Path of a prompt file: the versioned file when it exists, otherwise
    /// the legacy `<name>.md`, otherwise `None`.
    pub fn locate(&self, namespace: &str, name: &str, version: &str) -> Option<PathBuf> {
        let dir = self.root.join(namespace);

        let versioned = dir.join(versioned_file_name(name, version));
        if versioned.is_file() {
            return Some(versioned);
        }

        let legacy = dir.join(legacy_file_name(name));
        legacy.is_file().then_some(legacy)
    }

    /// Write a record to `<root>/<namespace>/<name>-<version>.md`.
    ///
    /// Refuses to replace an existing file unless `overwrite` is set, and
    /// refuses metadata values containing line breaks.
    /// Returns the written path.
    pub fn save(&self, record: &PromptRecord, overwrite: bool) -> AppResult<PathBuf> {
        validate_segment("namespace", &record.namespace)?;
        validate_segment("name", &record.name)?;

        let multiline = record.multiline_fields();
        if !multiline.is_empty() {
            return Err(AppError::Prompt(format!(
                "Metadata must fit on one line; line breaks found in: {}",
                multiline.join(", ")
            )));
        }

        let dir = self.root.join(&record.namespace);
        let path = dir.join(record.file_name());

        if path.exists() && !overwrite {
            return Err(AppError::Prompt(format!(
                "{} already exists at {:?}",
                record.specifier(),
                path
            )));
        }

        fs::create_dir_all(&dir)?;
        fs::write(&path, record.to_file_string())?;

        tracing::info!("Saved {} to {:?}", record.specifier(), path);
        Ok(path)
    }

    /// Remove the file backing a record.
    pub fn delete(&self, record: &PromptRecord) -> AppResult<()> {
        fs::remove_file(&record.source_path)?;
        tracing::info!("Deleted {:?}", record.source_path);
        Ok(())
    }

    /// Prompt files whose metadata block lacks required keys.
    pub fn invalid_files(&self) -> AppResult<Vec<InvalidPromptFile>> {
        let mut invalid = Vec::new();

        for path in self.prompt_files()? {
            let Some(text) = read_prompt_text(&path)? else {
                continue;
            };
            if parse_frontmatter(&text).is_none() {
                continue;
            }
            let missing = missing_required_keys(&text);
            if !missing.is_empty() {
                invalid.push(InvalidPromptFile { path, missing });
            }
        }

        Ok(invalid)
    }

    /// Immediate, non-hidden subdirectories of the root, sorted by name.
    fn namespace_dirs(&self) -> AppResult<Vec<PathBuf>> {
        match fs::metadata(&self.root) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Registry {:?} does not exist yet", self.root);
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AppError::NotReadable {
                    path: self.root.clone(),
                    source: e,
                })
            }
            Ok(meta) if !meta.is_dir() => {
                tracing::warn!("Registry {:?} is not a directory", self.root);
                return Ok(Vec::new());
            }
            Ok(_) => {}
        }

        let mut dirs = Vec::new();
        for entry in shallow_walk(&self.root) {
            let entry = entry.map_err(walk_error)?;
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            if entry.file_type().is_dir() && !hidden {
                dirs.push(entry.into_path());
            }
        }
        Ok(dirs)
    }

    /// Every `.md` file directly inside a namespace directory.
    fn prompt_files(&self) -> AppResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for dir in self.namespace_dirs()? {
            for entry in shallow_walk(&dir) {
                let entry = entry.map_err(walk_error)?;
                let is_prompt = entry.file_type().is_file()
                    && entry.path().extension().and_then(|e| e.to_str()) == Some(PROMPT_EXTENSION);
                if is_prompt {
                    files.push(entry.into_path());
                }
            }
        }

        Ok(files)
    }
}

/// Read and parse one prompt file. `Ok(None)` when the file is not a prompt.
pub fn load_record(path: &Path) -> AppResult<Option<PromptRecord>> {
    let Some(text) = read_prompt_text(path)? else {
        return Ok(None);
    };

    match parse_frontmatter(&text) {
        Some(frontmatter) => Ok(Some(PromptRecord::from_frontmatter(&frontmatter, path))),
        None => {
            tracing::trace!("Skipping {:?}: no frontmatter", path);
            Ok(None)
        }
    }
}

/// Filter candidates against a specifier and apply the disambiguation rules.
pub fn select(records: Vec<PromptRecord>, spec: &PromptSpecifier) -> Resolution {
    let mut matches: Vec<PromptRecord> = records
        .into_iter()
        .filter(|r| r.name == spec.name)
        .filter(|r| spec.namespace.as_deref().map_or(true, |ns| r.namespace == ns))
        .filter(|r| match &spec.version {
            Some(VersionSelector::Exact(version)) => &r.version == version,
            Some(VersionSelector::Latest) | None => true,
        })
        .collect();

    sort_by_version_desc(&mut matches);

    if matches.is_empty() {
        return Resolution::NotFound;
    }
    if matches.len() == 1 || spec.version == Some(VersionSelector::Latest) {
        return Resolution::Unique(matches.swap_remove(0));
    }
    Resolution::Ambiguous(matches)
}

/// Highest version first; equal versions ordered by source path.
pub fn sort_by_version_desc(records: &mut [PromptRecord]) {
    records.sort_by(compare_version_desc);
}

/// Namespace, then name, then highest version first.
pub fn sort_records(records: &mut [PromptRecord]) {
    records.sort_by(|a, b| {
        a.namespace
            .cmp(&b.namespace)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| compare_version_desc(a, b))
    });
}

fn compare_version_desc(a: &PromptRecord, b: &PromptRecord) -> Ordering {
    let a_version = a.parsed_version().into_value();
    let b_version = b.parsed_version().into_value();
    b_version
        .cmp(&a_version)
        .then_with(|| a.source_path.cmp(&b.source_path))
}

fn shallow_walk(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
}

fn walk_error(err: walkdir::Error) -> AppError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    match err.into_io_error() {
        Some(source) => AppError::NotReadable { path, source },
        None => AppError::Other(format!("Filesystem loop detected at {:?}", path)),
    }
}

/// File text, or `None` for files that are not valid UTF-8.
fn read_prompt_text(path: &Path) -> AppResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            tracing::warn!("Skipping non-UTF-8 file {:?}", path);
            Ok(None)
        }
        Err(e) => Err(AppError::NotReadable {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Namespaces and names become path segments; keep them to one segment.
fn validate_segment(field: &str, value: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::Prompt(format!("Prompt {} cannot be empty", field)));
    }
    if value.starts_with('.') || value.contains(['/', '\\']) {
        return Err(AppError::Prompt(format!(
            "Invalid prompt {} '{}': must be a single, non-hidden path segment",
            field, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specifier::parse_specifier;
    use std::fs;
    use tempfile::TempDir;

    fn write_prompt(root: &Path, namespace: &str, name: &str, version: &str) -> PathBuf {
        let dir = root.join(namespace);
        fs::create_dir_all(&dir).unwrap();

        let content = format!(
            "---\nname: {name}\nnamespace: {namespace}\nversion: {version}\nauthor: test\n\
             description: {name} prompt\ncreated: 2024-01-01\ntags: [\"test\"]\n---\n\n\
             Body of {name} {version}\n"
        );
        let path = dir.join(versioned_file_name(name, version));
        fs::write(&path, content).unwrap();
        path
    }

    fn versions(records: &[PromptRecord]) -> Vec<&str> {
        records.iter().map(|r| r.version.as_str()).collect()
    }

    #[test]
    fn test_exact_specifier_is_unique() {
        let temp_dir = TempDir::new().unwrap();
        write_prompt(temp_dir.path(), "web", "foo", "1.0.0");

        let resolver = PromptResolver::new(temp_dir.path());
        match resolver.resolve_str("web/foo@1.0.0").unwrap() {
            Resolution::Unique(record) => {
                assert_eq!(record.namespace, "web");
                assert_eq!(record.name, "foo");
                assert_eq!(record.version, "1.0.0");
                assert_eq!(record.content, "Body of foo 1.0.0");
            }
            other => panic!("Expected Unique, got {:?}", other),
        }
    }

    #[test]
    fn test_name_only_with_two_versions_is_ambiguous() {
        let temp_dir = TempDir::new().unwrap();
        write_prompt(temp_dir.path(), "web", "foo", "1.0.0");
        write_prompt(temp_dir.path(), "web", "foo", "2.0.0");

        let resolver = PromptResolver::new(temp_dir.path());
        match resolver.resolve_str("foo").unwrap() {
            Resolution::Ambiguous(records) => assert_eq!(versions(&records), ["2.0.0", "1.0.0"]),
            other => panic!("Expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_latest_picks_highest_version() {
        let temp_dir = TempDir::new().unwrap();
        write_prompt(temp_dir.path(), "web", "foo", "1.0.0");
        write_prompt(temp_dir.path(), "web", "foo", "2.0.0");
        write_prompt(temp_dir.path(), "web", "foo", "1.10.0");

        let resolver = PromptResolver::new(temp_dir.path());
        match resolver.resolve_str("foo@latest").unwrap() {
            Resolution::Unique(record) => assert_eq!(record.version, "2.0.0"),
            other => panic!("Expected Unique, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_on_empty_or_missing_root() {
        let temp_dir = TempDir::new().unwrap();

        let empty = PromptResolver::new(temp_dir.path());
        assert_eq!(empty.resolve_str("bar").unwrap(), Resolution::NotFound);

        let missing = PromptResolver::new(temp_dir.path().join("does-not-exist"));
        assert!(missing.list_all().unwrap().is_empty());
        assert_eq!(missing.resolve_str("bar").unwrap(), Resolution::NotFound);
        assert_eq!(missing.resolve_str("bar@latest").unwrap(), Resolution::NotFound);
    }

    #[test]
    fn test_namespace_filter() {
        let temp_dir = TempDir::new().unwrap();
        write_prompt(temp_dir.path(), "web", "foo", "1.0.0");
        write_prompt(temp_dir.path(), "backend", "foo", "3.0.0");

        let resolver = PromptResolver::new(temp_dir.path());

        match resolver.resolve_str("web/foo").unwrap() {
            Resolution::Unique(record) => assert_eq!(record.namespace, "web"),
            other => panic!("Expected Unique, got {:?}", other),
        }
        assert_eq!(
            resolver.resolve_str("mobile/foo").unwrap(),
            Resolution::NotFound
        );
        match resolver.resolve_str("foo").unwrap() {
            Resolution::Ambiguous(records) => assert_eq!(versions(&records), ["3.0.0", "1.0.0"]),
            other => panic!("Expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_same_version_in_two_namespaces_orders_by_path() {
        let temp_dir = TempDir::new().unwrap();
        write_prompt(temp_dir.path(), "web", "foo", "1.0.0");
        write_prompt(temp_dir.path(), "backend", "foo", "1.0.0");

        let resolver = PromptResolver::new(temp_dir.path());
        match resolver.resolve_str("foo@1.0.0").unwrap() {
            Resolution::Ambiguous(records) => {
                let namespaces: Vec<_> = records.iter().map(|r| r.namespace.as_str()).collect();
                assert_eq!(namespaces, ["backend", "web"]);
            }
            other => panic!("Expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_version_mismatch_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        write_prompt(temp_dir.path(), "web", "foo", "1.0.0");

        let resolver = PromptResolver::new(temp_dir.path());
        assert_eq!(
            resolver.resolve_str("foo@9.9.9").unwrap(),
            Resolution::NotFound
        );
    }

    #[test]
    fn test_list_all_skips_non_prompts_and_hidden_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_prompt(root, "web", "foo", "1.0.0");
        fs::write(root.join("web/README.md"), "# Web prompts\n").unwrap();
        fs::write(root.join("web/notes.txt"), "---\nname: txt\n---\n").unwrap();
        fs::write(root.join("web/binary.md"), [0xffu8, 0xfe, 0x00]).unwrap();
        fs::write(root.join("top-level.md"), "---\nname: stray\n---\n").unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".git/HEAD.md"), "---\nname: hidden\n---\n").unwrap();

        let resolver = PromptResolver::new(root);
        let records = resolver.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "foo");
        assert_eq!(resolver.namespaces().unwrap(), ["web"]);
    }

    #[test]
    fn test_legacy_file_resolves() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("web");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("greeting.md"), "---\nauthor: old\n---\nHello").unwrap();

        let resolver = PromptResolver::new(temp_dir.path());
        match resolver.resolve_str("web/greeting").unwrap() {
            Resolution::Unique(record) => {
                assert_eq!(record.version, "1.0.0");
                assert_eq!(record.content, "Hello");
            }
            other => panic!("Expected Unique, got {:?}", other),
        }
    }

    #[test]
    fn test_locate_falls_back_to_legacy() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let versioned = write_prompt(root, "web", "foo", "1.0.0");
        fs::write(root.join("web/bar.md"), "---\n---\n").unwrap();

        let resolver = PromptResolver::new(root);
        assert_eq!(resolver.locate("web", "foo", "1.0.0"), Some(versioned));
        assert_eq!(
            resolver.locate("web", "bar", "1.0.0"),
            Some(root.join("web/bar.md"))
        );
        assert_eq!(resolver.locate("web", "baz", "1.0.0"), None);
    }

    #[test]
    fn test_save_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = PromptResolver::new(temp_dir.path().join("registry"));
        let record = PromptRecord {
            name: "summarize".to_string(),
            namespace: "docs".to_string(),
            version: "1.0.0".to_string(),
            author: "Ada".to_string(),
            description: "Summarize a document".to_string(),
            created: "2024-05-05".to_string(),
            tags: vec![],
            content: "Summarize this.".to_string(),
            source_path: PathBuf::new(),
        };

        let path = resolver.save(&record, false).unwrap();
        assert!(path.ends_with("docs/summarize-1.0.0.md"));
        assert!(resolver.save(&record, false).is_err());
        assert!(resolver.save(&record, true).is_ok());

        let saved = resolver
            .resolve(&parse_specifier("docs/summarize@1.0.0"))
            .unwrap()
            .into_unique(&parse_specifier("docs/summarize@1.0.0"))
            .unwrap();
        assert_eq!(saved.source_path, path);
        assert!(resolver.invalid_files().unwrap().is_empty());

        resolver.delete(&saved).unwrap();
        assert!(resolver.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_rejects_path_segments() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = PromptResolver::new(temp_dir.path());
        let fm = parse_frontmatter("---\n---\n").unwrap();
        let mut record = PromptRecord::from_frontmatter(&fm, Path::new("x/y-1.0.0.md"));

        record.namespace = "../escape".to_string();
        assert!(matches!(resolver.save(&record, false), Err(AppError::Prompt(_))));

        record.namespace = "web".to_string();
        record.name = String::new();
        assert!(matches!(resolver.save(&record, false), Err(AppError::Prompt(_))));
    }

    #[test]
    fn test_save_rejects_line_breaks_in_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = PromptResolver::new(temp_dir.path());

        let fm = parse_frontmatter("---\nname: foo\nnamespace: web\n---\nBody").unwrap();
        let mut record = PromptRecord::from_frontmatter(&fm, Path::new("web/foo.md"));
        record.description = "first\n---\nname: hijacked".to_string();

        let err = resolver.save(&record, false).unwrap_err();
        assert!(matches!(err, AppError::Prompt(_)));
        assert!(err.to_string().contains("description"));
        assert!(!temp_dir.path().join("web").exists());
    }

    #[test]
    fn test_saved_body_survives_reload() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = PromptResolver::new(temp_dir.path());
        let dir = temp_dir.path().join("web");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("foo-1.0.0.md"),
            "---\nname: foo\nnamespace: web\nversion: 1.0.0\n---\n    code\nnext\n",
        )
        .unwrap();

        let spec = parse_specifier("web/foo");
        let record = resolver.resolve(&spec).unwrap().into_unique(&spec).unwrap();
        assert_eq!(record.content, "    code\nnext");

        let bumped = PromptRecord {
            version: "1.0.1".to_string(),
            ..record
        };
        resolver.save(&bumped, false).unwrap();

        match resolver.resolve_str("web/foo@1.0.1").unwrap() {
            Resolution::Unique(reloaded) => assert_eq!(reloaded.content, "    code\nnext"),
            other => panic!("Expected Unique, got {:?}", other),
        }
    }

    #[cfg(unix)]
    fn set_mode(path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_namespace_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let locked = write_prompt(temp_dir.path(), "web", "foo", "1.0.0")
            .parent()
            .unwrap()
            .to_path_buf();
        set_mode(&locked, 0o000);

        // Permission bits do not apply to root
        if fs::read_dir(&locked).is_ok() {
            set_mode(&locked, 0o755);
            return;
        }

        let result = PromptResolver::new(temp_dir.path()).list_all();
        set_mode(&locked, 0o755);

        match result {
            Err(AppError::NotReadable { path, .. }) => assert_eq!(path, locked),
            other => panic!("Expected NotReadable, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("registry");
        write_prompt(&root, "web", "foo", "1.0.0");
        set_mode(&root, 0o000);

        if fs::read_dir(&root).is_ok() {
            set_mode(&root, 0o755);
            return;
        }

        let resolver = PromptResolver::new(&root);
        let listed = resolver.list_all();
        let resolved = resolver.resolve_str("foo");
        set_mode(&root, 0o755);

        assert!(matches!(listed, Err(AppError::NotReadable { .. })));
        assert!(matches!(resolved, Err(AppError::NotReadable { .. })));
        assert_eq!(listed.unwrap_err().exit_code(), 2);
    }

    #[test]
    fn test_invalid_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_prompt(root, "web", "ok", "1.0.0");
        fs::write(root.join("web/partial-1.0.0.md"), "---\nname: partial\n---\n").unwrap();
        fs::write(root.join("web/README.md"), "no frontmatter").unwrap();

        let invalid = PromptResolver::new(root).invalid_files().unwrap();
        assert_eq!(invalid.len(), 1);
        assert!(invalid[0].path.ends_with("partial-1.0.0.md"));
        assert_eq!(
            invalid[0].missing,
            ["namespace", "version", "author", "description", "created"]
        );
    }

    #[test]
    fn test_into_unique_errors() {
        let spec = parse_specifier("foo");
        let err = Resolution::NotFound.into_unique(&spec).unwrap_err();
        assert!(err.to_string().contains("No prompt matches 'foo'"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_sort_records() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_prompt(root, "web", "b", "1.0.0");
        write_prompt(root, "web", "a", "1.0.0");
        write_prompt(root, "web", "a", "1.2.0");
        write_prompt(root, "api", "z", "0.1.0");

        let mut records = PromptResolver::new(root).list_all().unwrap();
        sort_records(&mut records);
        let ids: Vec<String> = records.iter().map(|r| r.specifier().to_string()).collect();
        assert_eq!(
            ids,
            ["api/z@0.1.0", "web/a@1.2.0", "web/a@1.0.0", "web/b@1.0.0"]
        );
    }
}
