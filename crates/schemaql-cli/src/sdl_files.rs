use anyhow::Context;
use schemaql::ast;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Outcome of scanning the paths given on the command line.
#[derive(Debug, Default)]
pub(crate) struct FoundSdlFiles {
    pub errors: Vec<anyhow::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Normalizes `--sdl-file-exts` values so that `graphql` and `.graphql`
/// mean the same thing.
pub(crate) fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .collect()
}

/// Finds all SDL files recursively located at or under each path.
///
/// When a single file path is given and nothing matched the extension
/// filter, that file is used anyway.
pub(crate) fn find_sdl_files(paths: &[PathBuf], file_exts: &HashSet<String>) -> FoundSdlFiles {
    log::debug!("Scanning {} input paths...", paths.len());

    let mut found = FoundSdlFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(err.into());
                    continue
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let has_sdl_ext = entry_path.extension()
                .map(|ext| ext.to_string_lossy())
                .is_some_and(|ext| file_exts.contains(ext.as_ref()));
            if has_sdl_ext {
                log::trace!("Found SDL file at {entry_path:#?}.");
                found.file_paths.push(entry_path.to_path_buf());
            } else {
                found.num_skipped += 1;
            }
        }
    }

    if found.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_path) = paths.first()
        && first_path.is_file() {
        log::warn!(
            "Proceeding with {first_path:#?} even though it doesn't match any \
            of the --sdl-file-exts ({}).",
            file_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.file_paths.push(first_path.to_owned());
    }

    log::debug!("Found {} SDL files.", found.file_paths.len());
    found
}

pub(crate) fn parse_sdl_file(path: &Path) -> anyhow::Result<ast::Document> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    schemaql::parser::parse(source.as_str()).map_err(|err| {
        anyhow::anyhow!(err.format_detailed(path.display().to_string().as_str()))
    })
}

/// Parses every file and concatenates their definitions into one document,
/// in the order the files were given.
///
/// Every file is parsed even after one fails so that all syntax errors are
/// reported together.
pub(crate) fn parse_sdl_files(paths: &[PathBuf]) -> Result<ast::Document, Vec<anyhow::Error>> {
    let mut definitions = vec![];
    let mut errors = vec![];
    for path in paths {
        match parse_sdl_file(path.as_path()) {
            Ok(document) => {
                log::trace!(
                    "Parsed {} definition(s) from {path:#?}.",
                    document.definitions.len(),
                );
                definitions.extend(document.definitions);
            },
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(ast::Document { definitions })
    } else {
        Err(errors)
    }
}
