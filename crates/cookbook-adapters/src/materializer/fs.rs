//! Filesystem materializer: recursive template copy with substitution.
//!
//! Walk rules, in order, per file:
//! - name ends in `.template` → suffix stripped, content rendered
//! - name contains `{{`       → content rendered, name kept as-is
//! - anything else            → byte-for-byte copy
//!
//! Existing destination files are overwritten without prompting. The walk
//! aborts on the first unreadable entry with an error naming that path;
//! files written before the failure are left in place.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};
use walkdir::WalkDir;

use cookbook_core::{
    application::{
        ApplicationError,
        ports::{MaterializeStats, Materializer},
    },
    domain::PlaceholderContext,
    error::{CookbookError, CookbookResult},
};

/// Suffix marking a file for rename-and-render treatment.
const TEMPLATE_SUFFIX: &str = ".template";

/// Production materializer using `std::fs` + `walkdir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMaterializer;

impl FsMaterializer {
    pub fn new() -> Self {
        Self
    }
}

impl Materializer for FsMaterializer {
    #[instrument(skip_all, fields(source = %source.display(), dest = %dest.display()))]
    fn materialize(
        &self,
        source: &Path,
        dest: &Path,
        context: &PlaceholderContext,
    ) -> CookbookResult<MaterializeStats> {
        if !source.is_dir() {
            return Err(ApplicationError::Materialization {
                path: source.to_path_buf(),
                reason: "template source is not a directory".into(),
            }
            .into());
        }

        let mut stats = MaterializeStats::default();

        if !dest.exists() {
            fs::create_dir_all(dest).map_err(|e| fs_error(dest, "create directory", e))?;
            stats.dirs_created += 1;
        }

        for entry in WalkDir::new(source).min_depth(1) {
            let entry = entry.map_err(|e| walk_error(source, e))?;
            let rel = entry
                .path()
                .strip_prefix(source)
                .expect("walk entries stay under the source root");
            let target = dest.join(rel);

            if entry.file_type().is_dir() {
                if !target.exists() {
                    fs::create_dir_all(&target)
                        .map_err(|e| fs_error(&target, "create directory", e))?;
                    stats.dirs_created += 1;
                }
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if let Some(stripped) = file_name.strip_suffix(TEMPLATE_SUFFIX) {
                let target = target.with_file_name(stripped);
                render_file(entry.path(), &target, context)?;
                stats.files_rendered += 1;
            } else if file_name.contains("{{") {
                render_file(entry.path(), &target, context)?;
                stats.files_rendered += 1;
            } else {
                fs::copy(entry.path(), &target).map_err(|e| fs_error(entry.path(), "copy", e))?;
                stats.files_copied += 1;
            }
        }

        debug!(
            copied = stats.files_copied,
            rendered = stats.files_rendered,
            "Materialization complete"
        );
        Ok(stats)
    }
}

/// Read as text, substitute, write. Overwrites `dest` if it exists.
fn render_file(src: &Path, dest: &Path, context: &PlaceholderContext) -> CookbookResult<()> {
    let content = fs::read_to_string(src).map_err(|e| fs_error(src, "read", e))?;
    fs::write(dest, context.render(&content)).map_err(|e| fs_error(dest, "write", e))?;
    Ok(())
}

fn fs_error(path: &Path, operation: &str, e: std::io::Error) -> CookbookError {
    ApplicationError::Materialization {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

fn walk_error(source: &Path, e: walkdir::Error) -> CookbookError {
    let path = e
        .path()
        .unwrap_or(source)
        .to_path_buf();
    ApplicationError::Materialization {
        path,
        reason: e.to_string(),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
