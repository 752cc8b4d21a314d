use std::collections::HashSet;
use std::path::{Path, PathBuf};

// macOS bundles put loose resources under Contents/Resources.
fn app_resources_dir(current_exe: &Path, kind: &str) -> Option<PathBuf> {
    let macos_dir = current_exe.parent()?;
    if macos_dir.file_name()?.to_string_lossy() != "MacOS" {
        return None;
    }
    let contents_dir = macos_dir.parent()?;
    if contents_dir.file_name()?.to_string_lossy() != "Contents" {
        return None;
    }

    Some(contents_dir.join("Resources").join(kind))
}

fn push_candidate(candidates: &mut Vec<PathBuf>, seen: &mut HashSet<PathBuf>, candidate: PathBuf) {
    if candidate.as_os_str().is_empty() {
        return;
    }

    let normalized = if candidate.exists() {
        candidate.canonicalize().unwrap_or(candidate)
    } else if candidate.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&candidate))
            .unwrap_or(candidate)
    } else {
        candidate
    };

    if seen.insert(normalized.clone()) {
        candidates.push(normalized);
    }
}

/// Directories that may hold a loose asset subtree (`i18n`, `images`),
/// most specific first: the app bundle, next to the executable and its
/// ancestors, then the working directory. Used instead of embedding so
/// packaged installs and `cargo run` both resolve the same layout.
pub fn asset_dir_candidates(kind: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    let mut seen = HashSet::new();

    if let Ok(current_exe) = std::env::current_exe() {
        if let Some(resources_dir) = app_resources_dir(&current_exe, kind) {
            push_candidate(&mut candidates, &mut seen, resources_dir);
        }

        if let Some(exe_dir) = current_exe.parent() {
            push_candidate(
                &mut candidates,
                &mut seen,
                exe_dir.join("assets").join(kind),
            );
            push_candidate(&mut candidates, &mut seen, exe_dir.join(kind));

            for ancestor in exe_dir.ancestors().take(6) {
                push_candidate(
                    &mut candidates,
                    &mut seen,
                    ancestor.join("assets").join(kind),
                );
                push_candidate(&mut candidates, &mut seen, ancestor.join(kind));
            }
        }
    }

    if let Ok(current_dir) = std::env::current_dir() {
        push_candidate(
            &mut candidates,
            &mut seen,
            current_dir.join("assets").join(kind),
        );
        push_candidate(&mut candidates, &mut seen, current_dir.join(kind));
    }

    push_candidate(
        &mut candidates,
        &mut seen,
        PathBuf::from("./assets").join(kind),
    );
    push_candidate(&mut candidates, &mut seen, PathBuf::from(".").join(kind));

    candidates
}

/// Resolves a relative asset path (e.g. `images/games/cover.png`) against
/// the candidate directories for its first component.
pub fn resolve_asset(relative: &str) -> Option<PathBuf> {
    let mut parts = relative.splitn(2, '/');
    let kind = parts.next()?;
    let rest = parts.next()?;

    for dir in asset_dir_candidates(kind) {
        let path = dir.join(rest);
        if path.is_file() {
            return Some(path);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_are_deduplicated() {
        let candidates = asset_dir_candidates("i18n");
        let unique: HashSet<_> = candidates.iter().collect();
        assert_eq!(unique.len(), candidates.len());
        assert!(!candidates.is_empty());
    }

    #[test]
    fn bundled_locale_dir_resolves() {
        // The repo ships assets/i18n; tests run from the crate root.
        assert!(resolve_asset("i18n/en_US.json").is_some());
        assert!(resolve_asset("i18n/missing.json").is_none());
    }
}
