//! Level-based folder resolution
//!
//! A level selects a folder relative to the current folder's own path:
//!
//! - `0` keeps the current folder
//! - `-n` goes up `n` segments (`/a/b/c/`, `-1` → `/a/b/`)
//! - `+n` keeps the first `n` segments (`/a/b/c/`, `2` → `/a/b/`)
//!
//! Out-of-range levels clamp: going up past the root yields `/`, keeping more
//! segments than exist yields the whole current folder.

/// Resolve the folder selected by `level`, relative to `current_folder`
pub fn resolve_folder(current_folder: &str, level: i32) -> String {
    if level == 0 {
        return current_folder.to_string();
    }

    let segments: Vec<&str> = current_folder
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();
    let count = segments.len();

    let keep = if level < 0 {
        count.saturating_sub(level.unsigned_abs() as usize)
    } else {
        count.min(level as usize)
    };

    let mut folder = String::from("/");
    for segment in &segments[..keep] {
        folder.push_str(segment);
        folder.push('/');
    }

    tracing::trace!(current_folder, level, resolved = %folder, "Resolved navigation folder");
    folder
}
