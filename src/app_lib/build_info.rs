//! Build metadata captured by `build.rs`.

/// Commit hash the bundle was built from, or `"unknown"` outside a git
/// checkout.
pub fn git_commit_hash() -> &'static str {
    match option_env!("MEDICHECK_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// Abbreviated hash for footer display.
pub fn short_commit_hash() -> &'static str {
    let full = git_commit_hash();
    full.get(..7).unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::{git_commit_hash, short_commit_hash};

    #[test]
    fn short_hash_prefixes_the_full_hash() {
        let full = git_commit_hash();
        let short = short_commit_hash();
        assert!(full.starts_with(short));
        assert!(short.len() <= 7);
    }
}
