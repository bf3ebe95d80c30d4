const SEPARATORS: [char; 2] = ['/', '\\'];

/// Final segment of `path`, accepting both `/` and `\` as separators.
pub fn derive_key(path: &str) -> &str {
    path.rsplit(SEPARATORS).next().unwrap_or(path)
}
