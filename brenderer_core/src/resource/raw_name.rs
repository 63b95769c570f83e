/// Identifier normalization: source path → resource identifier
///
/// `"models/crate.obj"` and `"textures\\crate.png"` both normalize to `"crate"`.

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Path stripped of its directories and its last extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawName {
    pub name: String,
    pub extension: Option<String>,
}

/// Normalize a source path into a resource identifier
///
/// Drops everything up to and including the last `/` or `\`, then splits on
/// the last `.` only: `"dir/name.tar.gz"` gives `"name.tar"` and `"gz"`.
pub fn raw_name(path: &str) -> RawName {
    let file_name = match path.rfind(SEPARATORS) {
        Some(index) => &path[index + 1..],
        None => path,
    };

    match file_name.rfind('.') {
        Some(index) => RawName {
            name: file_name[..index].to_string(),
            extension: Some(file_name[index + 1..].to_string()),
        },
        None => RawName {
            name: file_name.to_string(),
            extension: None,
        },
    }
}

/// Drop the extension of the last path component, keeping directories
///
/// `"shaders/basic.vert"` gives `"shaders/basic"`; `"v1.2/basic"` is unchanged.
pub fn strip_extension(path: &str) -> &str {
    let file_start = path.rfind(SEPARATORS).map_or(0, |index| index + 1);
    match path[file_start..].rfind('.') {
        Some(index) => &path[..file_start + index],
        None => path,
    }
}

#[cfg(test)]
#[path = "raw_name_tests.rs"]
mod tests;
