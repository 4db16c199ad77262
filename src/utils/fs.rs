use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Json,
    Toml,
}

pub fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

pub fn sheet_format(path: &Path) -> Option<SheetFormat> {
    let extension = path.extension()?.to_string_lossy().to_ascii_lowercase();
    match extension.as_str() {
        "json" => Some(SheetFormat::Json),
        "toml" => Some(SheetFormat::Toml),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_sheet_format_by_extension() {
        assert_eq!(sheet_format(Path::new("a/b.json")), Some(SheetFormat::Json));
        assert_eq!(sheet_format(Path::new("b.TOML")), Some(SheetFormat::Toml));
        assert_eq!(sheet_format(Path::new("notes.md")), None);
        assert_eq!(sheet_format(Path::new("README")), None);
    }

    #[test]
    fn relative_path_uses_forward_slashes() {
        let root = Path::new("/tmp/sheets");
        let nested = root.join("team").join("alice.json");
        assert_eq!(relative_path(root, &nested), "team/alice.json");
        assert_eq!(relative_path(root, Path::new("/elsewhere.json")), "/elsewhere.json");
    }
}
