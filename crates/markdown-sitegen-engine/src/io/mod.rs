use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

pub const MARKDOWN_EXTENSION: &str = "md";
pub const HTML_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("{path} is not inside the content directory {root}")]
    OutsideContentDir { path: PathBuf, root: PathBuf },
}

/// Read a markdown or template file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the content directory
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            content_root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == MARKDOWN_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Output location for a content file: the same relative path under
/// `public_root`, with an `.html` extension.
pub fn output_path(
    content_root: &Path,
    source: &Path,
    public_root: &Path,
) -> Result<PathBuf, IoError> {
    let outside = || IoError::OutsideContentDir {
        path: source.to_path_buf(),
        root: content_root.to_path_buf(),
    };
    let relative = source.strip_prefix(content_root).map_err(|_| outside())?;
    let relative = RelativePathBuf::from_path(relative).map_err(|_| outside())?;
    Ok(relative.with_extension(HTML_EXTENSION).to_path(public_root))
}

/// Copy a directory tree, returning the destination path of every copied file
pub fn copy_dir_recursive(from: &Path, to: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !from.is_dir() {
        return Err(IoError::NotFound(from.to_path_buf()));
    }

    let mut copied = Vec::new();
    copy_directory_recursive(from, to, &mut copied)?;
    copied.sort();
    Ok(copied)
}

fn copy_directory_recursive(
    from: &Path,
    to: &Path,
    copied: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    fs::create_dir_all(to).map_err(IoError::Io)?;

    for entry in fs::read_dir(from).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let source = entry.path();
        let dest = to.join(entry.file_name());

        if source.is_dir() {
            copy_directory_recursive(&source, &dest, copied)?;
        } else {
            fs::copy(&source, &dest).map_err(IoError::Io)?;
            copied.push(dest);
        }
    }

    Ok(())
}
