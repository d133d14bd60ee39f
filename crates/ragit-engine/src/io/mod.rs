use crate::parsing::{DocTree, ParseError, ParseOptions, TreeBuilder};
use relative_path::RelativePath;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDocumentsDir(String),
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Read a markdown file relative to the documents root and return its content
pub fn read_file(relative_path: &RelativePath, documents_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(documents_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Read a file as lines with trailing newlines stripped
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    open(path)?
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(IoError::Io)
}

/// Parse a markdown file, feeding it to the builder one line at a time
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<DocTree, IoError> {
    let mut builder = TreeBuilder::with_options(*options);
    for line in open(path)?.lines() {
        builder
            .feed(&line.map_err(IoError::Io)?)
            .map_err(|source| IoError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
    }
    log::debug!("parsed {}", path.display());
    Ok(builder.finish())
}

/// Parse a markdown file relative to the documents root
pub fn parse_document(
    relative_path: &RelativePath,
    documents_root: &Path,
    options: &ParseOptions,
) -> Result<DocTree, IoError> {
    parse_file(&relative_path.to_path(documents_root), options)
}

/// Scan for markdown files in the documents directory
pub fn scan_markdown_files(documents_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !documents_root.exists() {
        return Err(IoError::InvalidDocumentsDir(
            "documents directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(documents_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn open(path: &Path) -> Result<BufReader<File>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Ok(BufReader::new(File::open(path)?))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_documents_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocumentsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
