//! Batch conversion of a directory tree

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::path::{is_csv_path, output_path_for};

/// A discovered input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Path used to open the file
    pub input: PathBuf,
    /// Path below the input root; mirrored under the output root
    pub relative: PathBuf,
}

#[derive(Debug)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output paths written, in conversion order
    pub converted: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Converts every CSV file under an input root into a JSON file at the
/// mirrored path under an output root.
#[derive(Debug, Clone)]
pub struct Converter {
    input_root: PathBuf,
    output_root: PathBuf,
    options: Options,
}

impl Converter {
    pub fn new(
        input_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        options: Options,
    ) -> Result<Self> {
        let input_root = input_root.into();
        let output_root = output_root.into();
        if input_root.as_os_str().is_empty() {
            return Err(Error::Config(
                "the input directory can't be empty".to_string(),
            ));
        }
        if output_root.as_os_str().is_empty() {
            return Err(Error::Config(
                "the output directory can't be empty".to_string(),
            ));
        }
        options.validate()?;
        Ok(Self {
            input_root,
            output_root,
            options,
        })
    }

    /// Where the document for `source` is written.
    pub fn output_path(&self, source: &Source) -> PathBuf {
        self.output_root.join(output_path_for(&source.relative))
    }

    /// Discover and convert all inputs. Only a discovery failure is returned
    /// as an error; failures of single files are collected in the report.
    pub fn run(&self) -> Result<BatchReport> {
        debug!("{:?}", self.options);
        let sources = discover(&self.input_root)?;
        let mut report = BatchReport::default();
        for source in sources {
            let output = self.output_path(&source);
            info!("Convert {:?} to {:?}", source.input, output);
            match convert_file(&source.input, &output, &self.options) {
                Ok(()) => report.converted.push(output),
                Err(error) => {
                    debug!("{:?} failed: {}", source.input, error);
                    report.failures.push(FileFailure {
                        input: source.input,
                        error,
                    });
                }
            }
        }
        Ok(report)
    }
}

/// List the CSV files under `root`, recursing into directories and visiting
/// entries in file-name order. A `root` that is a file yields just itself.
pub fn discover(root: &Path) -> Result<Vec<Source>> {
    let meta = fs::metadata(root).map_err(|source| Error::Discovery {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        if !is_csv_path(root) {
            return Ok(Vec::new());
        }
        let relative = root.file_name().map(PathBuf::from).unwrap_or_default();
        return Ok(vec![Source {
            input: root.to_path_buf(),
            relative,
        }]);
    }
    let mut sources = Vec::new();
    walk(root, root, &mut sources)?;
    Ok(sources)
}

fn walk(root: &Path, dir: &Path, sources: &mut Vec<Source>) -> Result<()> {
    let discovery = |source: io::Error| Error::Discovery {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(dir)
        .map_err(discovery)?
        .collect::<io::Result<Vec<_>>>()
        .map_err(discovery)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| Error::Discovery {
            path: path.clone(),
            source,
        })?;
        if file_type.is_dir() {
            walk(root, &path, sources)?;
        } else if is_csv_path(&path) {
            let relative = path
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| path.clone());
            sources.push(Source {
                input: path,
                relative,
            });
        }
    }
    Ok(())
}

/// Convert one file, creating the output's parent directories as needed.
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<()> {
    let json = crate::convert_reader(File::open(input)?, options)?;
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        debug!("mkdir -p {:?}", dir);
        fs::create_dir_all(dir)?;
    }
    let mut file = File::create(output)?;
    file.write_all(&json)?;
    Ok(())
}
