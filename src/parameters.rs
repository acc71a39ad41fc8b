use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Convert triangulated OBJ meshes into the sectioned `.mesh` text format.
#[derive(Parser, Default, Debug)]
#[command(name = "mesh_convert", version)]
pub struct Args {
    /// Input OBJ files.
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Output destinations. Either one per input, or a single path.
    /// A single path is a directory when more than one input is given, when it
    /// ends with a path separator (`out/`), or when it already is a directory.
    #[arg(short, long = "output", value_name = "OUTPUT", num_args = 1..)]
    pub outputs: Vec<PathBuf>,

    /// Reject faces which do not reference exactly three vertices.
    #[arg(long)]
    pub triangles_only: bool,

    /// Log verbosity, `RUST_LOG` filters are applied on top.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn options(&self) -> Options {
        Options {
            triangles_only: self.triangles_only,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Switches which change how records are read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Faces with a reference count other than 3 are an error instead of being
    /// flattened as is.
    pub triangles_only: bool,
}
