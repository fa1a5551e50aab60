//! Centralized error handling for WoaPrep
//!
//! This module provides structured error types so that both pipelines report
//! failures with context instead of a generic `Box<dyn Error>`.

use std::fmt;

/// Main error type for WoaPrep operations
#[derive(Debug)]
pub enum WoaPrepError {
    /// NetCDF file operation errors
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Variable not found in NetCDF file
    VariableNotFound { var: String },

    /// Dimension not found in variable
    DimensionNotFound { var: String, dim: String },

    /// The depth axis has no level exactly at the requested splice depth
    SpliceDepthNotFound { depth: f64 },

    /// Inputs whose shapes do not line up for a grid computation
    ShapeMismatch { message: String },

    /// Thread pool configuration error
    ThreadPoolError(String),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error
    Generic(String),
}

impl fmt::Display for WoaPrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WoaPrepError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            WoaPrepError::IoError(e) => write!(f, "I/O error: {}", e),
            WoaPrepError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in file", var)
            }
            WoaPrepError::DimensionNotFound { var, dim } => {
                write!(f, "Dimension '{}' not found in variable '{}'", dim, var)
            }
            WoaPrepError::SpliceDepthNotFound { depth } => {
                write!(f, "Depth axis has no level exactly at {} m", depth)
            }
            WoaPrepError::ShapeMismatch { message } => {
                write!(f, "Shape mismatch: {}", message)
            }
            WoaPrepError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            WoaPrepError::ArrayError(e) => write!(f, "Array error: {}", e),
            WoaPrepError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for WoaPrepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WoaPrepError::NetCDFError(e) => Some(e),
            WoaPrepError::IoError(e) => Some(e),
            WoaPrepError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for WoaPrepError {
    fn from(error: netcdf::Error) -> Self {
        WoaPrepError::NetCDFError(error)
    }
}

impl From<std::io::Error> for WoaPrepError {
    fn from(error: std::io::Error) -> Self {
        WoaPrepError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for WoaPrepError {
    fn from(error: ndarray::ShapeError) -> Self {
        WoaPrepError::ArrayError(error)
    }
}

impl From<String> for WoaPrepError {
    fn from(error: String) -> Self {
        WoaPrepError::Generic(error)
    }
}

impl From<&str> for WoaPrepError {
    fn from(error: &str) -> Self {
        WoaPrepError::Generic(error.to_string())
    }
}

/// Result type alias for WoaPrep operations
pub type Result<T> = std::result::Result<T, WoaPrepError>;
