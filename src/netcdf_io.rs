//! NetCDF I/O operations shared by both pipelines
//!
//! This module provides readers that pull WOA coordinate axes, cell-bound
//! variables and gridded fields into `ndarray` arrays (decoding the
//! `_FillValue` sentinel to NaN), and a writer for the derived products
//! that follows the output convention of both pipelines: no `_FillValue`
//! attribute on any variable and a `history` global attribute stamping the
//! tool and creation time.

use crate::errors::{Result, WoaPrepError};
use chrono::Utc;
use ndarray::{Array1, Array2, Array3, ArrayViewD};
use netcdf::{AttributeValue, File, FileMut, Variable};
use std::{fs, path::Path};

/// Magnitudes at or above this are treated as missing even when the
/// variable carries no `_FillValue` attribute (WOA uses 9.96921e36).
const MISSING_THRESHOLD: f64 = 1.0e30;

/// Reads a 1-D coordinate variable as f64.
pub fn read_coordinate(file: &File, name: &str) -> Result<Array1<f64>> {
    let var = lookup(file, name)?;
    let values = var.get_values::<f64, _>(..)?;
    Ok(Array1::from(values))
}

/// Reads a per-cell bounds variable of shape (n, 2).
pub fn read_bounds(file: &File, name: &str) -> Result<Array2<f64>> {
    let var = lookup(file, name)?;
    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    if shape.len() != 2 || shape[1] != 2 {
        return Err(WoaPrepError::ShapeMismatch {
            message: format!(
                "bounds variable '{}' has shape {:?}, expected (n, 2)",
                name, shape
            ),
        });
    }
    let values = var.get_values::<f64, _>(..)?;
    Ok(Array2::from_shape_vec((shape[0], shape[1]), values)?)
}

/// Reads a gridded field as (depth, lat, lon) with missing values as NaN.
///
/// WOA climatology variables carry a leading singleton time axis; it is
/// squeezed off here.
pub fn read_field_3d(file: &File, name: &str) -> Result<Array3<f64>> {
    let var = lookup(file, name)?;
    let mut shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    if shape.len() == 4 && shape[0] == 1 {
        shape.remove(0);
    }
    if shape.len() != 3 {
        return Err(WoaPrepError::ShapeMismatch {
            message: format!(
                "variable '{}' has shape {:?}, expected (depth, lat, lon) with an optional singleton time axis",
                name, shape
            ),
        });
    }

    let mut values = var.get_values::<f64, _>(..)?;
    decode_missing(&mut values, fill_value(&var));
    Ok(Array3::from_shape_vec(
        (shape[0], shape[1], shape[2]),
        values,
    )?)
}

/// Reads the first value of the file's time coordinate.
pub fn read_time_value(file: &File) -> Result<f64> {
    let values = read_coordinate(file, "time")?;
    values
        .first()
        .copied()
        .ok_or_else(|| WoaPrepError::Generic("time coordinate is empty".to_string()))
}

fn lookup<'f>(file: &'f File, name: &str) -> Result<Variable<'f>> {
    file.variable(name)
        .ok_or_else(|| WoaPrepError::VariableNotFound {
            var: name.to_string(),
        })
}

/// Extracts `_FillValue` from a variable, if any.
fn fill_value(var: &Variable) -> Option<f64> {
    var.attribute("_FillValue")
        .and_then(|attr| match attr.value().ok()? {
            AttributeValue::Float(v) => Some(f64::from(v)),
            AttributeValue::Double(v) => Some(v),
            AttributeValue::Short(v) => Some(f64::from(v)),
            _ => None,
        })
}

fn decode_missing(values: &mut [f64], fill: Option<f64>) {
    for v in values.iter_mut() {
        let is_fill = fill.map_or(false, |fv| *v == fv);
        if is_fill || v.abs() >= MISSING_THRESHOLD {
            *v = f64::NAN;
        }
    }
}

/// Writer for the derived NetCDF products.
///
/// Variables are written without a `_FillValue` attribute; the file gets a
/// `history` global attribute recording the tool and creation time.
pub struct DatasetWriter {
    file: FileMut,
}

impl DatasetWriter {
    /// Creates the output file, replacing any stale one.
    pub fn create(output_path: &Path) -> Result<Self> {
        if output_path.exists() {
            fs::remove_file(output_path)?;
        }
        Ok(Self {
            file: netcdf::create(output_path)?,
        })
    }

    pub fn add_dimension(&mut self, name: &str, len: usize) -> Result<()> {
        self.file.add_dimension(name, len)?;
        Ok(())
    }

    pub fn add_unlimited_dimension(&mut self, name: &str) -> Result<()> {
        self.file.add_unlimited_dimension(name)?;
        Ok(())
    }

    /// Defines an f64 variable over `dims` and writes the whole array.
    pub fn put_f64(&mut self, name: &str, dims: &[&str], data: ArrayViewD<'_, f64>) -> Result<()> {
        let mut var = self.file.add_variable::<f64>(name, dims)?;
        let s = data.shape().to_vec();
        match s.len() {
            1 => var.put(data, 0..s[0])?,
            2 => var.put(data, (0..s[0], 0..s[1]))?,
            3 => var.put(data, (0..s[0], 0..s[1], 0..s[2]))?,
            4 => var.put(data, (0..s[0], 0..s[1], 0..s[2], 0..s[3]))?,
            n => {
                return Err(WoaPrepError::ShapeMismatch {
                    message: format!("variable '{}' has unsupported rank {}", name, n),
                })
            }
        }
        Ok(())
    }

    /// Defines an i32 variable over `dims` and writes the whole array.
    pub fn put_i32(&mut self, name: &str, dims: &[&str], data: ArrayViewD<'_, i32>) -> Result<()> {
        let mut var = self.file.add_variable::<i32>(name, dims)?;
        let s = data.shape().to_vec();
        match s.len() {
            1 => var.put(data, 0..s[0])?,
            2 => var.put(data, (0..s[0], 0..s[1]))?,
            3 => var.put(data, (0..s[0], 0..s[1], 0..s[2]))?,
            4 => var.put(data, (0..s[0], 0..s[1], 0..s[2], 0..s[3]))?,
            n => {
                return Err(WoaPrepError::ShapeMismatch {
                    message: format!("variable '{}' has unsupported rank {}", name, n),
                })
            }
        }
        Ok(())
    }

    /// Defines a 1-D f64 coordinate variable and writes its values.
    pub fn put_coordinate(&mut self, name: &str, dim: &str, values: &[f64]) -> Result<()> {
        let mut var = self.file.add_variable::<f64>(name, &[dim])?;
        var.put_values(values, 0..values.len())?;
        Ok(())
    }

    /// Adds a `history` global attribute stamped with the creation time.
    pub fn add_history(&mut self, tool: &str) -> Result<()> {
        self.file.add_attribute(
            "history",
            format!("Created by {} on {}", tool, Utc::now().to_rfc3339()),
        )?;
        Ok(())
    }
}
