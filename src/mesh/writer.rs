//! Mesh-mask file assembly
//!
//! Collects every derived field into one dataset on generic `x`/`y`/`z`
//! indices with a singleton unbounded `t` axis prepended to each variable,
//! and serializes it. The original coordinate variables are not carried
//! over and no variable gets a `_FillValue` attribute.

use super::MeshMask;
use crate::errors::Result;
use crate::netcdf_io::DatasetWriter;
use ndarray::Axis;
use std::path::Path;

const DIMS_1D: &[&str] = &["t", "z"];
const DIMS_2D: &[&str] = &["t", "y", "x"];
const DIMS_3D: &[&str] = &["t", "z", "y", "x"];

/// Writes the mesh-mask dataset to `output_path`.
pub fn write_mesh_mask(mesh: &MeshMask, output_path: &Path) -> Result<()> {
    let (nz, ny, nx) = mesh.masks.tmask.dim();

    let mut writer = DatasetWriter::create(output_path)?;
    writer.add_unlimited_dimension("t")?;
    writer.add_dimension("z", nz)?;
    writer.add_dimension("y", ny)?;
    writer.add_dimension("x", nx)?;

    // Staggered point positions
    let positions = [
        ("glamt", "gphit", &mesh.positions.t),
        ("glamu", "gphiu", &mesh.positions.u),
        ("glamv", "gphiv", &mesh.positions.v),
        ("glamf", "gphif", &mesh.positions.f),
    ];
    for (glam_name, gphi_name, pos) in positions {
        writer.put_f64(
            glam_name,
            DIMS_2D,
            pos.glam.view().insert_axis(Axis(0)).into_dyn(),
        )?;
        writer.put_f64(
            gphi_name,
            DIMS_2D,
            pos.gphi.view().insert_axis(Axis(0)).into_dyn(),
        )?;
    }

    // Horizontal spacings, shared across the staggered grids by convention
    for grd in ["t", "u", "v", "f"] {
        writer.put_f64(
            &format!("e1{}", grd),
            DIMS_2D,
            mesh.spacing.e1.view().insert_axis(Axis(0)).into_dyn(),
        )?;
        writer.put_f64(
            &format!("e2{}", grd),
            DIMS_2D,
            mesh.spacing.e2.view().insert_axis(Axis(0)).into_dyn(),
        )?;
    }

    // Vertical geometry, 3-D and the 1-D reference
    for grd in ["t", "u", "v", "f"] {
        writer.put_f64(
            &format!("e3{}_0", grd),
            DIMS_3D,
            mesh.fields.e3_0.view().insert_axis(Axis(0)).into_dyn(),
        )?;
    }
    writer.put_f64(
        "gdept_0",
        DIMS_3D,
        mesh.fields.gdept_0.view().insert_axis(Axis(0)).into_dyn(),
    )?;
    writer.put_f64(
        "gdepw_0",
        DIMS_3D,
        mesh.fields.gdepw_0.view().insert_axis(Axis(0)).into_dyn(),
    )?;
    writer.put_f64(
        "e3t_1d",
        DIMS_1D,
        mesh.vertical.e3t_1d.view().insert_axis(Axis(0)).into_dyn(),
    )?;
    writer.put_f64(
        "gdept_1d",
        DIMS_1D,
        mesh.vertical.gdept_1d.view().insert_axis(Axis(0)).into_dyn(),
    )?;
    writer.put_f64(
        "gdepw_1d",
        DIMS_1D,
        mesh.vertical.gdepw_1d.view().insert_axis(Axis(0)).into_dyn(),
    )?;

    // Land/sea masks
    let masks = [
        ("tmask", &mesh.masks.tmask),
        ("umask", &mesh.masks.umask),
        ("vmask", &mesh.masks.vmask),
        ("fmask", &mesh.masks.fmask),
    ];
    for (name, mask) in masks {
        writer.put_i32(name, DIMS_3D, mask.view().insert_axis(Axis(0)).into_dyn())?;
    }

    writer.add_history("WoaPrep mesh-mask")?;

    Ok(())
}
