//! Mesh-mask pipeline
//!
//! Derives a NEMO-style mesh description from one WOA temperature
//! climatology: staggered grid positions, horizontal cell spacings,
//! vertical layer geometry and land/sea masks, written to a single
//! mesh-mask file.
//!
//! # Organization
//!
//! - [`geometry`]: staggered T/U/V/F point positions
//! - [`spacing`]: Haversine distance and e1/e2 cell widths
//! - [`vertical`]: layer thicknesses and depth levels
//! - [`mask`]: land/sea masks with the neighbor-shift boundary policy
//! - [`writer`]: output-file assembly

pub mod geometry;
pub mod mask;
pub mod spacing;
pub mod vertical;
pub mod writer;

pub use geometry::{compute_positions, offset_axis, GridPositions, StaggeredPositions};
pub use mask::{compute_masks, corner_product, neighbor_product, MaskSet};
pub use spacing::{compute_spacing, haversine_distance, CellSpacing, EARTH_RADIUS_M};
pub use vertical::{compute_vertical, VerticalFields, VerticalGrid};
pub use writer::write_mesh_mask;

use crate::config::MeshMaskConfig;
use crate::errors::Result;
use crate::netcdf_io;

/// Every derived field of the mesh description.
#[derive(Debug, Clone)]
pub struct MeshMask {
    pub positions: GridPositions,
    pub spacing: CellSpacing,
    pub vertical: VerticalGrid,
    pub fields: VerticalFields,
    pub masks: MaskSet,
}

impl MeshMask {
    /// Derives the full mesh description from an open WOA temperature
    /// climatology file.
    pub fn from_climatology(file: &netcdf::File) -> Result<Self> {
        let lon = netcdf_io::read_coordinate(file, "lon")?;
        let lat = netcdf_io::read_coordinate(file, "lat")?;
        let depth = netcdf_io::read_coordinate(file, "depth")?;
        let lon_bnds = netcdf_io::read_bounds(file, "lon_bnds")?;
        let lat_bnds = netcdf_io::read_bounds(file, "lat_bnds")?;
        let depth_bnds = netcdf_io::read_bounds(file, "depth_bnds")?;
        let t_an = netcdf_io::read_field_3d(file, "t_an")?;

        let positions = compute_positions(&lon, &lat, &lon_bnds, &lat_bnds);
        let cell_spacing = compute_spacing(&lon, &lat, &lon_bnds, &lat_bnds)?;
        let vertical_grid = compute_vertical(&depth, &depth_bnds)?;
        let fields = vertical_grid.broadcast(lat.len(), lon.len());
        let masks = compute_masks(&t_an);

        Ok(Self {
            positions,
            spacing: cell_spacing,
            vertical: vertical_grid,
            fields,
            masks,
        })
    }
}

/// Runs the mesh-mask pipeline end to end.
pub fn build_mesh_mask(config: &MeshMaskConfig) -> Result<()> {
    println!(
        "Reading climatology: {}",
        config.temperature_file.display()
    );
    let file = netcdf::open(&config.temperature_file)?;

    let mesh = MeshMask::from_climatology(&file)?;
    write_mesh_mask(&mesh, &config.output_file)?;

    println!("✅ Wrote mesh mask to {}", config.output_file.display());
    Ok(())
}
