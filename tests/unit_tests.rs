//! Unit tests for the WoaPrep modules
//!
//! These tests cover the geometric, mask, blending and thermodynamic
//! building blocks of both pipelines.

use ndarray::{array, Array3, Axis};
use woa_prep::climatology::{
    months, season_for_month, shallow_levels, splice_index, splice_profiles, stack_months,
    BlendedMonth,
};
use woa_prep::errors::WoaPrepError;
use woa_prep::mesh::{
    compute_masks, compute_spacing, compute_vertical, corner_product, neighbor_product,
    offset_axis, haversine_distance,
};
use woa_prep::parallel::ParallelConfig;
use woa_prep::teos10;

#[test]
fn test_error_types() {
    let var_err = WoaPrepError::VariableNotFound {
        var: "t_an".to_string(),
    };
    assert!(format!("{}", var_err).contains("Variable 't_an' not found"));

    let dim_err = WoaPrepError::DimensionNotFound {
        var: "t_an".to_string(),
        dim: "depth".to_string(),
    };
    assert!(format!("{}", dim_err).contains("Dimension 'depth' not found in variable 't_an'"));

    let splice_err = WoaPrepError::SpliceDepthNotFound { depth: 1500.0 };
    assert!(format!("{}", splice_err).contains("no level exactly at 1500"));

    let generic_err = WoaPrepError::Generic("Test error".to_string());
    assert_eq!(format!("{}", generic_err), "Test error");
}

#[test]
fn test_parallel_config() {
    let default_config = ParallelConfig::default();
    assert!(default_config.num_threads.is_none());

    let config_4 = ParallelConfig::with_threads(4);
    assert_eq!(config_4.num_threads, Some(4));

    let all_cores_config = ParallelConfig::all_cores();
    assert!(all_cores_config.num_threads.unwrap() > 0);

    assert!(default_config.current_threads() > 0);
}

#[test]
fn test_haversine_is_symmetric_and_zero_at_coincidence() {
    let d_ab = haversine_distance(-34.2, 18.6, 151.2, -33.9);
    let d_ba = haversine_distance(151.2, -33.9, -34.2, 18.6);
    assert!((d_ab - d_ba).abs() < 1e-6);

    assert_eq!(haversine_distance(12.5, -60.0, 12.5, -60.0), 0.0);
}

#[test]
fn test_haversine_equatorial_degree() {
    // One degree of longitude at the equator is about 111.3 km
    let d = haversine_distance(0.0, 0.0, 1.0, 0.0);
    assert!((d - 111_319.0).abs() / 111_319.0 < 0.01);
}

#[test]
fn test_offset_axis_midpoints_and_boundary_fallback() {
    let coords = array![0.5, 1.5, 2.5];
    let bounds = array![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]];

    let offset = offset_axis(&coords, &bounds);
    assert_eq!(offset, array![1.0, 2.0, 3.0]);

    // A single cell has no neighbor at all and takes its upper bound
    let single = offset_axis(&array![0.5], &array![[0.0, 1.0]]);
    assert_eq!(single, array![1.0]);
}

#[test]
fn test_cell_spacing_matches_haversine() {
    let lon = array![0.5, 1.5];
    let lat = array![0.0, 1.0];
    let lon_bnds = array![[0.0, 1.0], [1.0, 2.0]];
    let lat_bnds = array![[-0.5, 0.5], [0.5, 1.5]];

    let spacing = compute_spacing(&lon, &lat, &lon_bnds, &lat_bnds).unwrap();
    assert_eq!(spacing.e1.dim(), (2, 2));

    let expected_e1 = haversine_distance(0.0, 0.0, 1.0, 0.0);
    assert!((spacing.e1[[0, 0]] - expected_e1).abs() < 1e-9);

    let expected_e2 = haversine_distance(0.5, -0.5, 0.5, 0.5);
    assert!((spacing.e2[[0, 0]] - expected_e2).abs() < 1e-9);

    // e2 between latitude bounds is latitude independent on the sphere
    assert!((spacing.e2[[0, 0]] - spacing.e2[[0, 1]]).abs() < 1e-9);
}

#[test]
fn test_cell_spacing_rejects_mismatched_bounds() {
    let lon = array![0.5, 1.5];
    let lat = array![0.0];
    let lon_bnds = array![[0.0, 1.0]];
    let lat_bnds = array![[-0.5, 0.5]];

    let result = compute_spacing(&lon, &lat, &lon_bnds, &lat_bnds);
    assert!(matches!(result, Err(WoaPrepError::ShapeMismatch { .. })));
}

#[test]
fn test_vertical_thickness_sums_to_bound_span() {
    let depth = array![5.0, 17.5, 37.5];
    let depth_bnds = array![[0.0, 10.0], [10.0, 25.0], [25.0, 50.0]];

    let vertical = compute_vertical(&depth, &depth_bnds).unwrap();
    assert_eq!(vertical.e3t_1d, array![10.0, 15.0, 25.0]);
    assert_eq!(vertical.gdepw_1d, array![0.0, 10.0, 25.0]);
    assert_eq!(vertical.gdept_1d, depth);

    let span = depth_bnds[[2, 1]] - depth_bnds[[0, 0]];
    assert!((vertical.e3t_1d.sum() - span).abs() < 1e-12);

    let fields = vertical.broadcast(2, 3);
    assert_eq!(fields.e3_0.dim(), (3, 2, 3));
    assert_eq!(fields.gdepw_0[[1, 0, 2]], 10.0);
}

#[test]
fn test_masks_on_two_by_two_grid() {
    // One missing-temperature cell at (0, 0), three valid cells
    let temperature = array![[[f64::NAN, 1.0], [2.0, 3.0]]];
    let masks = compute_masks(&temperature);

    assert_eq!(masks.tmask, array![[[0, 1], [1, 1]]]);

    // (0,0) has a valid x+1 neighbor so the product is 0; the boundary
    // column keeps the t-mask value
    assert_eq!(masks.umask, array![[[0, 1], [1, 1]]]);
    assert_eq!(masks.vmask, array![[[0, 1], [1, 1]]]);

    // The interior corner needs all four surrounding cells to be sea
    assert_eq!(masks.fmask, array![[[0, 1], [1, 1]]]);
}

#[test]
fn test_umask_is_boolean_product_of_neighbors() {
    let temperature = array![[
        [1.0, f64::NAN, 2.0, 3.0],
        [4.0, 5.0, f64::NAN, 6.0],
        [7.0, 8.0, 9.0, 10.0],
    ]];
    let masks = compute_masks(&temperature);
    let (nz, nj, ni) = masks.tmask.dim();

    for k in 0..nz {
        for j in 0..nj {
            for i in 0..ni - 1 {
                assert_eq!(
                    masks.umask[[k, j, i]],
                    masks.tmask[[k, j, i]] * masks.tmask[[k, j, i + 1]]
                );
            }
            assert_eq!(masks.umask[[k, j, ni - 1]], masks.tmask[[k, j, ni - 1]]);
        }
    }
}

#[test]
fn test_neighbor_product_keeps_short_axes_unchanged() {
    let mask: Array3<i32> = array![[[1], [0]]];
    assert_eq!(neighbor_product(&mask, Axis(2)), mask);

    let corner = corner_product(&mask);
    assert_eq!(corner, mask);
}

#[test]
fn test_splice_index_requires_exact_match() {
    let depth = array![0.0, 500.0, 1000.0, 1500.0, 2000.0];
    assert_eq!(splice_index(&depth, 1500.0).unwrap(), 3);

    let coarse = array![0.0, 400.0, 1600.0];
    let result = splice_index(&coarse, 1500.0);
    assert!(matches!(
        result,
        Err(WoaPrepError::SpliceDepthNotFound { .. })
    ));
}

#[test]
fn test_splice_profiles_takes_near_then_far_levels() {
    let month_depth = array![0.0, 500.0, 1000.0, 1500.0];
    let season_depth = array![0.0, 500.0, 1000.0, 1500.0, 2000.0, 3000.0];

    let n_shallow = shallow_levels(&month_depth, 1500.0);
    assert_eq!(n_shallow, 4);
    let idx = splice_index(&season_depth, 1500.0).unwrap();

    let monthly = Array3::from_shape_fn((4, 1, 1), |(k, _, _)| k as f64);
    let seasonal = Array3::from_shape_fn((6, 1, 1), |(k, _, _)| 100.0 + k as f64);

    let blended = splice_profiles(&monthly, n_shallow, &seasonal, idx).unwrap();
    assert_eq!(blended.dim(), (6, 1, 1));

    // Levels above the splice come from the monthly profile
    for k in 0..4 {
        assert_eq!(blended[[k, 0, 0]], k as f64);
    }
    // Levels past the splice come from the seasonal profile with no
    // duplicated splice level
    assert_eq!(blended[[4, 0, 0]], 104.0);
    assert_eq!(blended[[5, 0, 0]], 105.0);
}

#[test]
fn test_season_mapping_follows_quarters() {
    assert_eq!(season_for_month(1).unwrap(), 13);
    assert_eq!(season_for_month(3).unwrap(), 13);
    assert_eq!(season_for_month(4).unwrap(), 14);
    assert_eq!(season_for_month(9).unwrap(), 15);
    assert_eq!(season_for_month(10).unwrap(), 16);
    assert_eq!(season_for_month(12).unwrap(), 16);

    assert!(season_for_month(0).is_err());
    assert!(season_for_month(13).is_err());
}

#[test]
fn test_months_are_ordered() {
    let all = months().unwrap();
    assert_eq!(all.len(), 12);
    assert_eq!(all[0].month, 1);
    assert_eq!(all[0].season, 13);
    assert_eq!(all[11].month, 12);
    assert_eq!(all[11].season, 16);
}

#[test]
fn test_stack_months_orders_time_axis() {
    let month = |m: u32, value: f64| BlendedMonth {
        month: m,
        time: f64::from(m),
        depth: array![0.0, 10.0],
        lat: array![0.0],
        lon: array![0.0],
        temperature: Array3::from_elem((2, 1, 1), value),
        salinity: Array3::from_elem((2, 1, 1), 35.0),
    };

    let stacked = stack_months(&[month(1, 1.5), month(2, 2.5)]).unwrap();
    assert_eq!(stacked.temperature.dim(), (2, 2, 1, 1));
    assert_eq!(stacked.time, array![1.0, 2.0]);
    assert_eq!(stacked.temperature[[0, 0, 0, 0]], 1.5);
    assert_eq!(stacked.temperature[[1, 0, 0, 0]], 2.5);

    assert!(stack_months(&[]).is_err());
}

#[test]
fn test_pressure_from_depth() {
    assert!(teos10::pressure_from_depth(0.0, 45.0).abs() < 1e-9);

    // About 1.008 dbar per meter at the equator
    let p = teos10::pressure_from_depth(1000.0, 0.0);
    assert!((p - 1008.0).abs() < 2.0);

    // Pressure grows slightly towards the poles
    assert!(teos10::pressure_from_depth(1000.0, 90.0) > p);
}

#[test]
fn test_absolute_salinity_scaling() {
    // Open-ocean conversion is the Reference Composition scaling
    let sa = teos10::absolute_salinity(35.0, 0.0, -30.0, 10.0);
    assert!((sa - 35.16504).abs() < 1e-9);

    // The Baltic adjustment raises low salinities above the plain scaling
    let sa_baltic = teos10::absolute_salinity(7.0, 0.0, 20.0, 57.0);
    let sa_open = teos10::absolute_salinity(7.0, 0.0, -30.0, 57.0);
    assert!(sa_baltic > sa_open);

    assert!(teos10::absolute_salinity(f64::NAN, 0.0, -30.0, 10.0).is_nan());
}

#[test]
fn test_conservative_temperature_anchors() {
    // At 0 dbar potential temperature equals in-situ temperature
    assert_eq!(teos10::pt0_from_t(35.16504, 10.0, 0.0), 10.0);

    // Water cools adiabatically when raised from depth
    let pt = teos10::pt0_from_t(35.0, 10.0, 4000.0);
    assert!(pt < 10.0);
    assert!(10.0 - pt < 1.0);

    // By construction CT(SSO, pt = 0) is 0
    assert!(teos10::ct_from_pt(35.16504, 0.0).abs() < 1e-4);

    // CT stays close to potential temperature at standard ocean salinity
    let ct = teos10::ct_from_pt(35.16504, 20.0);
    assert!((ct - 20.0).abs() < 0.5);

    assert!(teos10::conservative_temperature(35.0, f64::NAN, 100.0).is_nan());
}
