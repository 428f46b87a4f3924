use crate::interface::{MeanShiftInterface, Parameters, Reduction};
use crate::meanshift_base::MeanShift;
use crate::test_utils::{close_l1, read_data};
use ndarray::arr2;

#[test]
fn test_interface_fit() {
    let (parameters, grid) = read_data("data/dataset1.csv");
    let mean_shift: MeanShift<f64> = MeanShiftInterface::init(parameters.with_rounds(10)).unwrap();

    let queries = arr2(&[[2.0, 2.0]]);
    let (shifted, trajectories) =
        MeanShiftInterface::fit(&mean_shift, queries.view(), grid.view()).expect("No MeanShiftResult was returned!");

    assert_eq!(1, trajectories.len());
    assert_eq!(10, trajectories[0].len());
    close_l1(1.039957029200667, shifted[[0, 0]], 1e-7);
    close_l1(2.4229534940146547, shifted[[0, 1]], 1e-7);
}

#[test]
fn test_interface_for_parallel() {
    let (parameters, grid) = read_data("data/dataset1.csv");
    let parameters = parameters
        .with_rounds(10)
        .with_threads(2)
        .with_reduction("parallel".parse().unwrap());
    assert_eq!(Reduction::Parallel, parameters.reduction);

    let mean_shift: MeanShift<f64> = MeanShiftInterface::init(parameters).unwrap();
    let (shifted, _) = mean_shift.fit(arr2(&[[2.0, 2.0]]).view(), grid.view()).unwrap();

    close_l1(1.039957029200667, shifted[[0, 0]], 1e-7);
    close_l1(2.4229534940146547, shifted[[0, 1]], 1e-7);
}

#[test]
fn test_interface_rejects_invalid_parameters() {
    let parameters = Parameters {
        area_radius: -1.0,
        ..Parameters::default()
    };
    assert!(<MeanShift<f64> as MeanShiftInterface<f64>>::init(parameters).is_err());

    let parameters = Parameters {
        kernel_bandwidth: 0.0,
        ..Parameters::<f64>::default()
    };
    assert!(<MeanShift<f64> as MeanShiftInterface<f64>>::init(parameters).is_err());
}

#[test]
fn test_interface_reports_dimension_mismatch() {
    let (parameters, grid) = read_data("data/dataset1.csv");
    let mean_shift: MeanShift<f64> = MeanShiftInterface::init(parameters).unwrap();

    assert!(mean_shift
        .fit(arr2(&[[2.0, 2.0, 2.0]]).view(), grid.view())
        .is_err());
}

#[test]
fn test_fit_takes_queries_before_grid_like_run() {
    let (parameters, grid) = read_data("data/dataset1.csv");
    let mean_shift: MeanShift<f64> = MeanShiftInterface::init(parameters.with_rounds(5)).unwrap();
    let queries = arr2(&[[2.0, 2.0], [3.0, 3.5], [0.5, 0.5]]);

    let (fitted, fitted_trajectories) = mean_shift.fit(queries.view(), grid.view()).unwrap();
    let ran = mean_shift.run(queries.view(), grid.view(), 5).unwrap();
    let (_, trajectories) = mean_shift
        .run_with_trajectories(queries.view(), grid.view(), 5)
        .unwrap();

    assert_eq!(queries.nrows(), fitted.nrows());
    assert_eq!(ran, fitted);
    assert_eq!(trajectories, fitted_trajectories);
}
