use crate::distance_measure::SquaredEuclidean;
use crate::interface::{Parameters, Reduction};
use crate::meanshift_base::{neighbors, shift, MeanShift};
use crate::parallel::{par_neighbors, par_shift};
use crate::test_utils::{close_l1, read_data};
use crate::utils::extent;
use ndarray::{arr1, arr2, Array2, Axis};

fn parallel_parameters(parameters: Parameters<f64>) -> Parameters<f64> {
    parameters.with_reduction(Reduction::Parallel).with_threads(4)
}

#[test]
fn test_par_neighbors_keep_grid_order() {
    let (parameters, grid) = read_data("data/dataset1.csv");

    for center in grid.axis_iter(Axis(0)).step_by(37) {
        let sequential =
            neighbors::<_, SquaredEuclidean>(center, grid.view(), parameters.area_radius).unwrap();
        let parallel =
            par_neighbors::<_, SquaredEuclidean>(center, grid.view(), parameters.area_radius).unwrap();
        assert_eq!(sequential, parallel);
    }
}

#[test]
fn test_par_shift_agrees_with_shift() {
    let (parameters, grid) = read_data("data/dataset1.csv");
    let queries = arr2(&[[2.0, 2.0], [0.5, 0.5], [3.3, 4.4], [1.0, 2.5]]);

    for x in queries.axis_iter(Axis(0)) {
        let sequential = shift::<_, SquaredEuclidean>(x, grid.view(), &parameters).unwrap();
        let parallel = par_shift::<_, SquaredEuclidean>(x, grid.view(), &parameters).unwrap();
        close_l1(sequential[0], parallel[0], 1e-9);
        close_l1(sequential[1], parallel[1], 1e-9);
    }
}

#[test]
fn test_par_shift_without_neighbors_collapses_to_origin() {
    let grid = arr2(&[[0.0, 0.0], [1.0, 1.0]]);
    let parameters = Parameters::new(0.5, 0.35).unwrap();
    let x = arr1(&[10.0, 10.0]);

    let shifted = par_shift::<_, SquaredEuclidean>(x.view(), grid.view(), &parameters).unwrap();
    assert_eq!(arr1(&[0.0, 0.0]), shifted);
}

#[test]
fn test_par_shift_rejects_invalid_input() {
    let grid = arr2(&[[0.0, 0.0], [1.0, 1.0]]);
    let x = arr1(&[0.5, 0.5, 0.5]);
    assert!(par_shift::<_, SquaredEuclidean>(x.view(), grid.view(), &Parameters::default()).is_err());

    let parameters = Parameters {
        kernel_bandwidth: 0.0,
        ..Parameters::default()
    };
    let x = arr1(&[0.5, 0.5]);
    assert!(par_shift::<_, SquaredEuclidean>(x.view(), grid.view(), &parameters).is_err());
}

#[test]
fn test_parallel_run_on_dataset() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (parameters, grid) = read_data("data/dataset1.csv");
    let meanshift: MeanShift<f64> = MeanShift::new(parallel_parameters(parameters)).unwrap();
    let queries = arr2(&[[2.0, 2.0]]);

    let result = meanshift.run(queries.view(), grid.view(), 10).unwrap();

    close_l1(1.039957029200667, result[[0, 0]], 1e-7);
    close_l1(2.4229534940146547, result[[0, 1]], 1e-7);
}

#[test]
fn test_parallel_run_over_lattice_of_queries() {
    let (parameters, grid) = read_data("data/dataset1.csv");
    let queries: Array2<f64> = extent(grid.view()).unwrap().lattice(4).unwrap();
    assert_eq!(16, queries.nrows());

    let sequential: MeanShift<f64> = MeanShift::new(parameters.clone()).unwrap();
    let parallel: MeanShift<f64> = MeanShift::new(parallel_parameters(parameters)).unwrap();

    let expected = sequential.run(queries.view(), grid.view(), 20).unwrap();
    let received = parallel.run(queries.view(), grid.view(), 20).unwrap();

    for (e, r) in expected.iter().zip(received.iter()) {
        close_l1(*e, *r, 1e-7);
    }

    close_l1(0.9736100421635655, received[[0, 0]], 1e-6);
    close_l1(0.6705117650210207, received[[0, 1]], 1e-6);
    close_l1(2.9225645869350325, received[[10, 0]], 1e-6);
    close_l1(2.6658341750894303, received[[10, 1]], 1e-6);
    close_l1(3.3891104346453087, received[[15, 0]], 1e-6);
    close_l1(4.587083638303558, received[[15, 1]], 1e-6);
}
