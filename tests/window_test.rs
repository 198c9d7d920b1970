use rollrs::error::Error;
use rollrs::{Cell, Rolling, Series, Statistic, WindowExt};

fn float_series(data: Vec<f64>) -> Series<f64> {
    Series::new(data, Some("test".to_string())).unwrap()
}

#[test]
fn test_rolling_mean_and_sum() {
    let series = float_series(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);

    let mean = series.rolling(3).unwrap().mean();
    assert_eq!(mean.len(), 10);
    assert!(mean[0].is_none());
    assert!(mean[1].is_none());
    assert!((mean[2].unwrap() - 2.0).abs() < 1e-10);
    assert!((mean[3].unwrap() - 3.0).abs() < 1e-10);
    assert!((mean[9].unwrap() - 9.0).abs() < 1e-10);

    let sum = series.rolling(3).unwrap().sum();
    assert!(sum[1].is_none());
    assert!((sum[2].unwrap() - 6.0).abs() < 1e-10);
    assert!((sum[3].unwrap() - 9.0).abs() < 1e-10);
}

#[test]
fn test_rolling_min_max_median() {
    let series = float_series(vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0]);

    let min = series.rolling(3).unwrap().min();
    let max = series.rolling(3).unwrap().max();
    let median = series.rolling(3).unwrap().median();

    assert!((min[2].unwrap() - 1.0).abs() < 1e-10);
    assert!((max[2].unwrap() - 4.0).abs() < 1e-10);
    assert!((median[2].unwrap() - 3.0).abs() < 1e-10);
    assert!((min[5].unwrap() - 1.0).abs() < 1e-10);
    assert!((max[5].unwrap() - 9.0).abs() < 1e-10);
    assert!((median[5].unwrap() - 5.0).abs() < 1e-10);
}

#[test]
fn test_rolling_std_and_var() {
    let series = float_series(vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    // ddof=1: var of [1,2,3] is 1.0, std is 1.0
    let std = series.rolling(3).unwrap().std(1);
    let var = series.rolling(3).unwrap().var(1);
    assert!(std[0].is_none());
    assert!(std[1].is_none());
    assert!((std[2].unwrap() - 1.0).abs() < 1e-10);
    assert!((var[2].unwrap() - 1.0).abs() < 1e-10);
}

#[test]
fn test_rolling_window_size_one() {
    let series = float_series(vec![1.5, 2.5, 3.5]);
    let mean = series.rolling(1).unwrap().mean();
    assert!((mean[0].unwrap() - 1.5).abs() < 1e-10);
    assert!((mean[1].unwrap() - 2.5).abs() < 1e-10);
    assert!((mean[2].unwrap() - 3.5).abs() < 1e-10);
}

#[test]
fn test_rolling_zero_window_rejected() {
    let series = float_series(vec![1.0, 2.0]);
    assert!(matches!(
        series.rolling(0),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_rolling_excludes_missing_values() {
    // A full window of positions is required, but missing values inside a
    // window are excluded from the reduction
    let values = vec![Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)];
    let rolling = Rolling::new(values, 3).unwrap();

    let mean = rolling.mean();
    assert!(mean[0].is_none());
    assert!(mean[1].is_none());
    assert!((mean[2].unwrap() - 1.5).abs() < 1e-10); // [1, 2]
    assert!((mean[3].unwrap() - 3.0).abs() < 1e-10); // [2, 4]
    assert!((mean[4].unwrap() - 4.5).abs() < 1e-10); // [4, 5]
}

#[test]
fn test_rolling_all_missing_window() {
    let values = vec![None, None, None, Some(2.0)];
    let rolling = Rolling::new(values, 3).unwrap();

    let mean = rolling.mean();
    assert!(mean[2].is_none());
    assert!((mean[3].unwrap() - 2.0).abs() < 1e-10);
}

#[test]
fn test_rolling_std_needs_two_present_values() {
    let values = vec![Some(1.0), None, None, None];
    let rolling = Rolling::new(values, 3).unwrap();
    let std = rolling.std(1);
    assert!(std[2].is_none());
}

#[test]
fn test_statistic_parsing_and_naming() {
    assert_eq!("mean".parse::<Statistic>().unwrap(), Statistic::Mean);
    assert_eq!("avg".parse::<Statistic>().unwrap(), Statistic::Mean);
    assert_eq!("STD".parse::<Statistic>().unwrap(), Statistic::Std);
    assert_eq!(" median ".parse::<Statistic>().unwrap(), Statistic::Median);

    assert_eq!(Statistic::Mean.column_name(5), "avg-5");
    assert_eq!(Statistic::Std.column_name(3), "std-3");
    assert_eq!(Statistic::Median.column_name(7), "med-7");

    assert_eq!(Statistic::Mean.to_string(), "mean");
    assert_eq!(Statistic::Std.to_string(), "std");
}

#[test]
fn test_series_mean_skips_uncastable() {
    let series = Series::new(vec![2i64, 4, 6], Some("n".to_string())).unwrap();
    assert!((series.mean().unwrap() - 4.0).abs() < 1e-10);

    let empty: Series<i64> = Series::new(vec![], None).unwrap();
    assert!(empty.mean().is_err());
}

#[test]
fn test_cell_series_numeric_view() {
    let cells = vec![
        Cell::Int(1),
        Cell::Float(2.5),
        Cell::Empty,
        Cell::from("text"),
    ];
    let series = Series::new(cells, Some("mixed".to_string())).unwrap();
    assert_eq!(series.numeric(), vec![Some(1.0), Some(2.5), None, None]);
}
