use radar_rs::core::{AxisPoint, DomainSpec, RadarDataset, Series, ValueDomain};

fn single_axis_series(id: &str, value: f64) -> Series {
    Series::new(id, id, vec![AxisPoint::new("axis", value)])
}

#[test]
fn auto_range_expands_to_data_extremes() {
    let dataset = RadarDataset::new(vec![
        single_axis_series("a", 2.0),
        single_axis_series("b", -1.0),
    ]);

    let domain = ValueDomain::resolve(&dataset, DomainSpec::Auto { ceiling: 1.0 });
    assert_eq!(domain.max, 2.0);
    assert_eq!(domain.min, -1.0);
}

#[test]
fn auto_range_ceiling_wins_over_small_data() {
    let dataset = RadarDataset::new(vec![single_axis_series("a", 0.5)]);

    let domain = ValueDomain::resolve(&dataset, DomainSpec::Auto { ceiling: 1.0 });
    assert_eq!(domain.max, 1.0);
    assert_eq!(domain.min, 0.0);
}

#[test]
fn auto_range_min_never_rises_above_zero() {
    let dataset = RadarDataset::new(vec![single_axis_series("a", 0.4)]);

    let domain = ValueDomain::resolve(&dataset, DomainSpec::Auto { ceiling: 1.0 });
    assert_eq!(domain.min, 0.0);
}

#[test]
fn non_finite_values_are_excluded_from_the_scan() {
    let dataset = RadarDataset::new(vec![
        single_axis_series("a", f64::NAN),
        single_axis_series("b", 3.0),
        single_axis_series("c", f64::INFINITY),
    ]);

    let domain = ValueDomain::resolve(&dataset, DomainSpec::Auto { ceiling: 1.0 });
    assert_eq!(domain.max, 3.0);
    assert_eq!(domain.min, 0.0);
}

#[test]
fn dataset_without_finite_values_falls_back_to_defaults() {
    let dataset = RadarDataset::new(vec![single_axis_series("a", f64::NAN)]);

    let domain = ValueDomain::resolve(&dataset, DomainSpec::Auto { ceiling: 1.0 });
    assert_eq!(domain.max, 1.0);
    assert_eq!(domain.min, 0.0);
}

#[test]
fn fixed_range_ignores_the_data() {
    let dataset = RadarDataset::new(vec![single_axis_series("a", 99.0)]);

    let domain = ValueDomain::resolve(
        &dataset,
        DomainSpec::Fixed {
            min: f64::NAN,
            max: 10.0,
        },
    );
    assert_eq!(domain.max, 10.0);
    assert_eq!(domain.min, 0.0);
}

#[test]
fn fixed_range_falls_back_field_wise_when_non_finite() {
    let dataset = RadarDataset::new(Vec::new());

    let domain = ValueDomain::resolve(
        &dataset,
        DomainSpec::Fixed {
            min: f64::NAN,
            max: f64::NAN,
        },
    );
    assert_eq!(domain.min, 0.0);
    assert_eq!(domain.max, 1.0);
}

#[test]
fn resolution_is_independent_of_series_order() {
    let forward = RadarDataset::new(vec![
        single_axis_series("a", 2.0),
        single_axis_series("b", -1.0),
        single_axis_series("c", 0.7),
    ]);
    let reversed = RadarDataset::new(vec![
        single_axis_series("c", 0.7),
        single_axis_series("b", -1.0),
        single_axis_series("a", 2.0),
    ]);

    let spec = DomainSpec::Auto { ceiling: 1.0 };
    assert_eq!(
        ValueDomain::resolve(&forward, spec),
        ValueDomain::resolve(&reversed, spec)
    );
}

#[test]
fn level_values_interpolate_the_domain() {
    let domain = ValueDomain { min: 0.0, max: 1.0 };
    assert!((domain.value_at_level(2, 5) - 0.4).abs() <= 1e-12);
    assert!((domain.value_at_level(5, 5) - 1.0).abs() <= 1e-12);

    let shifted = ValueDomain {
        min: -1.0,
        max: 3.0,
    };
    assert!((shifted.value_at_level(1, 4) - 0.0).abs() <= 1e-12);
}
