use benefit_synth::wind::{Season, TurbineModel, is_curtailed, simulate};
use benefit_synth::{SynthError, WindConfig, WindSeries};
use chrono::{Datelike, NaiveDate, TimeDelta, Timelike};

fn week(seed: u64, month: u32) -> WindConfig {
    let start = NaiveDate::from_ymd_opt(2019, month, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    WindConfig {
        seed,
        start,
        end: start + TimeDelta::days(7) - TimeDelta::minutes(10),
        step_minutes: 10,
    }
}

#[test]
fn test_series_length_and_spacing() {
    let series = simulate(&week(1, 3)).unwrap();
    assert_eq!(series.len(), 7 * 144);
    let samples: Vec<_> = series.collect();
    for pair in samples.windows(2) {
        assert_eq!(pair[1].timestamp - pair[0].timestamp, TimeDelta::minutes(10));
    }
}

#[test]
fn test_sample_invariants() {
    for sample in simulate(&week(5, 1)).unwrap() {
        assert!(sample.wind_speed >= 0.0);
        assert!((-30.0..=45.0).contains(&sample.temperature));
        for model in TurbineModel::ALL {
            let revenue = sample.revenue_of(model);
            assert!(revenue >= 0.0);
            assert!(revenue <= (sample.wind_speed * 35.0 * model.factor() * 100.0).round() / 100.0 + 0.01);
        }
        if sample.wind_speed == 0.0 {
            assert_eq!(sample.revenue, [0.0, 0.0, 0.0]);
        }
        assert_eq!(sample.curtailed, is_curtailed(sample.timestamp));
    }
}

#[test]
fn test_curtailment_follows_season() {
    for (month, hours) in [(1, 7), (7, 4), (4, 8)] {
        let samples: Vec<_> = simulate(&week(2, month)).unwrap().collect();
        let first_day = samples.iter().take(144);
        let curtailed = first_day.filter(|s| s.curtailed).count();
        assert_eq!(curtailed, hours * 6, "month {month}");
        let season = Season::of_month(month);
        assert!(samples
            .iter()
            .filter(|s| s.curtailed)
            .all(|s| season.is_curtailed_hour(s.timestamp.hour()) && s.timestamp.month() == month));
    }
}

#[test]
fn test_same_seed_same_series() {
    let a: Vec<_> = simulate(&week(9, 10)).unwrap().collect();
    let b: Vec<_> = simulate(&week(9, 10)).unwrap().collect();
    let c: Vec<_> = simulate(&week(10, 10)).unwrap().collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_invalid_configuration() {
    let mut config = week(1, 1);
    config.step_minutes = 0;
    assert!(matches!(WindSeries::new(&config), Err(SynthError::Config(_))));

    let mut config = week(1, 1);
    std::mem::swap(&mut config.start, &mut config.end);
    assert!(matches!(WindSeries::new(&config), Err(SynthError::Config(_))));
}

#[test]
fn test_default_series_is_ten_years() {
    let series = WindSeries::new(&WindConfig::default()).unwrap();
    assert_eq!(series.len(), 3653 * 144);
    assert_eq!(series.factors().years(), 2015..=2025);
}
