use signprotmat::data::stats::*;
use signprotmat::Error;

const STATS: &str = r#"{
    "unique_class_cryst_container": [
        {"key": "Class A", "values": [{"x": "Active", "y": 12}, {"x": "Inactive", "y": 30}]},
        {"key": "Class B", "values": [{"x": "Inactive", "y": 4}]}
    ],
    "cryst_year_container": [
        {"key": "Structures", "values": [
            {"x": 2007, "y": 1200}, {"x": 2008, "y": 5}, {"x": 2007, "y": 34}
        ]}
    ],
    "something_else": []
}"#;

#[test]
fn thousands_separator_matches_tick_format() {
    assert_eq!(format_thousands(0.0), "0");
    assert_eq!(format_thousands(999.0), "999");
    assert_eq!(format_thousands(1234.0), "1,234");
    assert_eq!(format_thousands(1234567.4), "1,234,567");
    assert_eq!(format_thousands(-9876.6), "-9,877");
    assert_eq!(format_thousands(-0.2), "0");
}

#[test]
fn chart_ids_and_datum_keys_resolve() {
    for kind in ChartKind::ALL {
        assert_eq!(ChartKind::from_id(kind.id()).unwrap(), kind);
        assert_eq!(ChartKind::from_id(kind.datum_key()).unwrap(), kind);
    }
    assert_eq!(ChartKind::default(), ChartKind::UniqueByClass);
    assert!(matches!(ChartKind::from_id("pie"), Err(Error::UnknownChart(_))));
}

#[test]
fn switcher_shows_exactly_one_chart() {
    let mut sw = ChartSwitcher::default();
    assert_eq!(sw.visible(), ChartKind::UniqueByClass);
    sw.select(ChartKind::AllCrystalsPerYear);
    let shown: Vec<ChartKind> = sw.containers().filter(|(_, v)| *v).map(|(k, _)| k).collect();
    assert_eq!(shown, vec![ChartKind::AllCrystalsPerYear]);
    assert_eq!(sw.containers().count(), 6);
}

#[test]
fn grouping_one_chart_leaves_the_others_stacked() {
    let mut sw = ChartSwitcher::default();
    sw.set_stacked(ChartKind::UniqueByClass, false);
    assert!(!sw.is_stacked(ChartKind::UniqueByClass));
    assert!(sw.is_stacked(ChartKind::AllCrystalsPerYear));

    sw.select(ChartKind::AllCrystalsPerYear);
    sw.select(ChartKind::UniqueByClass);
    assert!(!sw.is_stacked(ChartKind::UniqueByClass));

    // Going back to the default drops the override.
    sw.set_stacked(ChartKind::UniqueByClass, true);
    assert!(sw.stacked_overrides().is_empty());
}

#[test]
fn restored_modes_apply_over_a_grouped_default() {
    let mut sw = ChartSwitcher::new(ChartKind::AllByClassPerYear).with_default_stacked(false);
    assert!(!sw.is_stacked(ChartKind::UniqueCrystallized));

    let mut saved = std::collections::BTreeMap::new();
    saved.insert(ChartKind::AllByClassPerYear, true);
    saved.insert(ChartKind::UniqueCrystallized, false);
    sw.restore_stacked(&saved);
    assert!(sw.is_stacked(ChartKind::AllByClassPerYear));
    assert!(!sw.is_stacked(ChartKind::UniqueCrystallized));
    assert_eq!(sw.stacked_overrides().len(), 1);
}

#[test]
fn stats_json_keeps_known_datums() {
    let stats = StatsData::from_json_str(STATS).unwrap();
    assert_eq!(stats.series(ChartKind::UniqueByClass).len(), 2);
    assert_eq!(stats.series(ChartKind::AllCrystalsPerYear).len(), 1);
    assert!(stats.series(ChartKind::UniqueCrystallized).is_empty());
    assert!(stats.chart(ChartKind::UniqueCrystallized, true).is_empty());
}

#[test]
fn stacked_bars_line_up_per_category() {
    let stats = StatsData::from_json_str(STATS).unwrap();
    let chart = stats.chart(ChartKind::UniqueByClass, true);
    assert_eq!(chart.categories(), vec!["Active", "Inactive"]);

    let a = chart.bars(0);
    let b = chart.bars(1);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);
    assert_eq!(b[0].value, 0.0);
    assert_eq!(b[1].value, 4.0);
    assert_eq!(a[1].argument, b[1].argument);
    assert_eq!(chart.bar_width(), BAR_SLOT);
    assert!(chart.bars(5).is_empty());
}

#[test]
fn grouped_bars_split_the_slot() {
    let stats = StatsData::from_json_str(STATS).unwrap();
    let chart = stats.chart(ChartKind::UniqueByClass, false);
    let w = chart.bar_width();
    assert!((w - BAR_SLOT / 2.0).abs() < 1e-12);
    let a = chart.bars(0);
    let b = chart.bars(1);
    assert!((a[0].argument - (-BAR_SLOT / 2.0 + w * 0.5)).abs() < 1e-12);
    assert!((b[0].argument - (-BAR_SLOT / 2.0 + w * 1.5)).abs() < 1e-12);
    assert!((b[1].argument - a[1].argument - w).abs() < 1e-12);
}

#[test]
fn year_labels_are_integers_and_duplicates_sum() {
    let stats = StatsData::from_json_str(STATS).unwrap();
    let chart = stats.chart(ChartKind::AllCrystalsPerYear, true);
    assert_eq!(chart.categories(), vec!["2007", "2008"]);
    let bars = chart.bars(0);
    assert_eq!(bars[0].value, 1234.0);
    assert_eq!(bars[1].value, 5.0);
}

#[test]
fn series_without_values_parse() {
    let stats = StatsData::from_json_str(r#"{"unique_cryst": [{"key": "empty"}]}"#).unwrap();
    assert_eq!(stats.series(ChartKind::UniqueCrystallized)[0].values.len(), 0);
}
