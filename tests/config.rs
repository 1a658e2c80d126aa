use signprotmat::color_scheme::ColorScheme;
use signprotmat::config::ChartsConfig;
use signprotmat::data::stats::ChartKind;

#[test]
fn partial_yaml_keeps_other_defaults() {
    let cfg = ChartsConfig::from_yaml_str(
        "color_scheme: dark\nfeatures:\n  data_table: false\ncharts:\n  initial: cryst_year\n",
    )
    .unwrap();
    assert_eq!(cfg.color_scheme, ColorScheme::Dark);
    assert!(!cfg.features.data_table);
    assert!(cfg.features.legend);
    assert_eq!(cfg.charts.initial, ChartKind::AllCrystalsPerYear);
    assert!(cfg.charts.stacked);
    assert_eq!(cfg.heatmap.compact_threshold, 15);
    assert_eq!(cfg.heatmap.info_line_spacing, 15.0);
    assert_eq!(cfg.heatmap.x_label, "GPCR");
}

#[test]
fn defaults_survive_yaml_round_trip() {
    let cfg = ChartsConfig::default();
    let yaml = cfg.to_yaml().unwrap();
    assert_eq!(ChartsConfig::from_yaml_str(&yaml).unwrap(), cfg);
}

#[test]
fn unknown_chart_is_rejected() {
    assert!(ChartsConfig::from_yaml_str("charts:\n  initial: pie\n").is_err());
}

#[test]
fn loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("charts.yaml");
    std::fs::write(&path, "title: Test window\nwindow_size: [800, 600]\n").unwrap();
    let cfg = ChartsConfig::from_path(&path).unwrap();
    assert_eq!(cfg.title, "Test window");
    assert_eq!(cfg.window_size, [800.0, 600.0]);
}
