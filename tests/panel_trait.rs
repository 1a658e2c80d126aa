use signprotmat::panels::*;

fn collapsed_label_for(p: &impl Panel) -> String {
    p.icon_only()
        .map(|s| s.to_string())
        .unwrap_or_else(|| p.title().to_string())
}

#[test]
fn collapsed_label_uses_icon_when_available() {
    let p = HeatmapPanel::default();
    let label = collapsed_label_for(&p);
    assert_eq!(label, p.icon_only().unwrap().to_string());
    assert!(!label.contains(p.title()));
}

#[test]
fn full_label_contains_both_icon_and_title() {
    let p = StatsPanel::default();
    let label = p.title_and_icon();
    assert!(label.contains(p.title()));
    assert!(label.contains(p.icon_only().unwrap()));
}

#[test]
fn data_table_starts_hidden() {
    assert!(!TablePanel::default().is_visible());
    assert!(InfoBoxPanel::default().is_visible());
    let mut p = InfoBoxPanel::default();
    p.set_visible(false);
    assert!(!p.state().visible);
}
