use signprotmat::data::interactions::{CellId, Dataset, InteractionRecord};
use signprotmat::data::selection::SelectionTracker;
use signprotmat::data::stats::ChartKind;
use signprotmat::persistence::*;

fn record(rec: &str, sig: &str, ty: Option<&str>) -> InteractionRecord {
    InteractionRecord {
        rec_gn: Some(rec.to_string()),
        sig_gn: Some(sig.to_string()),
        int_ty: ty.map(str::to_string),
        ..Default::default()
    }
}

fn dataset() -> Dataset {
    Dataset::from_records([
        record("3.50x50", "G.H5.23", Some("hydrophobic")),
        record("5.61x61", "G.H5.24", Some("polar")),
        record("3.50x50", "G.H5.23", Some("hydrophobic")),
        record("6.32x32", "G.H5.20", None),
    ])
}

#[test]
fn selection_round_trips_in_activation_order() {
    let mut ds = dataset();
    let mut sel = SelectionTracker::new();
    for id in [CellId(3), CellId(0), CellId(2)] {
        sel.toggle(&mut ds, id);
    }
    let mut state = ViewStateSerde::capture(&ds, &sel);
    state.active_chart = ChartKind::UniqueCrystallizedPerYear;
    assert!(state.saved_at.is_some());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    save_state_to_path(&state, &path).unwrap();
    let loaded = load_state_from_path(&path).unwrap();
    assert_eq!(loaded, state);

    let mut fresh = dataset();
    let mut restored = SelectionTracker::new();
    assert_eq!(loaded.restore_selection(&mut fresh, &mut restored), 0);
    // Identical rows are matched to distinct cells, first come first served.
    assert_eq!(restored.ids(), &[CellId(3), CellId(0), CellId(2)]);
    assert_eq!(restored.render(&fresh), sel.render(&ds));
    assert!(restored.is_consistent(&fresh));
}

#[test]
fn unmatched_entries_are_counted() {
    let mut ds = dataset();
    let mut sel = SelectionTracker::new();
    sel.toggle(&mut ds, CellId(1));

    let mut state = ViewStateSerde::capture(&ds, &sel);
    state.selected.push(SelectedCellSerde {
        receptor: Some("7.55x55".to_string()),
        signal_protein: Some("G.H5.26".to_string()),
        interaction_type: None,
    });

    let mut other = dataset();
    let mut restored = SelectionTracker::new();
    restored.toggle(&mut other, CellId(0));
    assert_eq!(state.restore_selection(&mut other, &mut restored), 1);
    assert_eq!(restored.ids(), &[CellId(1)]);
    assert!(!other.cell(CellId(0)).unwrap().is_active());
}

#[test]
fn missing_fields_take_defaults() {
    let state = state_from_json(r#"{"saved_at": null}"#).unwrap();
    assert_eq!(state.active_chart, ChartKind::UniqueByClass);
    assert!(state.stacked.is_empty());
    assert!(state.selected.is_empty());
    assert!(state.panels.is_empty());
}

#[test]
fn json_is_readable() {
    let state = ViewStateSerde {
        active_chart: ChartKind::AllByClassPerYear,
        panels: vec![PanelVisSerde {
            title: "Statistics".to_string(),
            visible: false,
        }],
        ..Default::default()
    };
    let json = state_to_json(&state).unwrap();
    assert!(json.contains("\"class_year\""));
    assert!(json.contains("\"Statistics\""));
}

#[test]
fn stacked_modes_are_keyed_by_chart_id() {
    let json = r#"{"saved_at": null, "stacked": {"class_year": false, "unique_cryst": true}}"#;
    let state = state_from_json(json).unwrap();
    assert_eq!(state.stacked.get(&ChartKind::AllByClassPerYear), Some(&false));
    assert_eq!(state.stacked.get(&ChartKind::UniqueCrystallized), Some(&true));
    assert!(state_to_json(&state).unwrap().contains(r#""class_year": false"#));
}
