//! CSV export of the interaction table and of the current selection.

use std::io::Write;
use std::path::Path;

use super::interactions::{Dataset, KEYS};
use super::selection::SelectionTracker;

/// Quote a CSV field when it contains a separator, quote or line break.
pub fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Write every cell with all eight columns. Missing fields are left empty.
pub fn write_table_csv<W: Write>(mut w: W, dataset: &Dataset) -> std::io::Result<()> {
    writeln!(w, "{}", KEYS.join(","))?;
    for cell in dataset.cells() {
        let row: Vec<String> = (0..KEYS.len())
            .map(|col| csv_field(cell.record.field(col).unwrap_or("")))
            .collect();
        writeln!(w, "{}", row.join(","))?;
    }
    Ok(())
}

/// Write the selected interactions in activation order.
pub fn write_selection_csv<W: Write>(
    mut w: W,
    dataset: &Dataset,
    selection: &SelectionTracker,
) -> std::io::Result<()> {
    writeln!(w, "receptor,signal_protein,interaction_type")?;
    for cell in selection.iter().filter_map(|id| dataset.cell(id)) {
        let r = &cell.record;
        writeln!(
            w,
            "{},{},{}",
            csv_field(r.receptor_label()),
            csv_field(r.signal_protein_label()),
            csv_field(r.int_ty.as_deref().unwrap_or(""))
        )?;
    }
    Ok(())
}

pub fn save_table_csv(path: &Path, dataset: &Dataset) -> std::io::Result<()> {
    let mut f = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_table_csv(&mut f, dataset)?;
    f.flush()
}

pub fn save_selection_csv(
    path: &Path,
    dataset: &Dataset,
    selection: &SelectionTracker,
) -> std::io::Result<()> {
    let mut f = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_selection_csv(&mut f, dataset, selection)?;
    f.flush()
}
