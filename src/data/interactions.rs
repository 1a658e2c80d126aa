//! Interaction dataset: positional rows shaped into heatmap cells.
//!
//! The host supplies one JSON array per interaction, with values in the
//! order given by [`KEYS`]. Holes, `null` and missing trailing positions are
//! all treated as "missing". Cells keep their load order; that order is the
//! only identity a cell has.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Column names of a positional interaction row, in order.
pub const KEYS: [&str; 8] = [
    "rec_sn", "rec_gn", "rec_aa", "pdb_id", "int_ty", "sig_sn", "sig_gn", "sig_aa",
];

/// Text shown wherever a field is missing.
pub const MISSING_LABEL: &str = "undefined";

/// Position of a cell inside its [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

/// One receptor / signaling-protein interaction as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub rec_sn: Option<String>,
    pub rec_gn: Option<String>,
    pub rec_aa: Option<String>,
    pub pdb_id: Option<String>,
    pub int_ty: Option<String>,
    pub sig_sn: Option<String>,
    pub sig_gn: Option<String>,
    pub sig_aa: Option<String>,
}

impl InteractionRecord {
    /// Build a record from one positional JSON row.
    ///
    /// `index` is only used for error reporting.
    pub fn from_row(index: usize, row: &Value) -> Result<Self> {
        let values = row.as_array().ok_or_else(|| Error::MalformedRow {
            index,
            reason: "expected a JSON array".to_string(),
        })?;
        if values.len() > KEYS.len() {
            return Err(Error::MalformedRow {
                index,
                reason: format!("{} values, at most {} expected", values.len(), KEYS.len()),
            });
        }

        let mut fields: [Option<String>; 8] = Default::default();
        for (pos, value) in values.iter().enumerate() {
            fields[pos] = match value {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(Error::MalformedRow {
                        index,
                        reason: format!("nested value in column '{}'", KEYS[pos]),
                    })
                }
            };
        }

        let [rec_sn, rec_gn, rec_aa, pdb_id, int_ty, sig_sn, sig_gn, sig_aa] = fields;
        Ok(Self {
            rec_sn,
            rec_gn,
            rec_aa,
            pdb_id,
            int_ty,
            sig_sn,
            sig_gn,
            sig_aa,
        })
    }

    /// Field by column position (see [`KEYS`]).
    pub fn field(&self, column: usize) -> Option<&str> {
        match column {
            0 => self.rec_sn.as_deref(),
            1 => self.rec_gn.as_deref(),
            2 => self.rec_aa.as_deref(),
            3 => self.pdb_id.as_deref(),
            4 => self.int_ty.as_deref(),
            5 => self.sig_sn.as_deref(),
            6 => self.sig_gn.as_deref(),
            7 => self.sig_aa.as_deref(),
            _ => None,
        }
    }

    pub fn receptor_label(&self) -> &str {
        self.rec_gn.as_deref().unwrap_or(MISSING_LABEL)
    }

    pub fn signal_protein_label(&self) -> &str {
        self.sig_gn.as_deref().unwrap_or(MISSING_LABEL)
    }

    pub fn interaction_label(&self) -> &str {
        self.int_ty.as_deref().unwrap_or(MISSING_LABEL)
    }
}

/// A record plus its interactive state.
///
/// The active flag can only be flipped by the selection tracker so that it
/// stays in step with the selection set.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub record: InteractionRecord,
    active: bool,
}

impl Cell {
    pub fn new(record: InteractionRecord) -> Self {
        Self {
            record,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Text of this cell's line in the info box.
    pub fn info_line(&self) -> String {
        format!(
            "{} : {}",
            self.record.receptor_label(),
            self.record.signal_protein_label()
        )
    }

    /// Hover tooltip: receptor, signaling protein and interaction type.
    pub fn tooltip_lines(&self) -> [String; 3] {
        [
            self.record.receptor_label().to_string(),
            self.record.signal_protein_label().to_string(),
            self.record.interaction_label().to_string(),
        ]
    }
}

/// The full interaction dataset together with its derived axis orders.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    cells: Vec<Cell>,
    receptor_axis: Vec<String>,
    signal_axis: Vec<String>,
}

impl Dataset {
    pub fn from_records(records: impl IntoIterator<Item = InteractionRecord>) -> Self {
        let cells: Vec<Cell> = records.into_iter().map(Cell::new).collect();

        let receptor_axis: Vec<String> = cells
            .iter()
            .map(|c| c.record.receptor_label().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        // Descending, so index 0 (the bottom row of the plot) holds the last name.
        let signal_axis: Vec<String> = cells
            .iter()
            .map(|c| c.record.signal_protein_label().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .rev()
            .collect();

        Self {
            cells,
            receptor_axis,
            signal_axis,
        }
    }

    pub fn from_rows(rows: &[Value]) -> Result<Self> {
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, row)| InteractionRecord::from_row(i, row))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_records(records))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let rows: Vec<Value> = serde_json::from_str(json)?;
        Self::from_rows(&rows)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&txt)?;
        log::info!(
            "Loaded {} interactions ({} receptors, {} signaling proteins) from {}",
            dataset.len(),
            dataset.receptor_axis.len(),
            dataset.signal_axis.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    pub(crate) fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter().enumerate().map(|(i, c)| (CellId(i), c))
    }

    /// First cell for every distinct receptor name, in dataset order.
    pub fn unique_receptors(&self) -> Vec<CellId> {
        self.first_per_label(|c| c.record.receptor_label())
    }

    /// First cell for every distinct signaling-protein name, in dataset order.
    pub fn unique_signal_proteins(&self) -> Vec<CellId> {
        self.first_per_label(|c| c.record.signal_protein_label())
    }

    fn first_per_label<'a>(&'a self, label: impl Fn(&'a Cell) -> &'a str) -> Vec<CellId> {
        let mut seen = BTreeSet::new();
        self.iter()
            .filter(|(_, c)| seen.insert(label(c)))
            .map(|(id, _)| id)
            .collect()
    }

    /// Distinct interaction types in first-seen order; missing types are skipped.
    pub fn interaction_types(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for ty in self.cells.iter().filter_map(|c| c.record.int_ty.as_deref()) {
            if !out.contains(&ty) {
                out.push(ty);
            }
        }
        out
    }

    /// Receptor names in ascending order (x axis, left to right).
    pub fn receptor_axis(&self) -> &[String] {
        &self.receptor_axis
    }

    /// Signaling-protein names in descending order (y axis, bottom to top).
    pub fn signal_protein_axis(&self) -> &[String] {
        &self.signal_axis
    }

    /// Category coordinates `(x, y)` of a cell's centre.
    pub fn position(&self, id: CellId) -> Option<(f64, f64)> {
        let cell = self.cell(id)?;
        let x = self
            .receptor_axis
            .iter()
            .position(|r| r == cell.record.receptor_label())?;
        let y = self
            .signal_axis
            .iter()
            .position(|s| s == cell.record.signal_protein_label())?;
        Some((x as f64, y as f64))
    }

    /// Hit test in category coordinates.
    ///
    /// `fill` is the fraction of a category slot covered by a cell. When
    /// several cells share a slot the last one wins, since it is drawn on top.
    pub fn cell_at(&self, x: f64, y: f64, fill: f64) -> Option<CellId> {
        let half = fill / 2.0;
        self.iter()
            .filter_map(|(id, _)| self.position(id).map(|p| (id, p)))
            .filter(|(_, (cx, cy))| (x - cx).abs() <= half && (y - cy).abs() <= half)
            .map(|(id, _)| id)
            .last()
    }

    /// Small datasets get more strongly rounded cells.
    pub fn is_compact(&self, threshold: usize) -> bool {
        self.cells.len() < threshold
    }
}
