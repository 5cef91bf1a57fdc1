//! Repeatable technology rows

use super::field::FormField;
use crate::validation::TechEntryInput;
use std::fmt;
use uuid::Uuid;

/// Stable identity of a row, independent of its position in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(Uuid);

impl RowId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which input of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechColumn {
    Title,
    Knowledge,
}

#[derive(Debug, Clone)]
pub struct TechRow {
    pub id: RowId,
    pub title: FormField,
    pub knowledge: FormField,
}

impl TechRow {
    fn blank() -> Self {
        Self {
            id: RowId::generate(),
            title: FormField::text("Technology"),
            knowledge: FormField::numeric("Knowledge (1-100)"),
        }
    }

    pub fn field(&self, column: TechColumn) -> &FormField {
        match column {
            TechColumn::Title => &self.title,
            TechColumn::Knowledge => &self.knowledge,
        }
    }

    pub fn field_mut(&mut self, column: TechColumn) -> &mut FormField {
        match column {
            TechColumn::Title => &mut self.title,
            TechColumn::Knowledge => &mut self.knowledge,
        }
    }

    pub fn to_input(&self) -> TechEntryInput {
        TechEntryInput::new(self.title.as_text(), self.knowledge.as_text())
    }
}

/// Ordered list of technology rows
#[derive(Debug, Clone, Default)]
pub struct TechList {
    rows: Vec<TechRow>,
}

impl TechList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a blank row at the end and return its id
    pub fn append(&mut self) -> RowId {
        let row = TechRow::blank();
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Remove the row at `index`, keeping the order of the others
    pub fn remove(&mut self, index: usize) -> Option<TechRow> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&TechRow> {
        self.rows.get(index)
    }

    pub fn get_by_id_mut(&mut self, id: RowId) -> Option<&mut TechRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TechRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn to_inputs(&self) -> Vec<TechEntryInput> {
        self.rows.iter().map(TechRow::to_input).collect()
    }
}
