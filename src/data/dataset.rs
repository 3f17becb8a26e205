use crate::domain::record::{Label, Record};

/// An ordered, in-memory table of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self { Self { records } }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> { self.records.iter() }

    pub fn records(&self) -> &[Record] { &self.records }

    pub fn into_records(self) -> Vec<Record> { self.records }

    /// `(rows, columns)`, printed the same way a dataframe reports its shape
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), Record::COLUMNS.len())
    }

    /// Rewrite every abstract with `f`, calling `on_row` after each one.
    pub fn map_abstracts<F, P>(&mut self, mut f: F, mut on_row: P)
    where
        F: FnMut(&str) -> String,
        P: FnMut(),
    {
        for record in &mut self.records {
            record.abstract_text = f(&record.abstract_text);
            on_row();
        }
    }

    /// Split rows into (originals, generated), each keeping input order.
    pub fn partition_by_label(&self) -> (Vec<&Record>, Vec<&Record>) {
        self.records.iter().partition(|r| !r.is_generated())
    }

    pub fn count_label(&self, label: Label) -> usize {
        self.records.iter().filter(|r| r.label == label).count()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self { Self::new(records) }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item     = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}
