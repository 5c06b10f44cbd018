use std::slice;

use crate::record::Record;

/// True when `record` passes `filter_text`.
///
/// A filter that is blank after trimming lets everything through; otherwise the
/// untrimmed text must occur in the display string (case-sensitive).
pub fn matches(record: &Record, filter_text: &str) -> bool {
    filter_text.trim().is_empty() || record.display().contains(filter_text)
}

/// Lazy view over `records` narrowed by `filter_text`.
pub fn filtered<'a>(records: &'a [Record], filter_text: &'a str) -> FilterView<'a> {
    FilterView {
        records: records.iter(),
        filter_text,
    }
}

/// Borrowing iterator produced by [`filtered`]. Nothing is cached: each view
/// reads the records it was built from.
#[derive(Clone, Debug)]
pub struct FilterView<'a> {
    records: slice::Iter<'a, Record>,
    filter_text: &'a str,
}

impl<'a> FilterView<'a> {
    /// Display strings of the matching records.
    pub fn displays(self) -> Vec<String> {
        self.map(Record::display).collect()
    }
}

impl<'a> Iterator for FilterView<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let filter_text = self.filter_text;
        self.records.find(|record| matches(record, filter_text))
    }
}
