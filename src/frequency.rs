use std::collections::btree_map::{self, BTreeMap};

use crate::symbol::Symbol;

/// Occurrence count per distinct symbol, iterated in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: BTreeMap<S, usize>,
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn from_symbols(symbols: &[S]) -> Self {
        symbols.iter().cloned().collect()
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, S, usize> {
        self.counts.iter()
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        FrequencyTable { counts: BTreeMap::new() }
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let counts = iter.into_iter()
            .fold(BTreeMap::new(), |mut acc, symbol| {
                *acc.entry(symbol).or_insert(0) += 1;
                acc
            });
        FrequencyTable { counts }
    }
}

impl<'a, S: Symbol> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, &'a usize);
    type IntoIter = btree_map::Iter<'a, S, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_each_distinct_symbol() {
        let table = FrequencyTable::from_symbols(&['A', 'A', 'B', 'B', 'C']);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&'A'), Some(2));
        assert_eq!(table.get(&'B'), Some(2));
        assert_eq!(table.get(&'C'), Some(1));
        assert_eq!(table.get(&'D'), None);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = FrequencyTable::<u8>::from_symbols(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn iterates_in_symbol_order() {
        let table: FrequencyTable<u8> = b"zebra".iter().copied().collect();
        let symbols: Vec<u8> = table.iter().map(|(s, _)| *s).collect();
        assert_eq!(symbols, b"aberz".to_vec());
    }
}
