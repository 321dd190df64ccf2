use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Occurrence count of each distinct symbol in an input sequence.
///
/// Entries are kept in order of first occurrence. That order is the order in which the tree
/// builder feeds leaves into its queue, so it fixes how ties between equal weights break.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, usize)>,
    index: FxHashMap<S, usize>,
}

impl<S: Hash + Eq + Clone> FrequencyTable<S> {
    /// Count every symbol in `symbols`. An empty input gives an empty table.
    pub fn count<I: IntoIterator<Item = S>>(symbols: I) -> Self {
        let mut table = Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        };
        symbols.into_iter().for_each(|sym| table.add(sym, 1));
        table
    }

    /// Build a table from explicit (symbol, count) pairs. Repeated symbols have their counts
    /// summed. Counts are not validated here; the tree builder rejects zero counts.
    pub fn from_entries<I: IntoIterator<Item = (S, usize)>>(entries: I) -> Self {
        let mut table = Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        };
        entries
            .into_iter()
            .for_each(|(sym, count)| table.add(sym, count));
        table
    }

    fn add(&mut self, sym: S, count: usize) {
        match self.index.get(&sym) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(sym.clone(), self.entries.len());
                self.entries.push((sym, count));
            }
        }
    }

    /// Count for `sym`, or 0 if it never occurred.
    pub fn get(&self, sym: &S) -> usize {
        self.index
            .get(sym)
            .map_or(0, |&i| self.entries[i].1)
    }
}

impl<S> FrequencyTable<S> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// (symbol, count) pairs in order of first occurrence.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.entries.iter().map(|(sym, count)| (sym, *count))
    }
}
