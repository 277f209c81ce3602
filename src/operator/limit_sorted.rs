use crate::operator::{RankedEntry, WordCounts};

/// The `n` most frequent words, by decreasing total.
///
/// The sort is stable over the iteration order of `counts`, so words with the same total keep
/// the order in which they first appeared in the text. Asking for more entries than there are
/// words returns all of them.
pub fn top_n(counts: &WordCounts, n: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = counts
        .iter()
        .map(|(word, &total)| RankedEntry::new(word.clone(), total))
        .collect();
    glidesort::sort_by(&mut entries, |a, b| b.total.cmp(&a.total));
    entries.truncate(n);
    entries
}
