use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::operator::{Group, Pair};

/// Group the pairs by word.
///
/// Groups come out in the order their word was first seen and each group keeps the
/// contributions in the order they were received, so the output depends only on the order of
/// `pairs`.
pub fn shuffle(pairs: Vec<Pair>) -> Vec<Group> {
    let mut groups: IndexMap<String, Vec<u64>, FxBuildHasher> = IndexMap::default();
    for Pair { word, contribution } in pairs {
        groups.entry(word).or_default().push(contribution);
    }
    groups
        .into_iter()
        .map(|(word, contributions)| Group {
            word,
            contributions,
        })
        .collect()
}
