use std::collections::{BTreeMap, BTreeSet};

/// Resolve Man of the Match co-winners from a list of votes.
///
/// Every name reaching the highest tally wins. Blank votes are ignored and
/// surrounding whitespace is trimmed. No votes yields no winners.
pub fn resolve_motm<I, S>(votes: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tally: BTreeMap<String, u32> = BTreeMap::new();
    for vote in votes {
        let name = vote.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        *tally.entry(name.to_string()).or_insert(0) += 1;
    }

    let Some(&max) = tally.values().max() else {
        return BTreeSet::new();
    };

    tally
        .into_iter()
        .filter(|(_, count)| *count == max)
        .map(|(name, _)| name)
        .collect()
}
