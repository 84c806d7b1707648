//! Count, average and tag-frequency reductions shared by every directory page.
//!
//! Selectors are passed explicitly so the same reductions work over agencies,
//! jobs, or any other listing shape.

use std::collections::HashMap;

/// Number of listings in the collection.
pub fn count<T>(records: &[T]) -> usize {
    records.len()
}

/// Arithmetic mean of the selected amount over records where it is present.
///
/// Records whose amount is absent, non-finite, or negative are skipped. A
/// present zero counts. Returns `fallback` when nothing qualifies. The result
/// is not rounded.
pub fn average_of<T, F>(records: &[T], selector: F, fallback: f64) -> f64
where
    F: Fn(&T) -> Option<f64>,
{
    let (sum, qualifying) = records
        .iter()
        .filter_map(|record| selector(record))
        .filter(|value| is_valid_amount(*value))
        .fold((0.0_f64, 0_usize), |(sum, n), value| (sum + value, n + 1));

    if qualifying == 0 {
        fallback
    } else {
        sum / qualifying as f64
    }
}

/// Most frequent tag values across all records, highest count first.
///
/// Ties keep the order in which the tags were first seen while walking the
/// records and their tag sequences front to back.
pub fn top_tags<'a, T, F, I>(records: &'a [T], tags: F, limit: usize) -> Vec<String>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = &'a str>,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut tally = TagTally::default();
    for record in records {
        tally.extend(tags(record));
    }
    tally.top(limit)
}

pub(crate) fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Occurrence counts per tag, remembering first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagTally {
    // tag -> (first-seen position, occurrences)
    counts: HashMap<String, (usize, usize)>,
}

impl TagTally {
    pub fn record(&mut self, tag: &str) {
        self.add(tag, 1);
    }

    pub fn extend<'a, I>(&mut self, tags: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for tag in tags {
            self.record(tag);
        }
    }

    fn add(&mut self, tag: &str, occurrences: usize) {
        match self.counts.get_mut(tag) {
            Some((_, count)) => *count += occurrences,
            None => {
                let position = self.counts.len();
                self.counts.insert(tag.to_string(), (position, occurrences));
            }
        }
    }

    pub fn occurrences(&self, tag: &str) -> usize {
        self.counts.get(tag).map(|&(_, count)| count).unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn in_first_seen_order(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(usize, &str, usize)> = self
            .counts
            .iter()
            .map(|(tag, &(position, count))| (position, tag.as_str(), count))
            .collect();
        entries.sort_unstable_by_key(|&(position, _, _)| position);
        entries
            .into_iter()
            .map(|(_, tag, count)| (tag, count))
            .collect()
    }

    /// Tags with their counts, ranked by count descending then first-seen.
    pub fn ranked(&self) -> Vec<(String, usize)> {
        let mut ranked = self.in_first_seen_order();
        // sort_by is stable, so equal counts stay in first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect()
    }

    pub fn top(&self, limit: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(limit)
            .map(|(tag, _)| tag)
            .collect()
    }

    /// Folds `other` in as if its tags had been seen after ours.
    pub fn merge(&mut self, other: &TagTally) {
        for (tag, occurrences) in other.in_first_seen_order() {
            self.add(tag, occurrences);
        }
    }
}

/// Partial reduction state for a listing collection.
///
/// Rolling up a concatenation yields the same state as merging the rollups of
/// its parts in order, so paginated or incremental sources can aggregate page
/// by page. `amount_sum` is a float sum, so `==` between a merged rollup and a
/// whole-collection one is exact only when the partial sums are exactly
/// representable (whole-number budgets and rates); compare `average` with a
/// tolerance otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingRollup {
    pub count: usize,
    pub amount_sum: f64,
    pub amount_count: usize,
    pub tags: TagTally,
}

impl ListingRollup {
    pub fn from_records<'a, T, A, F, I>(records: &'a [T], amount: A, tags: F) -> Self
    where
        A: Fn(&T) -> Option<f64>,
        F: Fn(&'a T) -> I,
        I: IntoIterator<Item = &'a str>,
    {
        let mut rollup = Self::default();
        for record in records {
            rollup.count += 1;
            if let Some(value) = amount(record).filter(|value| is_valid_amount(*value)) {
                rollup.amount_sum += value;
                rollup.amount_count += 1;
            }
            rollup.tags.extend(tags(record));
        }
        rollup
    }

    pub fn merge(mut self, other: &ListingRollup) -> Self {
        self.count += other.count;
        self.amount_sum += other.amount_sum;
        self.amount_count += other.amount_count;
        self.tags.merge(&other.tags);
        self
    }

    pub fn average(&self, fallback: f64) -> f64 {
        if self.amount_count == 0 {
            fallback
        } else {
            self.amount_sum / self.amount_count as f64
        }
    }

    pub fn top_tags(&self, limit: usize) -> Vec<String> {
        self.tags.top(limit)
    }
}
