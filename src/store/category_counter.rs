use std::collections::HashMap;

/// Occurrence counts per category, remembering first-seen order so that
/// ranking ties resolve the same way on every run.
#[derive(Debug, Clone, Default)]
pub struct CategoryCounter {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl CategoryCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, category: &str) {
        match self.counts.get_mut(category) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(category.to_string(), 1);
                self.order.push(category.to_string());
            }
        }
    }

    pub fn get(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(category, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(move |category| (category.as_str(), self.counts[category]))
    }

    /// The `limit` most frequent categories, most frequent first.
    /// Equal counts keep first-seen order.
    pub fn most_common(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_common_ranks_by_count_then_first_seen() {
        let mut counter = CategoryCounter::new();
        for category in ["b", "a", "c", "a", "c", "d"] {
            counter.increment(category);
        }

        assert_eq!(counter.get("a"), 2);
        assert_eq!(counter.get("missing"), 0);
        assert_eq!(counter.most_common(3), vec![("a", 2), ("c", 2), ("b", 1)]);
        assert_eq!(counter.most_common(10).len(), 4);
    }
}
