use chrono::NaiveDate;

/// A maximal stretch of heartbeats sharing one date and one key, with no
/// gap wider than the timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<K> {
    pub key: K,
    pub date: NaiveDate,
    pub start: u32,
    pub end: u32,
}

impl<K> Run<K> {
    /// Seconds between the first and last heartbeat of the run.
    pub fn length(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    fn continues_with(&self, key: &K, date: NaiveDate, second: u32, timeout: u32) -> bool
    where
        K: PartialEq,
    {
        self.key == *key && self.date == date && second <= self.end.saturating_add(timeout)
    }
}

/// Single left-to-right pass that closes a run whenever the key or date
/// changes, or the gap since the run's last heartbeat exceeds `timeout`.
///
/// The final open run is yielded once the input is exhausted.
pub struct RunMerger<I, F, K> {
    events: I,
    key_of: F,
    timeout: u32,
    current: Option<Run<K>>,
}

impl<'a, I, F, K> RunMerger<I, F, K>
where
    I: Iterator<Item = (&'a str, NaiveDate, u32)>,
    F: FnMut(&'a str) -> K,
    K: PartialEq,
{
    pub fn new(events: I, timeout: u32, key_of: F) -> Self {
        Self {
            events,
            key_of,
            timeout,
            current: None,
        }
    }
}

impl<'a, I, F, K> Iterator for RunMerger<I, F, K>
where
    I: Iterator<Item = (&'a str, NaiveDate, u32)>,
    F: FnMut(&'a str) -> K,
    K: PartialEq,
{
    type Item = Run<K>;

    fn next(&mut self) -> Option<Run<K>> {
        for (category, date, second) in self.events.by_ref() {
            let key = (self.key_of)(category);
            match &mut self.current {
                Some(run) if run.continues_with(&key, date, second, self.timeout) => {
                    run.end = second;
                }
                _ => {
                    let opened = Run {
                        key,
                        date,
                        start: second,
                        end: second,
                    };
                    if let Some(closed) = self.current.replace(opened) {
                        return Some(closed);
                    }
                }
            }
        }

        self.current.take()
    }
}
