//! Bucket types produced by the temporal classifier.

use serde::{Deserialize, Serialize};

use crate::schedule::Task;

/// Temporal state of a task relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Now,
    Next,
    Upcoming,
    Future,
    Past,
}

impl Bucket {
    /// Predicate priority order.
    pub const ALL: [Bucket; 5] = [
        Bucket::Now,
        Bucket::Next,
        Bucket::Upcoming,
        Bucket::Future,
        Bucket::Past,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Now => "now",
            Self::Next => "next",
            Self::Upcoming => "upcoming",
            Self::Future => "future",
            Self::Past => "past",
        }
    }
}

/// Tasks grouped by bucket, each list ordered by start.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeBuckets<'a> {
    pub now: Vec<&'a Task>,
    pub next: Vec<&'a Task>,
    pub upcoming: Vec<&'a Task>,
    pub future: Vec<&'a Task>,
    pub past: Vec<&'a Task>,
}

impl<'a> TimeBuckets<'a> {
    pub fn get(&self, bucket: Bucket) -> &[&'a Task] {
        match bucket {
            Bucket::Now => &self.now,
            Bucket::Next => &self.next,
            Bucket::Upcoming => &self.upcoming,
            Bucket::Future => &self.future,
            Bucket::Past => &self.past,
        }
    }

    pub(crate) fn get_mut(&mut self, bucket: Bucket) -> &mut Vec<&'a Task> {
        match bucket {
            Bucket::Now => &mut self.now,
            Bucket::Next => &mut self.next,
            Bucket::Upcoming => &mut self.upcoming,
            Bucket::Future => &mut self.future,
            Bucket::Past => &mut self.past,
        }
    }

    /// Number of bucketed tasks. Can be less than the input length since
    /// unresolvable tasks are dropped.
    pub fn total(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.get(*b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Which bucket holds the task with this id, if any.
    pub fn bucket_of(&self, task_id: u32) -> Option<Bucket> {
        Bucket::ALL
            .into_iter()
            .find(|b| self.get(*b).iter().any(|t| t.id == task_id))
    }

    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            now: self.now.len(),
            next: self.next.len(),
            upcoming: self.upcoming.len(),
            future: self.future.len(),
            past: self.past.len(),
        }
    }
}

/// Per-bucket sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub now: usize,
    pub next: usize,
    pub upcoming: usize,
    pub future: usize,
    pub past: usize,
}
