//! Five-way temporal classification of tasks.
//!
//! The classifier never reads the system clock. Callers pass `now` on every
//! call and decide themselves how often to call again.

use chrono::{DateTime, Duration, Utc};

use super::bucket::{Bucket, TimeBuckets};
use crate::config::EventConfig;
use crate::schedule::{ResolvedTask, Task, TaskTimeResolver, TimeLevel};

/// Default width of the NEXT window, in hours.
pub const DEFAULT_NEXT_WINDOW_HOURS: i64 = 2;

/// Buckets tasks into NOW / NEXT / UPCOMING / FUTURE / PAST.
#[derive(Debug, Clone)]
pub struct TemporalClassifier {
    resolver: TaskTimeResolver,
    next_window: Duration,
}

impl TemporalClassifier {
    pub fn new(config: &EventConfig) -> Self {
        Self::with_resolver(TaskTimeResolver::new(config))
    }

    pub fn with_resolver(resolver: TaskTimeResolver) -> Self {
        Self {
            resolver,
            next_window: Duration::hours(DEFAULT_NEXT_WINDOW_HOURS),
        }
    }

    /// Override how far ahead a start may be and still count as NEXT.
    pub fn with_next_window(mut self, window: Duration) -> Self {
        self.next_window = window;
        self
    }

    pub fn resolver(&self) -> &TaskTimeResolver {
        &self.resolver
    }

    /// Bucket of a single task, or `None` if it matches no predicate.
    pub fn classify(&self, task: &Task, now: DateTime<Utc>) -> Option<Bucket> {
        self.classify_resolved(&self.resolver.resolve(task), now)
    }

    /// First matching predicate, in priority order.
    pub fn classify_resolved(&self, task: &ResolvedTask, now: DateTime<Utc>) -> Option<Bucket> {
        if self.is_happening_now(task, now) {
            Some(Bucket::Now)
        } else if self.starts_within_window(task, now) {
            Some(Bucket::Next)
        } else if self.is_later_today(task, now) {
            Some(Bucket::Upcoming)
        } else if self.is_future(task, now) {
            Some(Bucket::Future)
        } else if is_past(task, now) {
            Some(Bucket::Past)
        } else {
            None
        }
    }

    /// Classify every task against one `now` and order each bucket.
    ///
    /// Tasks matching no predicate are left out.
    pub fn recompute<'a, I>(&self, tasks: I, now: DateTime<Utc>) -> TimeBuckets<'a>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut keyed: Vec<(Bucket, Option<DateTime<Utc>>, &'a Task)> = Vec::new();
        let mut dropped = 0usize;

        for task in tasks {
            let resolved = self.resolver.resolve(task);
            match self.classify_resolved(&resolved, now) {
                Some(bucket) => {
                    tracing::trace!(task_id = task.id, bucket = bucket.as_str(), "classified task");
                    keyed.push((bucket, resolved.start, task));
                }
                None => {
                    dropped += 1;
                    tracing::debug!(
                        task_id = task.id,
                        level = resolved.level.as_str(),
                        unresolved = resolved.is_unresolved(),
                        "task matched no time bucket"
                    );
                }
            }
        }

        // stable: ties and unresolvable starts keep input order
        keyed.sort_by_key(|(_, start, _)| (start.is_none(), *start));

        let mut buckets = TimeBuckets::default();
        for (bucket, _, task) in keyed {
            buckets.get_mut(bucket).push(task);
        }
        if dropped > 0 {
            tracing::debug!(dropped, kept = buckets.total(), "classification pass dropped tasks");
        }
        buckets
    }

    /// Order tasks by resolved start for plain list views.
    ///
    /// Same rule as within a bucket: ascending, stable, unresolvable last.
    pub fn sort_chronologically<'a, I>(&self, tasks: I) -> Vec<&'a Task>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut keyed: Vec<_> = tasks
            .into_iter()
            .map(|task| (self.resolver.resolve(task).start, task))
            .collect();
        keyed.sort_by_key(|(start, _)| (start.is_none(), *start));
        keyed.into_iter().map(|(_, task)| task).collect()
    }

    fn same_local_date(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.resolver.clock().same_local_date(a, b)
    }

    fn is_happening_now(&self, task: &ResolvedTask, now: DateTime<Utc>) -> bool {
        match task.level {
            TimeLevel::Time => match (task.start, task.end) {
                (Some(start), Some(end)) => {
                    self.same_local_date(start, now) && start <= now && now < end
                }
                _ => false,
            },
            TimeLevel::Day => task
                .start
                .is_some_and(|start| self.same_local_date(start, now)),
            TimeLevel::Week => match (task.start, task.end) {
                (Some(start), Some(end)) => start <= now && now <= end,
                _ => false,
            },
        }
    }

    fn starts_within_window(&self, task: &ResolvedTask, now: DateTime<Utc>) -> bool {
        if task.level != TimeLevel::Time {
            return false;
        }
        task.start
            .is_some_and(|start| start > now && start <= now + self.next_window)
    }

    fn is_later_today(&self, task: &ResolvedTask, now: DateTime<Utc>) -> bool {
        if task.level != TimeLevel::Time {
            return false;
        }
        task.start.is_some_and(|start| {
            start > now && self.same_local_date(start, now) && !self.starts_within_window(task, now)
        })
    }

    fn is_future(&self, task: &ResolvedTask, now: DateTime<Utc>) -> bool {
        task.start
            .is_some_and(|start| start > now && !self.same_local_date(start, now))
    }
}

fn is_past(task: &ResolvedTask, now: DateTime<Utc>) -> bool {
    task.end.is_some_and(|end| end < now)
}
