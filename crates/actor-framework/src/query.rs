//! # Collection Queries
//!
//! A [`Query`] selects a subset of an actor's records: an optional predicate, an
//! ordering over creation time, and an optional limit. The actor applies them in
//! that order (filter, sort, limit) while it holds exclusive access to its store.
//!
//! ```rust,ignore
//! let recent = Query::<Order>::matching(move |o| o.login == login)
//!     .newest_first()
//!     .limit(5);
//! let orders = client.query(recent).await?;
//! ```

use crate::entity::ActorEntity;
use std::fmt;

/// Boxed predicate evaluated against each stored record.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Order in which matching records are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending id, i.e. creation order. This is the store's native order.
    #[default]
    OldestFirst,
    /// Descending id.
    NewestFirst,
}

/// A filter/sort/limit request over one actor's records.
pub struct Query<T: ActorEntity> {
    filter: Option<Filter<T>>,
    order: SortOrder,
    limit: Option<usize>,
}

impl<T: ActorEntity> Query<T> {
    /// Every record, oldest first, no limit.
    pub fn all() -> Self {
        Self {
            filter: None,
            order: SortOrder::OldestFirst,
            limit: None,
        }
    }

    /// Records for which `predicate` returns true.
    pub fn matching(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            filter: Some(Box::new(predicate)),
            ..Self::all()
        }
    }

    pub fn newest_first(mut self) -> Self {
        self.order = SortOrder::NewestFirst;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `item` passes the predicate (always true without one).
    pub fn matches(&self, item: &T) -> bool {
        self.filter.as_ref().map_or(true, |f| f(item))
    }

    /// Runs the query over records already in ascending id order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<T>
    where
        I: DoubleEndedIterator<Item = &'a T>,
    {
        let limit = self.limit.unwrap_or(usize::MAX);
        match self.order {
            SortOrder::OldestFirst => records
                .filter(|item| self.matches(item))
                .take(limit)
                .cloned()
                .collect(),
            SortOrder::NewestFirst => records
                .rev()
                .filter(|item| self.matches(item))
                .take(limit)
                .cloned()
                .collect(),
        }
    }
}

impl<T: ActorEntity> Default for Query<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T: ActorEntity> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filtered", &self.filter.is_some())
            .field("order", &self.order)
            .field("limit", &self.limit)
            .finish()
    }
}
