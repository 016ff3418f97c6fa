//! Role-gated status transitions.
//!
//! | current     | Customer | Driver      | Admin                 |
//! |-------------|----------|-------------|-----------------------|
//! | Active      | Rejected | In progress | Rejected, In progress |
//! | In progress |          | Done        | Done                  |
//! | Rejected    |          |             |                       |
//! | Done        |          |             |                       |

use crate::model::{OrderStatus, Role};
use std::collections::HashMap;

/// Allowed next statuses per (current status, role). Pairs without an entry
/// allow nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTable(HashMap<(OrderStatus, Role), Vec<OrderStatus>>);

impl Default for TransitionTable {
    fn default() -> Self {
        use OrderStatus::*;
        Self::new([
            ((Active, Role::Customer), vec![Rejected]),
            ((Active, Role::Driver), vec![InProgress]),
            ((Active, Role::Admin), vec![Rejected, InProgress]),
            ((InProgress, Role::Driver), vec![Done]),
            ((InProgress, Role::Admin), vec![Done]),
        ])
    }
}

impl TransitionTable {
    pub fn new(entries: impl IntoIterator<Item = ((OrderStatus, Role), Vec<OrderStatus>)>) -> Self {
        Self(entries.into_iter().collect())
    }

    pub fn allowed(&self, current: OrderStatus, role: Role) -> &[OrderStatus] {
        self.0
            .get(&(current, role))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn permits(&self, current: OrderStatus, role: Role, requested: OrderStatus) -> bool {
        self.allowed(current, role).contains(&requested)
    }
}
