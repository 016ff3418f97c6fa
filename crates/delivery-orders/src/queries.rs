//! Order listing and history reductions.
//!
//! Pure functions over order records. The [`OrderClient`](crate::clients::OrderClient)
//! fetches from the store and hands the records here.

use crate::model::{Order, OrderStatus, Role};
use actor_framework::Query;

/// Distinct `from` addresses returned by `recent_from_addresses`.
pub const RECENT_FROM_LIMIT: usize = 5;
/// Distinct `to` addresses returned by `recent_to_addresses`.
pub const RECENT_TO_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    From,
    To,
}

impl AddressField {
    pub fn of<'a>(&self, order: &'a Order) -> &'a str {
        match self {
            AddressField::From => &order.from,
            AddressField::To => &order.to,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Lowest,
    Highest,
}

/// Store query for the orders `login` may see when acting as `role`.
///
/// Admins see everything, drivers see the open pool of `Active` orders, anyone
/// else sees only their own orders.
pub fn visibility(login: &str, role: Role) -> Query<Order> {
    match role {
        Role::Admin => Query::all(),
        Role::Driver => Query::matching(|o: &Order| o.status == OrderStatus::Active),
        Role::Customer => placed_by(login),
    }
}

/// Store query for every order placed by `login`.
pub fn placed_by(login: &str) -> Query<Order> {
    let login = login.to_string();
    Query::matching(move |o: &Order| o.login == login)
}

/// Deduplicates `field` across `orders`, keeping first-seen order, then
/// truncates to `limit`. Pass orders newest first to get the most recent values.
pub fn distinct_recent(orders: &[Order], field: AddressField, limit: usize) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for order in orders {
        if seen.len() == limit {
            break;
        }
        let value = field.of(order);
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Cheapest or most expensive order, `None` for an empty slice.
///
/// Comparison is strict, so on equal prices the first record wins. Orders in
/// store order therefore resolve ties to the earliest created.
pub fn price_extreme(orders: &[Order], extreme: Extreme) -> Option<&Order> {
    orders.iter().fold(None, |best: Option<&Order>, order| match best {
        None => Some(order),
        Some(current) => {
            let better = match extreme {
                Extreme::Lowest => order.price < current.price,
                Extreme::Highest => order.price > current.price,
            };
            Some(if better { order } else { current })
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderCreate, OrderId, OrderType};

    fn order(id: u32, login: &str, from: &str, to: &str, price: f64) -> Order {
        let mut o = Order::new(
            OrderId(id),
            OrderCreate::new(login, from, to, OrderType::Standard),
        );
        o.price = price;
        o
    }

    #[test]
    fn test_distinct_recent_dedupes_then_truncates() {
        // Newest first: A appears in many orders but counts once.
        let orders: Vec<Order> = ["A", "A", "B", "A", "C", "B", "D", "E", "F", "A"]
            .iter()
            .enumerate()
            .map(|(i, from)| order(10 - i as u32, "u1", from, "X", 1.0))
            .collect();

        assert_eq!(
            distinct_recent(&orders, AddressField::From, RECENT_FROM_LIMIT),
            vec!["A", "B", "C", "D", "E"]
        );
        assert_eq!(
            distinct_recent(&orders, AddressField::From, RECENT_TO_LIMIT),
            vec!["A", "B", "C"]
        );
        assert_eq!(distinct_recent(&orders, AddressField::To, 3), vec!["X"]);
        assert!(distinct_recent(&[], AddressField::To, 3).is_empty());
    }

    #[test]
    fn test_price_extremes() {
        let orders = vec![
            order(1, "u1", "A", "B", 10.00),
            order(2, "u1", "A", "B", 25.50),
            order(3, "u1", "A", "B", 7.25),
        ];
        assert_eq!(price_extreme(&orders, Extreme::Lowest).unwrap().price, 7.25);
        assert_eq!(price_extreme(&orders, Extreme::Highest).unwrap().price, 25.50);
        assert!(price_extreme(&[], Extreme::Lowest).is_none());
    }

    #[test]
    fn test_price_extreme_ties_go_to_first_record() {
        let orders = vec![
            order(1, "u1", "A", "B", 5.0),
            order(2, "u1", "A", "B", 9.0),
            order(3, "u1", "A", "B", 5.0),
            order(4, "u1", "A", "B", 9.0),
        ];
        assert_eq!(price_extreme(&orders, Extreme::Lowest).unwrap().id, OrderId(1));
        assert_eq!(price_extreme(&orders, Extreme::Highest).unwrap().id, OrderId(2));
    }

    #[test]
    fn test_visibility_predicates() {
        let mut active = order(1, "u1", "A", "B", 1.0);
        let mut done = order(2, "u2", "A", "B", 1.0);
        active.status = OrderStatus::Active;
        done.status = OrderStatus::Done;

        let admin = visibility("root", Role::Admin);
        assert!(admin.matches(&active) && admin.matches(&done));

        let driver = visibility("d1", Role::Driver);
        assert!(driver.matches(&active));
        assert!(!driver.matches(&done));

        let customer = visibility("u2", Role::Customer);
        assert!(!customer.matches(&active));
        assert!(customer.matches(&done));
    }
}
