//! Result ordering carried alongside a page request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction of a single ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

impl Direction {
    pub fn is_ascending(self) -> bool {
        self == Direction::Asc
    }

    pub fn is_descending(self) -> bool {
        self == Direction::Desc
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(()),
        }
    }
}

/// Placement of null values relative to non-null ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NullHandling {
    /// Leave it to the origin's store.
    #[default]
    Native,
    NullsFirst,
    NullsLast,
}

/// One `(property, direction)` pair of a [`Sort`].
///
/// Only `property` is required on the wire; `direction` defaults to ascending
/// and unknown keys such as `ascending` are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    property: String,

    #[serde(default)]
    direction: Direction,

    #[serde(default)]
    ignore_case: bool,

    #[serde(default)]
    null_handling: NullHandling,
}

impl Order {
    pub fn new(direction: Direction, property: &str) -> Self {
        Self {
            property: property.to_string(),
            direction,
            ignore_case: false,
            null_handling: NullHandling::Native,
        }
    }

    pub fn asc(property: &str) -> Self {
        Self::new(Direction::Asc, property)
    }

    pub fn desc(property: &str) -> Self {
        Self::new(Direction::Desc, property)
    }

    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub fn with_null_handling(mut self, null_handling: NullHandling) -> Self {
        self.null_handling = null_handling;
        self
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn null_handling(&self) -> NullHandling {
        self.null_handling
    }
}

/// Ordered list of [`Order`]s. An empty sort means unordered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sort(Vec<Order>);

impl Sort {
    pub fn by(orders: impl IntoIterator<Item = Order>) -> Self {
        Self(orders.into_iter().collect())
    }

    /// Sorts every property in `properties` the same direction.
    pub fn by_properties(direction: Direction, properties: &[&str]) -> Self {
        Self(
            properties
                .iter()
                .map(|property| Order::new(direction, property))
                .collect(),
        )
    }

    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn is_sorted(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn is_unsorted(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first order for `property`, if any.
    pub fn order_for(&self, property: &str) -> Option<&Order> {
        self.0.iter().find(|order| order.property == property)
    }

    /// Appends the orders of `other` after this sort's own.
    pub fn and(mut self, other: Sort) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unsorted() {
            return write!(f, "UNSORTED");
        }
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|order| {
                let direction = match order.direction {
                    Direction::Asc => "ASC",
                    Direction::Desc => "DESC",
                };
                if order.ignore_case {
                    format!("{}: {} (ignore case)", order.property, direction)
                } else {
                    format!("{}: {}", order.property, direction)
                }
            })
            .collect();
        write!(f, "{}", rendered.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("ASC".parse::<Direction>(), Ok(Direction::Asc));
        assert_eq!("desc".parse::<Direction>(), Ok(Direction::Desc));
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn order_defaults_when_only_property_given() {
        let order: Order = serde_json::from_str(r#"{"property": "name"}"#).unwrap();
        assert_eq!(order.property(), "name");
        assert!(order.direction().is_ascending());
        assert!(!order.is_ignore_case());
        assert_eq!(order.null_handling(), NullHandling::Native);
    }

    #[test]
    fn order_ignores_unknown_keys() {
        let json = r#"{
            "property": "createdAt",
            "direction": "DESC",
            "ascending": false,
            "descending": true,
            "ignoreCase": true,
            "nullHandling": "NULLS_LAST"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert!(order.direction().is_descending());
        assert!(order.is_ignore_case());
        assert_eq!(order.null_handling(), NullHandling::NullsLast);
    }

    #[test]
    fn order_accepts_lowercase_direction() {
        let order: Order =
            serde_json::from_str(r#"{"property": "id", "direction": "desc"}"#).unwrap();
        assert_eq!(order.direction(), Direction::Desc);
    }

    #[test]
    fn sort_is_a_json_array() {
        let sort: Sort = serde_json::from_str(
            r#"[{"property": "lastName", "direction": "ASC"}, {"property": "id", "direction": "DESC"}]"#,
        )
        .unwrap();
        let properties: Vec<&str> = sort.iter().map(Order::property).collect();
        assert_eq!(properties, vec!["lastName", "id"]);
        assert_eq!(sort, Sort::by([Order::asc("lastName"), Order::desc("id")]));
    }

    #[test]
    fn order_for_finds_first_match() {
        let sort = Sort::by_properties(Direction::Desc, &["score", "name"]);
        assert_eq!(sort.order_for("name"), Some(&Order::desc("name")));
        assert!(sort.order_for("missing").is_none());
    }

    #[test]
    fn and_keeps_precedence() {
        let sort = Sort::by([Order::asc("a")]).and(Sort::by([Order::desc("b")]));
        assert_eq!(sort.to_string(), "a: ASC,b: DESC");
    }

    #[test]
    fn unsorted_display() {
        let sort = Sort::unsorted();
        assert!(sort.is_unsorted());
        assert!(!sort.is_sorted());
        assert_eq!(sort.to_string(), "UNSORTED");
    }
}
