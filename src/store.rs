//! In-memory price board: the single collection behind the HTTP API.

use serde::{Deserialize, Serialize, Serializer};

/// A named priced item ("food" entry) on the price board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceItem {
    pub name: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

/// Prices that land on a whole number serialize as JSON integers
/// (`50`, not `50.0`), matching the wire format clients see.
fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.fract() == 0.0 && price.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Round a price to 2 decimal places, half away from zero.
fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// Ordered in-memory collection of price items.
///
/// Insertion order is preserved for listing. Names act as a de-facto key
/// but uniqueness is not enforced: duplicates may coexist and every
/// name-based operation touches only the first match.
#[derive(Debug, Default)]
pub struct PriceStore {
    items: Vec<PriceItem>,
}

impl PriceStore {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Store pre-loaded with the stock food entries.
    pub fn seeded() -> Self {
        Self {
            items: vec![
                PriceItem {
                    name: "apple".to_string(),
                    price: 50.0,
                },
                PriceItem {
                    name: "orange".to_string(),
                    price: 90.0,
                },
                PriceItem {
                    name: "banana".to_string(),
                    price: 25.0,
                },
            ],
        }
    }

    /// All items in insertion order.
    pub fn list(&self) -> &[PriceItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first item with this exact name (case-sensitive).
    /// Shared by update/replace/remove so they all follow the same
    /// first-match rule.
    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// First item whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&PriceItem> {
        self.position(name).map(|idx| &self.items[idx])
    }

    /// Add an item to the end of the board and return the stored record.
    pub fn append(&mut self, name: String, price: f64) -> PriceItem {
        let item = PriceItem {
            name,
            price: round_to_cents(price),
        };
        self.items.push(item.clone());
        item
    }

    /// Set a new price on the first item matching `name`, leaving every
    /// other field untouched. `None` when no item matches.
    pub fn update_price(&mut self, name: &str, new_price: f64) -> Option<PriceItem> {
        let idx = self.position(name)?;
        self.items[idx].price = round_to_cents(new_price);
        Some(self.items[idx].clone())
    }

    /// Overwrite the whole record at the first match with a new item.
    /// The replacement keeps the matched item's position; its name comes
    /// from the caller and may differ from the name that was matched.
    pub fn replace(&mut self, name: &str, new_name: String, new_price: f64) -> Option<PriceItem> {
        let idx = self.position(name)?;
        self.items[idx] = PriceItem {
            name: new_name,
            price: round_to_cents(new_price),
        };
        Some(self.items[idx].clone())
    }

    /// Remove exactly one entry, the first match by name.
    pub fn remove(&mut self, name: &str) -> Option<PriceItem> {
        let idx = self.position(name)?;
        Some(self.items.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_stock_entries_in_order() {
        let store = PriceStore::seeded();
        let names: Vec<&str> = store.list().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "orange", "banana"]);
        assert_eq!(store.find_by_name("apple").unwrap().price, 50.0);
        assert_eq!(store.find_by_name("orange").unwrap().price, 90.0);
        assert_eq!(store.find_by_name("banana").unwrap().price, 25.0);
    }

    #[test]
    fn append_rounds_price_to_two_decimals() {
        let mut store = PriceStore::new();
        let stored = store.append("kiwi".to_string(), 33.336);
        assert_eq!(stored.price, 33.34);
        assert_eq!(store.find_by_name("kiwi").unwrap().price, 33.34);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = PriceStore::seeded();
        store.append("kiwi".to_string(), 10.0);
        assert_eq!(store.list().last().unwrap().name, "kiwi");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn find_returns_first_match_when_names_collide() {
        let mut store = PriceStore::new();
        store.append("apple".to_string(), 1.0);
        store.append("apple".to_string(), 2.0);
        assert_eq!(store.find_by_name("apple").unwrap().price, 1.0);
    }

    #[test]
    fn find_is_case_sensitive() {
        let store = PriceStore::seeded();
        assert!(store.find_by_name("Apple").is_none());
        assert!(store.find_by_name("apple").is_some());
    }

    #[test]
    fn update_price_touches_only_the_price_field() {
        let mut store = PriceStore::seeded();
        let updated = store.update_price("apple", 55.5).unwrap();
        assert_eq!(updated.name, "apple");
        assert_eq!(updated.price, 55.5);
        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[0].name, "apple");
    }

    #[test]
    fn update_price_rounds_and_hits_first_duplicate_only() {
        let mut store = PriceStore::new();
        store.append("apple".to_string(), 1.0);
        store.append("apple".to_string(), 2.0);
        store.update_price("apple", 9.999).unwrap();
        assert_eq!(store.list()[0].price, 10.0);
        assert_eq!(store.list()[1].price, 2.0);
    }

    #[test]
    fn update_missing_name_is_none_and_leaves_store_unchanged() {
        let mut store = PriceStore::seeded();
        assert!(store.update_price("mango", 10.0).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn replace_overwrites_record_in_place_and_may_rename() {
        let mut store = PriceStore::seeded();
        let replaced = store.replace("orange", "grape".to_string(), 12.344).unwrap();
        assert_eq!(replaced.name, "grape");
        assert_eq!(replaced.price, 12.34);

        // same slot, old record fully gone
        let names: Vec<&str> = store.list().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "grape", "banana"]);
        assert!(store.find_by_name("orange").is_none());
    }

    #[test]
    fn replace_missing_name_is_none() {
        let mut store = PriceStore::seeded();
        assert!(store.replace("mango", "mango".to_string(), 10.0).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_deletes_exactly_one_entry() {
        let mut store = PriceStore::new();
        store.append("apple".to_string(), 1.0);
        store.append("apple".to_string(), 2.0);
        let removed = store.remove("apple").unwrap();
        assert_eq!(removed.price, 1.0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_name("apple").unwrap().price, 2.0);
    }

    #[test]
    fn remove_missing_name_is_none() {
        let mut store = PriceStore::seeded();
        assert!(store.remove("mango").is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn whole_prices_serialize_as_json_integers() {
        let item = PriceItem {
            name: "apple".to_string(),
            price: 50.0,
        };
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"name":"apple","price":50}"#
        );
    }

    #[test]
    fn fractional_prices_keep_their_decimals() {
        let item = PriceItem {
            name: "kiwi".to_string(),
            price: 33.34,
        };
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"name":"kiwi","price":33.34}"#
        );
    }
}
