use std::collections::BTreeMap;

/// Item counts held by the player, keyed by item id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn add(&mut self, item: impl Into<String>, count: u32) {
        if count == 0 {
            return;
        }
        let slot = self.items.entry(item.into()).or_default();
        *slot = slot.saturating_add(count);
    }

    /// Removes `count` of `item`. Fails without change if not enough are held.
    pub fn remove(&mut self, item: &str, count: u32) -> bool {
        match self.items.get_mut(item) {
            Some(held) if *held >= count => {
                *held -= count;
                if *held == 0 {
                    self.items.remove(item);
                }
                true
            }
            _ => false,
        }
    }

    pub fn count(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, count)| (id.as_str(), *count))
    }
}
