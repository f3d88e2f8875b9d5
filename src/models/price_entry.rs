use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct PriceEntry {
    symbol: String,
    name: String,
    price: Decimal,
    change_24h: Decimal,
    icon: String,
}

/// Ordered symbol lookup table. Iteration follows insertion order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PriceBook {
    entries: Vec<PriceEntry>,
}

impl PriceBook {
    pub fn new(entries: Vec<PriceEntry>) -> Self {
        let mut book = Self::default();
        for entry in entries {
            book.insert(entry);
        }
        book
    }

    /// Adds an entry, replacing an existing one with the same symbol in place.
    pub fn insert(&mut self, entry: PriceEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.symbol() == entry.symbol())
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&PriceEntry> {
        self.entries.iter().find(|entry| entry.symbol() == symbol)
    }

    pub fn entries(&self) -> &Vec<PriceEntry> {
        &self.entries
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.symbol().as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
