use strum_macros::{Display, EnumIter};

/// Raw text of the add-holding form, parsed only on submit.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HoldingDraft {
    pub symbol: String,
    pub amount: String,
    pub purchase_price: String,
}

#[derive(Clone, Copy, Debug, Default, Display, EnumIter, Eq, PartialEq)]
pub enum DraftField {
    #[default]
    Symbol,
    Amount,
    #[strum(to_string = "Purchase Price")]
    PurchasePrice,
}

impl HoldingDraft {
    pub fn new(symbol: &str, amount: &str, purchase_price: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            amount: amount.to_string(),
            purchase_price: purchase_price.to_string(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Symbol => &self.symbol,
            DraftField::Amount => &self.amount,
            DraftField::PurchasePrice => &self.purchase_price,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Symbol => &mut self.symbol,
            DraftField::Amount => &mut self.amount,
            DraftField::PurchasePrice => &mut self.purchase_price,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
