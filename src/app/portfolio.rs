use chrono::{Local, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    api::HistorySource,
    app::{calc, utils::parse_decimal},
    models::{
        DistributionEntry, DraftField, HistoryPoint, Holding, HoldingDraft, HoldingRow,
        PortfolioSnapshot, PriceBook,
    },
};

/// Hands out creation-time ids, bumped so they stay strictly increasing.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last + 1);
        self.last
    }
}

/// Parsed form fields, not yet given an id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HoldingInput {
    pub symbol: String,
    pub amount: Decimal,
    pub purchase_price: Decimal,
}

impl HoldingInput {
    pub fn into_holding(self, id: u64, date_added: NaiveDate) -> Holding {
        Holding::new(id, self.symbol, self.amount, self.purchase_price, date_added)
    }
}

/// Parses the draft, or `None` if any field is empty or not a number.
pub fn parse_draft(draft: &HoldingDraft) -> Option<HoldingInput> {
    let symbol = draft.symbol.trim();
    if symbol.is_empty() {
        return None;
    }

    let amount = parse_decimal(&draft.amount, "amount").ok()?;
    let purchase_price = parse_decimal(&draft.purchase_price, "purchase price").ok()?;

    Some(HoldingInput {
        symbol: symbol.to_uppercase(),
        amount,
        purchase_price,
    })
}

pub fn add_holding(
    holdings: &[Holding],
    draft: &HoldingDraft,
    id: u64,
    date_added: NaiveDate,
) -> Vec<Holding> {
    let mut updated = holdings.to_vec();
    if let Some(input) = parse_draft(draft) {
        updated.push(input.into_holding(id, date_added));
    }
    updated
}

pub fn remove_holding(holdings: &[Holding], id: u64) -> Vec<Holding> {
    holdings
        .iter()
        .filter(|holding| *holding.id() != id)
        .cloned()
        .collect()
}

pub struct HistorySettings {
    pub base_price: f64,
    pub days: u32,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            base_price: 50_000.0,
            days: 30,
        }
    }
}

pub struct Portfolio {
    holdings: Vec<Holding>,
    prices: PriceBook,
    draft: HoldingDraft,
    ids: IdGenerator,
    history_source: Box<dyn HistorySource>,
    history_settings: HistorySettings,
    history: Vec<HistoryPoint>,
}

impl Portfolio {
    pub fn new(
        prices: PriceBook,
        history_source: Box<dyn HistorySource>,
        history_settings: HistorySettings,
    ) -> Self {
        let mut portfolio = Self {
            holdings: Vec::new(),
            prices,
            draft: HoldingDraft::default(),
            ids: IdGenerator::default(),
            history_source,
            history_settings,
            history: Vec::new(),
        };
        portfolio.refresh_history();
        portfolio
    }

    pub fn holdings(&self) -> &Vec<Holding> {
        &self.holdings
    }

    pub fn prices(&self) -> &PriceBook {
        &self.prices
    }

    pub fn draft(&self) -> &HoldingDraft {
        &self.draft
    }

    pub fn history(&self) -> &Vec<HistoryPoint> {
        &self.history
    }

    pub fn history_days(&self) -> u32 {
        self.history_settings.days
    }

    /// Submits the draft. Returns whether a holding was added; the draft is
    /// cleared only on success.
    pub fn add_holding(&mut self) -> bool {
        let Some(input) = parse_draft(&self.draft) else {
            debug!(draft = ?self.draft, "Ignoring incomplete holding");
            return false;
        };

        let id = self.ids.next_id();
        debug!(id, symbol = %input.symbol, "Added holding");
        self.holdings.push(input.into_holding(id, Local::now().date_naive()));
        self.draft.clear();
        true
    }

    /// Most recently issued holding id, 0 before the first add.
    pub fn last_id(&self) -> u64 {
        self.ids.last
    }

    pub fn remove_holding(&mut self, id: u64) {
        let before = self.holdings.len();
        self.holdings = remove_holding(&self.holdings, id);
        if self.holdings.len() < before {
            debug!(id, "Removed holding");
        }
    }

    pub fn snapshot(&self) -> PortfolioSnapshot {
        calc::compute_snapshot(&self.holdings, &self.prices)
    }

    pub fn distribution(&self) -> Vec<DistributionEntry> {
        let snapshot = self.snapshot();
        calc::compute_distribution(&self.holdings, &self.prices, *snapshot.total_value())
    }

    pub fn holding_rows(&self) -> Vec<HoldingRow> {
        calc::holding_rows(&self.holdings, &self.prices)
    }

    pub fn refresh_history(&mut self) {
        let today = Local::now().date_naive();
        self.history = self.history_source.generate(
            self.history_settings.base_price,
            self.history_settings.days,
            today,
        );
        debug!(points = self.history.len(), "Generated price history");
    }

    pub fn push_draft_char(&mut self, field: DraftField, c: char) {
        self.draft.field_mut(field).push(c);
    }

    pub fn pop_draft_char(&mut self, field: DraftField) {
        self.draft.field_mut(field).pop();
    }

    /// Moves the draft symbol through the known symbols like a dropdown.
    /// An empty or unknown symbol starts from the "nothing selected" slot.
    pub fn cycle_draft_symbol(&mut self, forward: bool) {
        let symbols: Vec<String> = self.prices.symbols().map(String::from).collect();
        if symbols.is_empty() {
            return;
        }

        // Slot 0 is the empty selection, slots 1..=n are the symbols.
        let slots = symbols.len() + 1;
        let current = symbols
            .iter()
            .position(|symbol| *symbol == self.draft.symbol.trim().to_uppercase())
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };

        self.draft.symbol = if next == 0 {
            String::new()
        } else {
            symbols[next - 1].clone()
        };
    }
}
