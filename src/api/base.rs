use anyhow::Result;

use crate::models::PriceBook;

/// Supplies the static price reference for a session.
pub trait PriceSource {
    fn load(&self) -> Result<PriceBook>;
}
