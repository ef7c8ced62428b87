use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// An ad-hoc part added to an order. Names are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparePart {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl SparePart {
    /// Price applied when the operator does not supply one.
    pub const DEFAULT_UNIT_PRICE: Decimal = dec!(10.00);

    /// Unrounded `unit_price × quantity`, saturating at `Decimal::MAX`.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Raw spare-part form values, before coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparePartInput {
    pub name: String,
    /// Quantity exactly as typed.
    pub quantity: String,
    /// `None` falls back to [`SparePart::DEFAULT_UNIT_PRICE`].
    pub unit_price: Option<Decimal>,
}

impl SparePartInput {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit_price: None,
        }
    }

    pub fn with_unit_price(
        mut self,
        unit_price: Decimal,
    ) -> Self {
        self.unit_price = Some(unit_price);
        self
    }
}
