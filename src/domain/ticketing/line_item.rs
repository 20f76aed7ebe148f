//! TicketLineItem value object - one (category, quantity) request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{TicketCategory, TypeConstraintError};

/// A validated request for `quantity` tickets of one category.
///
/// Construction either yields a fully valid item or fails; there are no
/// setters, so an item stays valid for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLineItem")]
pub struct TicketLineItem {
    category: TicketCategory,
    quantity: u32,
}

impl TicketLineItem {
    /// Creates a line item, rejecting non-positive quantities.
    pub fn new(category: TicketCategory, quantity: i64) -> Result<Self, TypeConstraintError> {
        if quantity <= 0 {
            return Err(TypeConstraintError::invalid_quantity(quantity));
        }
        let quantity =
            u32::try_from(quantity).map_err(|_| TypeConstraintError::invalid_quantity(quantity))?;

        Ok(Self { category, quantity })
    }

    /// Creates a line item from a textual category such as `"ADULT"`.
    ///
    /// The category is checked before the quantity.
    pub fn parse(category: &str, quantity: i64) -> Result<Self, TypeConstraintError> {
        let category = category.parse::<TicketCategory>()?;
        Self::new(category, quantity)
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price of this line: unit price times quantity.
    pub fn cost(&self) -> u64 {
        self.category.unit_price() * u64::from(self.quantity)
    }

    /// Seats this line needs reserved.
    pub fn seats(&self) -> u64 {
        if self.category.occupies_seat() {
            u64::from(self.quantity)
        } else {
            0
        }
    }
}

/// Untrusted wire shape; any JSON value is accepted for the quantity so that
/// non-integers surface as a [`TypeConstraintError`] rather than a parse error.
#[derive(Deserialize)]
struct RawLineItem {
    category: String,
    quantity: Value,
}

impl TryFrom<RawLineItem> for TicketLineItem {
    type Error = TypeConstraintError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        let category = raw.category.parse::<TicketCategory>()?;
        let quantity = raw
            .quantity
            .as_i64()
            .ok_or_else(|| TypeConstraintError::invalid_quantity(&raw.quantity))?;
        Self::new(category, quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_a_valid_line_item() {
        let item = TicketLineItem::parse("ADULT", 3).unwrap();
        assert_eq!(item.category(), TicketCategory::Adult);
        assert_eq!(item.quantity(), 3);
    }

    #[test]
    fn rejects_invalid_category() {
        let err = TicketLineItem::parse("SENIOR", 2).unwrap_err();
        assert_eq!(err.to_string(), "type must be ADULT, CHILD, or INFANT");
    }

    #[test]
    fn rejects_negative_quantity() {
        let err = TicketLineItem::new(TicketCategory::Adult, -5).unwrap_err();
        assert!(matches!(err, TypeConstraintError::InvalidQuantity { .. }));
    }

    #[test]
    fn rejects_zero_quantity() {
        let err = TicketLineItem::new(TicketCategory::Adult, 0).unwrap_err();
        assert_eq!(err.to_string(), "quantity must be a positive integer");
    }

    #[test]
    fn rejects_quantity_beyond_u32() {
        let err = TicketLineItem::new(TicketCategory::Child, i64::from(u32::MAX) + 1).unwrap_err();
        assert!(matches!(err, TypeConstraintError::InvalidQuantity { .. }));
    }

    #[test]
    fn category_is_checked_before_quantity() {
        let err = TicketLineItem::parse("SENIOR", 0).unwrap_err();
        assert!(matches!(err, TypeConstraintError::InvalidCategory { .. }));
    }

    #[test]
    fn cost_and_seats_follow_category() {
        let adults = TicketLineItem::new(TicketCategory::Adult, 2).unwrap();
        let children = TicketLineItem::new(TicketCategory::Child, 3).unwrap();
        let infants = TicketLineItem::new(TicketCategory::Infant, 4).unwrap();

        assert_eq!((adults.cost(), adults.seats()), (50, 2));
        assert_eq!((children.cost(), children.seats()), (45, 3));
        assert_eq!((infants.cost(), infants.seats()), (0, 0));
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(
            TicketLineItem::parse("CHILD", 2).unwrap(),
            TicketLineItem::new(TicketCategory::Child, 2).unwrap()
        );
    }

    #[test]
    fn deserializes_through_validation() {
        let item: TicketLineItem =
            serde_json::from_str(r#"{"category": "INFANT", "quantity": 1}"#).unwrap();
        assert_eq!(item, TicketLineItem::new(TicketCategory::Infant, 1).unwrap());
    }

    #[test]
    fn deserialize_rejects_non_integer_quantity() {
        for json in [
            r#"{"category": "ADULT", "quantity": "two"}"#,
            r#"{"category": "ADULT", "quantity": 2.5}"#,
            r#"{"category": "ADULT", "quantity": null}"#,
        ] {
            let err = serde_json::from_str::<TicketLineItem>(json).unwrap_err();
            assert!(
                err.to_string().contains("quantity must be a positive integer"),
                "unexpected error for {json}: {err}"
            );
        }
    }

    #[test]
    fn deserialize_rejects_unknown_category() {
        let err = serde_json::from_str::<TicketLineItem>(r#"{"category": "VIP", "quantity": 1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("type must be ADULT, CHILD, or INFANT"));
    }

    #[test]
    fn serializes_category_and_quantity() {
        let item = TicketLineItem::new(TicketCategory::Child, 4).unwrap();
        let json = serde_json::to_value(item).unwrap();
        assert_eq!(json, serde_json::json!({"category": "CHILD", "quantity": 4}));
    }
}
