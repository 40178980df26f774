use super::errors::CartError;

/// Largest quantity a single add action may carry.
pub const MAX_QUANTITY_PER_ADD: u32 = 5;

/// Quantity of one add-to-cart action, always within `1..=MAX_QUANTITY_PER_ADD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self, CartError> {
        if !(1..=MAX_QUANTITY_PER_ADD).contains(&value) {
            return Err(CartError::QuantityOutOfRange);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_quantities_within_bounds() {
        assert_eq!(Quantity::new(1).unwrap().value(), 1);
        assert_eq!(Quantity::new(5).unwrap().value(), 5);
    }

    #[test]
    fn should_reject_zero() {
        assert!(matches!(
            Quantity::new(0).unwrap_err(),
            CartError::QuantityOutOfRange
        ));
    }

    #[test]
    fn should_reject_more_than_five() {
        assert!(matches!(
            Quantity::new(6).unwrap_err(),
            CartError::QuantityOutOfRange
        ));
    }
}
