use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// base value financed after entry deductions
///
/// The single adjustment rule behind both the member-price and plain-price
/// quoting paths. Floors at zero: an entry worth more than the product never
/// produces a negative financed amount, the excess is absorbed.
pub fn adjusted_base(listed_price: Money, trade_in_credit: Money, cash_down_payment: Money) -> Money {
    (listed_price - trade_in_credit - cash_down_payment).max(Money::ZERO)
}

/// what a club member saves on the sticker price
///
/// Computed on the undiscounted prices, before any entry deduction.
pub fn member_savings(regular_price: Money, member_price: Money) -> Money {
    (regular_price - member_price).max(Money::ZERO)
}

/// inputs for one quoting round
///
/// Ephemeral: built from current form input, read once, discarded. All
/// amounts are non-negative currency values already normalized by the
/// locale parser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingContext {
    pub listed_price: Money,
    pub trade_in_credit: Money,
    pub cash_down_payment: Money,
}

impl PricingContext {
    pub fn new(listed_price: Money, trade_in_credit: Money, cash_down_payment: Money) -> Self {
        Self {
            listed_price,
            trade_in_credit,
            cash_down_payment,
        }
    }

    /// price with no entry deductions
    pub fn without_entry(listed_price: Money) -> Self {
        Self::new(listed_price, Money::ZERO, Money::ZERO)
    }

    /// amount the installment fees apply to
    pub fn base_value(&self) -> Money {
        adjusted_base(self.listed_price, self.trade_in_credit, self.cash_down_payment)
    }

    pub fn has_trade_in(&self) -> bool {
        self.trade_in_credit.is_positive()
    }

    pub fn has_cash_down(&self) -> bool {
        self.cash_down_payment.is_positive()
    }
}
