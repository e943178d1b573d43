pub mod message;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::schedule::RateSchedule;

pub use message::{dual_price_message, single_price_message, ProductDescriptor, QuoteRequest};
pub use table::{comparison_table, installment_table, DualQuoteRow, InstallmentRow};

/// payment method offered at the counter
///
/// Wire names match the storefront front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// same-day transfer, fee-free, always settled in a single payment
    #[serde(rename = "pix")]
    InstantTransfer,
    /// card-network acquirer with brand-dependent installment fees
    #[serde(rename = "pagseguro")]
    CardAcquirer,
    /// hosted checkout link with brand-independent installment fees
    #[serde(rename = "link")]
    PaymentLink,
}

/// card brand, relevant only for the acquirer method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardBrand {
    Visa,
    Master,
    Elo,
    Hiper,
    /// catch-all for brands without a dedicated table
    #[serde(rename = "DEMAIS")]
    Other,
}

/// quote for one payment arrangement
///
/// Derived value, recomputed on every call. `final_value` carries the fee
/// markup; `installment_value` is the equal per-payment amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallmentQuote {
    pub rate: Rate,
    pub final_value: Money,
    pub installment_value: Money,
}

/// quote a base value at an installment count
///
/// Instant transfer never divides into installments: whatever count is
/// selected in the UI, the customer pays the base value once, fee-free.
pub fn calculate_installment(
    schedule: &RateSchedule,
    base_value: Money,
    installments: u32,
    method: PaymentMethod,
    brand: Option<CardBrand>,
) -> InstallmentQuote {
    if method == PaymentMethod::InstantTransfer {
        return InstallmentQuote {
            rate: Rate::ZERO,
            final_value: base_value,
            installment_value: base_value,
        };
    }

    let rate = schedule.rate(installments, method, brand);
    let final_value = base_value.with_fee(rate);
    let installment_value = final_value.split_into(installments);

    InstallmentQuote {
        rate,
        final_value,
        installment_value,
    }
}

impl RateSchedule {
    /// convenience alias for [`calculate_installment`]
    pub fn quote(
        &self,
        base_value: Money,
        installments: u32,
        method: PaymentMethod,
        brand: Option<CardBrand>,
    ) -> InstallmentQuote {
        calculate_installment(self, base_value, installments, method, brand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_link_single_installment() {
        let schedule = RateSchedule::official();
        let quote = calculate_installment(
            &schedule,
            Money::from_major(1_000),
            1,
            PaymentMethod::PaymentLink,
            None,
        );

        assert_eq!(quote.rate, Rate::from_percentage(dec!(3.10)));
        assert_eq!(quote.final_value, Money::from_str_exact("1031.00").unwrap());
        assert_eq!(quote.installment_value, Money::from_str_exact("1031.00").unwrap());
    }

    #[test]
    fn test_acquirer_visa_twelve_installments() {
        let schedule = RateSchedule::official();
        let quote = calculate_installment(
            &schedule,
            Money::from_major(1_000),
            12,
            PaymentMethod::CardAcquirer,
            Some(CardBrand::Visa),
        );

        assert_eq!(quote.rate, Rate::from_percentage(dec!(10.22)));
        assert_eq!(quote.final_value, Money::from_str_exact("1102.20").unwrap());
        assert_eq!(quote.installment_value.round_dp(2), Money::from_str_exact("91.85").unwrap());
    }

    #[test]
    fn test_instant_transfer_ignores_installment_count() {
        let schedule = RateSchedule::official();
        let base = Money::from_str_exact("1234.56").unwrap();

        for installments in 1..=18 {
            let quote = calculate_installment(
                &schedule,
                base,
                installments,
                PaymentMethod::InstantTransfer,
                None,
            );
            assert_eq!(quote.rate, Rate::ZERO);
            assert_eq!(quote.final_value, base);
            assert_eq!(quote.installment_value, base);
        }
    }

    #[test]
    fn test_installments_times_value_recovers_total() {
        let schedule = RateSchedule::official();
        let base = Money::from_str_exact("1999.99").unwrap();
        let tolerance = dec!(0.000001);

        for installments in 1..=18u32 {
            let quote = calculate_installment(
                &schedule,
                base,
                installments,
                PaymentMethod::CardAcquirer,
                Some(CardBrand::Elo),
            );
            let recovered = quote.installment_value.as_decimal() * rust_decimal::Decimal::from(installments);
            let relative = ((recovered - quote.final_value.as_decimal())
                / quote.final_value.as_decimal())
            .abs();
            assert!(relative < tolerance, "{}x drifted by {}", installments, relative);
        }
    }

    #[test]
    fn test_quotes_are_deterministic() {
        let schedule = RateSchedule::official();
        let base = Money::from_str_exact("777.77").unwrap();

        let first = calculate_installment(&schedule, base, 7, PaymentMethod::PaymentLink, None);
        let second = calculate_installment(&schedule, base, 7, PaymentMethod::PaymentLink, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_base_quotes_zero() {
        let schedule = RateSchedule::official();
        let quote = calculate_installment(
            &schedule,
            Money::ZERO,
            12,
            PaymentMethod::CardAcquirer,
            Some(CardBrand::Master),
        );

        assert_eq!(quote.final_value, Money::ZERO);
        assert_eq!(quote.installment_value, Money::ZERO);
    }

    #[test]
    fn test_unmapped_count_quotes_fee_free() {
        let schedule = RateSchedule::official();
        let base = Money::from_major(1_000);
        let quote = calculate_installment(&schedule, base, 24, PaymentMethod::PaymentLink, None);

        assert_eq!(quote.rate, Rate::ZERO);
        assert_eq!(quote.final_value, base);
    }

    #[test]
    fn test_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::InstantTransfer).unwrap(),
            "\"pix\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CardAcquirer).unwrap(),
            "\"pagseguro\""
        );
        assert_eq!(serde_json::to_string(&PaymentMethod::PaymentLink).unwrap(), "\"link\"");
        assert_eq!(serde_json::to_string(&CardBrand::Other).unwrap(), "\"DEMAIS\"");
        assert_eq!(serde_json::to_string(&CardBrand::Visa).unwrap(), "\"VISA\"");
    }
}
