use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::schedule::RateSchedule;

use super::{calculate_installment, CardBrand, PaymentMethod};

/// one row of the installment table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallmentRow {
    pub installments: u32,
    pub rate: Rate,
    pub final_value: Money,
    pub installment_value: Money,
}

/// one row of the member/regular comparison table
///
/// Both columns are quoted independently from their own base values; the
/// per-installment difference is whatever falls out of the two quotes, not
/// a redistribution of the sticker-price savings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualQuoteRow {
    pub installments: u32,
    pub rate: Rate,
    pub member_final_value: Money,
    pub member_installment_value: Money,
    pub regular_final_value: Money,
    pub regular_installment_value: Money,
}

fn row_count(schedule: &RateSchedule, method: PaymentMethod, brand: Option<CardBrand>) -> u32 {
    match method {
        // a single full payment, never an installment grid
        PaymentMethod::InstantTransfer => 1,
        PaymentMethod::PaymentLink => schedule.payment_link.max_installments(),
        PaymentMethod::CardAcquirer => brand
            .map(|brand| schedule.acquirer.for_brand(brand).max_installments())
            .unwrap_or_else(|| schedule.payment_link.max_installments()),
    }
}

/// build the full installment table for one base value
///
/// One quote per row from the same base value, recomputed fresh on every
/// call; nothing is cached between renders because the base value or the
/// method may change at any keystroke.
pub fn installment_table(
    schedule: &RateSchedule,
    base_value: Money,
    method: PaymentMethod,
    brand: Option<CardBrand>,
) -> Vec<InstallmentRow> {
    (1..=row_count(schedule, method, brand))
        .map(|installments| {
            let quote = calculate_installment(schedule, base_value, installments, method, brand);
            InstallmentRow {
                installments,
                rate: quote.rate,
                final_value: quote.final_value,
                installment_value: quote.installment_value,
            }
        })
        .collect()
}

/// build the member/regular comparison table
pub fn comparison_table(
    schedule: &RateSchedule,
    member_base: Money,
    regular_base: Money,
    method: PaymentMethod,
    brand: Option<CardBrand>,
) -> Vec<DualQuoteRow> {
    (1..=row_count(schedule, method, brand))
        .map(|installments| {
            let member = calculate_installment(schedule, member_base, installments, method, brand);
            let regular = calculate_installment(schedule, regular_base, installments, method, brand);
            DualQuoteRow {
                installments,
                rate: member.rate,
                member_final_value: member.final_value,
                member_installment_value: member.installment_value,
                regular_final_value: regular.final_value,
                regular_installment_value: regular.installment_value,
            }
        })
        .collect()
}
