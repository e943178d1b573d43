use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::decimal::Rate;
use crate::errors::{PricingError, Result};
use crate::quote::{CardBrand, PaymentMethod};

/// immutable fee table keyed by installment count
///
/// Holds one distinguished debit entry (a single-payment debit-card fee,
/// never offered as an installment option) plus an ordered list of rates
/// where index 0 is the 1x rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    debit: Rate,
    installments: Vec<Rate>,
}

impl RateTable {
    pub fn new(debit: Rate, installments: Vec<Rate>) -> Self {
        Self { debit, installments }
    }

    /// single-payment debit-card fee
    pub fn debit(&self) -> Rate {
        self.debit
    }

    /// highest installment count the table covers
    pub fn max_installments(&self) -> u32 {
        self.installments.len() as u32
    }

    /// fee for an installment count
    ///
    /// Counts outside the table quote a zero fee instead of failing. That
    /// fallback is load-bearing for compatibility with the live quoting
    /// flow, but it can silently undercharge, so every miss is logged.
    pub fn rate_for(&self, installments: u32) -> Rate {
        let entry = installments
            .checked_sub(1)
            .and_then(|index| self.installments.get(index as usize));

        match entry {
            Some(rate) => *rate,
            None => {
                warn!(installments, "installment count not in rate table, quoting zero fee");
                Rate::ZERO
            }
        }
    }

    fn from_points(debit: Decimal, points: &[Decimal]) -> Self {
        Self {
            debit: Rate::from_percentage(debit),
            installments: points.iter().copied().map(Rate::from_percentage).collect(),
        }
    }
}

/// card-acquirer fee tables, one per brand
///
/// The five tables have identical shape; only the percentages differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquirerTables {
    pub visa: RateTable,
    pub master: RateTable,
    pub elo: RateTable,
    pub hiper: RateTable,
    pub other: RateTable,
}

impl AcquirerTables {
    pub fn for_brand(&self, brand: CardBrand) -> &RateTable {
        match brand {
            CardBrand::Visa => &self.visa,
            CardBrand::Master => &self.master,
            CardBrand::Elo => &self.elo,
            CardBrand::Hiper => &self.hiper,
            CardBrand::Other => &self.other,
        }
    }

    fn tables(&self) -> [(&'static str, &RateTable); 5] {
        [
            ("visa", &self.visa),
            ("master", &self.master),
            ("elo", &self.elo),
            ("hiper", &self.hiper),
            ("other", &self.other),
        ]
    }
}

/// rate schedule configuration
///
/// Constructed once at startup and passed explicitly to every quote, so
/// alternate schedules can be substituted without touching global state.
/// Instant transfer carries no table; its rate is always zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    pub payment_link: RateTable,
    pub acquirer: AcquirerTables,
}

impl RateSchedule {
    /// the official hand-authored schedule
    ///
    /// The percentages are financial constants agreed with the acquirer and
    /// the payment-link provider. They are not derivable; do not edit them
    /// without a new fee agreement.
    pub fn official() -> Self {
        Self {
            payment_link: RateTable::from_points(
                dec!(1.05),
                &[
                    dec!(3.10),
                    dec!(4.70),
                    dec!(5.55),
                    dec!(6.40),
                    dec!(7.25),
                    dec!(8.10),
                    dec!(8.54),
                    dec!(9.39),
                    dec!(10.24),
                    dec!(11.09),
                    dec!(11.94),
                    dec!(12.79),
                    dec!(13.94),
                    dec!(14.79),
                    dec!(15.64),
                    dec!(16.49),
                    dec!(17.34),
                    dec!(18.19),
                ],
            ),
            acquirer: AcquirerTables {
                visa: RateTable::from_points(
                    dec!(0.99),
                    &[
                        dec!(3.19),
                        dec!(3.44),
                        dec!(4.17),
                        dec!(4.89),
                        dec!(5.61),
                        dec!(6.31),
                        dec!(6.82),
                        dec!(7.52),
                        dec!(8.20),
                        dec!(8.89),
                        dec!(9.56),
                        dec!(10.22),
                        dec!(11.94),
                        dec!(12.59),
                        dec!(13.24),
                        dec!(13.88),
                        dec!(14.52),
                        dec!(15.15),
                    ],
                ),
                master: RateTable::from_points(
                    dec!(0.99),
                    &[
                        dec!(2.95),
                        dec!(3.44),
                        dec!(4.17),
                        dec!(4.89),
                        dec!(5.61),
                        dec!(6.31),
                        dec!(6.84),
                        dec!(7.54),
                        dec!(8.22),
                        dec!(8.91),
                        dec!(9.58),
                        dec!(10.24),
                        dec!(11.94),
                        dec!(12.59),
                        dec!(13.24),
                        dec!(13.88),
                        dec!(14.52),
                        dec!(15.15),
                    ],
                ),
                elo: RateTable::from_points(
                    dec!(1.50),
                    &[
                        dec!(3.19),
                        dec!(4.43),
                        dec!(5.16),
                        dec!(5.88),
                        dec!(6.60),
                        dec!(7.30),
                        dec!(8.10),
                        dec!(8.80),
                        dec!(9.48),
                        dec!(10.17),
                        dec!(10.84),
                        dec!(11.50),
                        dec!(12.67),
                        dec!(13.32),
                        dec!(13.97),
                        dec!(14.61),
                        dec!(15.25),
                        dec!(15.88),
                    ],
                ),
                hiper: RateTable::from_points(
                    dec!(0.00),
                    &[
                        dec!(0.00),
                        dec!(2.24),
                        dec!(2.97),
                        dec!(3.69),
                        dec!(4.41),
                        dec!(5.11),
                        dec!(5.81),
                        dec!(6.51),
                        dec!(7.19),
                        dec!(7.88),
                        dec!(8.55),
                        dec!(9.21),
                        dec!(9.88),
                        dec!(10.53),
                        dec!(11.18),
                        dec!(11.82),
                        dec!(12.46),
                        dec!(13.09),
                    ],
                ),
                other: RateTable::from_points(
                    dec!(0.00),
                    &[
                        dec!(4.07),
                        dec!(4.43),
                        dec!(5.16),
                        dec!(5.88),
                        dec!(6.60),
                        dec!(7.30),
                        dec!(8.20),
                        dec!(8.90),
                        dec!(9.58),
                        dec!(10.27),
                        dec!(10.94),
                        dec!(11.60),
                        dec!(12.87),
                        dec!(13.52),
                        dec!(14.17),
                        dec!(14.81),
                        dec!(15.45),
                        dec!(16.08),
                    ],
                ),
            },
        }
    }

    /// load an alternate schedule from json
    pub fn from_json(json: &str) -> Result<Self> {
        let schedule: RateSchedule =
            serde_json::from_str(json).map_err(|e| PricingError::InvalidSchedule {
                message: e.to_string(),
            })?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// check structural invariants
    ///
    /// Brand tables must all cover the same installment range as the
    /// payment-link table, and no rate may be negative.
    pub fn validate(&self) -> Result<()> {
        let expected = self.payment_link.max_installments();
        if expected == 0 {
            return Err(PricingError::InvalidSchedule {
                message: "payment link table has no installment entries".to_string(),
            });
        }

        for (name, table) in self.acquirer.tables() {
            if table.max_installments() != expected {
                return Err(PricingError::InvalidSchedule {
                    message: format!(
                        "{} table covers {} installments, expected {}",
                        name,
                        table.max_installments(),
                        expected
                    ),
                });
            }
        }

        let all_rates = std::iter::once(&self.payment_link)
            .chain(self.acquirer.tables().into_iter().map(|(_, table)| table));
        for table in all_rates {
            if table.debit().as_decimal().is_sign_negative()
                || table.installments.iter().any(|r| r.as_decimal().is_sign_negative())
            {
                return Err(PricingError::InvalidSchedule {
                    message: "negative fee rate".to_string(),
                });
            }
        }

        Ok(())
    }

    /// fee rate for a method, brand, and installment count
    ///
    /// Instant transfer is always zero. A card-acquirer lookup without a
    /// brand also quotes zero, mirroring the lookup-miss fallback.
    pub fn rate(
        &self,
        installments: u32,
        method: PaymentMethod,
        brand: Option<CardBrand>,
    ) -> Rate {
        match method {
            PaymentMethod::InstantTransfer => Rate::ZERO,
            PaymentMethod::PaymentLink => self.payment_link.rate_for(installments),
            PaymentMethod::CardAcquirer => match brand {
                Some(brand) => self.acquirer.for_brand(brand).rate_for(installments),
                None => {
                    warn!("card acquirer rate requested without a brand, quoting zero fee");
                    Rate::ZERO
                }
            },
        }
    }

    /// single-payment debit rate for a method
    pub fn debit_rate(&self, method: PaymentMethod, brand: Option<CardBrand>) -> Rate {
        match method {
            PaymentMethod::InstantTransfer => Rate::ZERO,
            PaymentMethod::PaymentLink => self.payment_link.debit(),
            PaymentMethod::CardAcquirer => brand
                .map(|brand| self.acquirer.for_brand(brand).debit())
                .unwrap_or(Rate::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_official_tables_cover_eighteen_installments() {
        let schedule = RateSchedule::official();

        assert_eq!(schedule.payment_link.max_installments(), 18);
        for (_, table) in schedule.acquirer.tables() {
            assert_eq!(table.max_installments(), 18);
        }

        schedule.validate().unwrap();
    }

    #[test]
    fn test_payment_link_rates() {
        let schedule = RateSchedule::official();

        assert_eq!(
            schedule.rate(1, PaymentMethod::PaymentLink, None),
            Rate::from_percentage(dec!(3.10))
        );
        assert_eq!(
            schedule.rate(18, PaymentMethod::PaymentLink, None),
            Rate::from_percentage(dec!(18.19))
        );
        assert_eq!(
            schedule.debit_rate(PaymentMethod::PaymentLink, None),
            Rate::from_percentage(dec!(1.05))
        );
    }

    #[test]
    fn test_acquirer_rates_by_brand() {
        let schedule = RateSchedule::official();

        assert_eq!(
            schedule.rate(12, PaymentMethod::CardAcquirer, Some(CardBrand::Visa)),
            Rate::from_percentage(dec!(10.22))
        );
        assert_eq!(
            schedule.rate(12, PaymentMethod::CardAcquirer, Some(CardBrand::Master)),
            Rate::from_percentage(dec!(10.24))
        );
        assert_eq!(
            schedule.rate(1, PaymentMethod::CardAcquirer, Some(CardBrand::Hiper)),
            Rate::ZERO
        );
        assert_eq!(
            schedule.rate(1, PaymentMethod::CardAcquirer, Some(CardBrand::Other)),
            Rate::from_percentage(dec!(4.07))
        );
        assert_eq!(
            schedule.debit_rate(PaymentMethod::CardAcquirer, Some(CardBrand::Elo)),
            Rate::from_percentage(dec!(1.50))
        );
    }

    #[test]
    fn test_instant_transfer_is_always_free() {
        let schedule = RateSchedule::official();

        for installments in 0..=24 {
            assert_eq!(
                schedule.rate(installments, PaymentMethod::InstantTransfer, None),
                Rate::ZERO
            );
        }
    }

    #[test]
    fn test_lookup_miss_quotes_zero() {
        let schedule = RateSchedule::official();

        assert_eq!(schedule.rate(0, PaymentMethod::PaymentLink, None), Rate::ZERO);
        assert_eq!(schedule.rate(19, PaymentMethod::PaymentLink, None), Rate::ZERO);
        assert_eq!(
            schedule.rate(99, PaymentMethod::CardAcquirer, Some(CardBrand::Visa)),
            Rate::ZERO
        );
    }

    #[test]
    fn test_acquirer_without_brand_quotes_zero() {
        let schedule = RateSchedule::official();
        assert_eq!(schedule.rate(6, PaymentMethod::CardAcquirer, None), Rate::ZERO);
    }

    #[test]
    fn test_json_round_trip() {
        let schedule = RateSchedule::official();
        let json = schedule.to_json_pretty().unwrap();
        let restored = RateSchedule::from_json(&json).unwrap();
        assert_eq!(restored, schedule);
    }

    #[test]
    fn test_ragged_schedule_rejected() {
        let mut schedule = RateSchedule::official();
        schedule.acquirer.elo.installments.truncate(12);

        assert!(matches!(
            schedule.validate(),
            Err(PricingError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_empty_schedule_rejected() {
        let mut schedule = RateSchedule::official();
        schedule.payment_link.installments.clear();

        assert!(matches!(
            schedule.validate(),
            Err(PricingError::InvalidSchedule { .. })
        ));
    }
}
