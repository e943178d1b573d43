pub mod boundary;
pub mod catalog;
pub mod currency;
pub mod decimal;
pub mod errors;
pub mod pricing;
pub mod quote;
pub mod schedule;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{Notice, PricingError, Result};
pub use boundary::{CredentialVerifier, PriceSheet, PriceSheetSink, ProductSource, SpreadsheetKind};
pub use catalog::{sort_catalog, CatalogFilter, Condition, ProductRecord};
pub use currency::{format_brl, parse_locale_number};
pub use pricing::{adjusted_base, member_savings, PricingContext};
pub use quote::{
    calculate_installment, comparison_table, dual_price_message, installment_table,
    single_price_message, CardBrand, DualQuoteRow, InstallmentQuote, InstallmentRow,
    PaymentMethod, ProductDescriptor, QuoteRequest,
};
pub use schedule::{AcquirerTables, RateSchedule, RateTable};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
