use crate::catalog::Condition;
use crate::currency::format_brl;
use crate::decimal::Money;
use crate::pricing::{adjusted_base, member_savings};
use crate::schedule::RateSchedule;

use super::{calculate_installment, CardBrand, PaymentMethod};

/// product identification shown at the top of a quote message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDescriptor {
    pub name: String,
    pub storage: Option<String>,
    pub condition: Option<Condition>,
}

impl ProductDescriptor {
    fn headline(&self, parenthesize_storage: bool) -> String {
        let name = self.name.trim();
        let name = if name.is_empty() { "Produto" } else { name };

        let mut parts = vec![name.to_string()];
        if let Some(storage) = self.storage.as_deref().map(str::trim) {
            if !storage.is_empty() {
                if parenthesize_storage {
                    parts.push(format!("({storage})"));
                } else {
                    parts.push(storage.to_string());
                }
            }
        }
        if let Some(condition) = self.condition {
            parts.push(condition.label().to_string());
        }

        parts.join(" ")
    }
}

/// everything one quote message needs
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub product: ProductDescriptor,
    pub regular_price: Money,
    pub trade_in_credit: Money,
    pub cash_down_payment: Money,
    pub method: PaymentMethod,
    pub brand: Option<CardBrand>,
    pub installments: u32,
}

enum Entry {
    None,
    CashOnly,
    TradeOnly,
    Both,
}

impl QuoteRequest {
    fn entry(&self) -> Entry {
        match (self.trade_in_credit.is_positive(), self.cash_down_payment.is_positive()) {
            (false, false) => Entry::None,
            (false, true) => Entry::CashOnly,
            (true, false) => Entry::TradeOnly,
            (true, true) => Entry::Both,
        }
    }
}

/// render the member/regular quote message
///
/// The text sales staff paste into the chat with the customer: both price
/// columns, what the entry covers, and the member savings on the sticker
/// price. Savings come from the undiscounted prices; each column is quoted
/// from its own adjusted base.
pub fn dual_price_message(
    schedule: &RateSchedule,
    request: &QuoteRequest,
    member_price: Money,
) -> String {
    let member_base = adjusted_base(member_price, request.trade_in_credit, request.cash_down_payment);
    let regular_base = adjusted_base(
        request.regular_price,
        request.trade_in_credit,
        request.cash_down_payment,
    );
    let savings = member_savings(request.regular_price, member_price);

    let mut text = format!("{}\n\n", request.product.headline(true));

    if request.method == PaymentMethod::InstantTransfer {
        match request.entry() {
            Entry::None => {}
            Entry::CashOnly => {
                text.push_str(&format!(
                    "Com a entrada de {}, o restante no PIX fica:\n\n",
                    format_brl(request.cash_down_payment)
                ));
            }
            Entry::TradeOnly => {
                text.push_str("Com o aparelho de entrada, o restante no PIX fica:\n\n");
            }
            Entry::Both => {
                text.push_str(&format!(
                    "Com o aparelho de entrada + {}, o restante no PIX fica:\n\n",
                    format_brl(request.cash_down_payment)
                ));
            }
        }

        text.push_str(&format!(
            "🟨 Valor normal: 💵 À vista no PIX: {}\n\n",
            format_brl(regular_base)
        ));
        text.push_str(&format!(
            "🟦 Para membros do Clube: 💵 À vista no PIX: {}\n\n",
            format_brl(member_base)
        ));
    } else {
        match request.entry() {
            Entry::None => {}
            Entry::CashOnly => {
                text.push_str(&format!(
                    "Com a entrada de {} fica:\n\n",
                    format_brl(request.cash_down_payment)
                ));
            }
            Entry::TradeOnly => {
                text.push_str("Com o aparelho de entrada fica:\n\n");
            }
            Entry::Both => {
                text.push_str(&format!(
                    "Com o aparelho de entrada + {} fica:\n\n",
                    format_brl(request.cash_down_payment)
                ));
            }
        }

        let member = calculate_installment(
            schedule,
            member_base,
            request.installments,
            request.method,
            request.brand,
        );
        let regular = calculate_installment(
            schedule,
            regular_base,
            request.installments,
            request.method,
            request.brand,
        );

        text.push_str(&format!(
            "🟨 Valor normal: 💳 Parcelado em {}x de {}\n\n",
            request.installments,
            format_brl(regular.installment_value)
        ));
        text.push_str(&format!(
            "🟦 Para membros do Clube: 💳 Parcelado em {}x de {}\n\n",
            request.installments,
            format_brl(member.installment_value)
        ));
    }

    text.push_str(&format!(
        "💰 Economia imediata: {} na compra só por ser membro",
        format_brl(savings)
    ));

    text
}

/// render the single-price quote message with warranty footer
pub fn single_price_message(schedule: &RateSchedule, request: &QuoteRequest) -> String {
    let base = adjusted_base(
        request.regular_price,
        request.trade_in_credit,
        request.cash_down_payment,
    );

    let mut text = format!("📱{}\n\n", request.product.headline(false));

    let context = match request.entry() {
        Entry::None => None,
        Entry::CashOnly => Some("Com entrada em dinheiro fica:"),
        Entry::TradeOnly => Some("Com o aparelho de entrada fica:"),
        Entry::Both => Some("Com o aparelho + entrada em dinheiro fica:"),
    };
    if let Some(context) = context {
        text.push_str(&format!("{context}\n\n"));
    }

    if request.method == PaymentMethod::InstantTransfer {
        text.push_str(&format!(
            "💰com desconto no dinheiro ou PIX {}\n\n",
            format_brl(base)
        ));
    } else {
        let quote = calculate_installment(
            schedule,
            base,
            request.installments,
            request.method,
            request.brand,
        );
        text.push_str(&format!(
            "💳 Parcelado em {}x de {}\n\n",
            request.installments,
            format_brl(quote.installment_value)
        ));
    }

    text.push_str("1 ano de garantia da loja");

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: PaymentMethod) -> QuoteRequest {
        QuoteRequest {
            product: ProductDescriptor {
                name: "iPhone 15 Pro".to_string(),
                storage: Some("256GB".to_string()),
                condition: Some(Condition::New),
            },
            regular_price: Money::from_major(2_000),
            trade_in_credit: Money::ZERO,
            cash_down_payment: Money::ZERO,
            method,
            brand: None,
            installments: 12,
        }
    }

    #[test]
    fn test_headline_formats() {
        let product = ProductDescriptor {
            name: "iPhone 15".to_string(),
            storage: Some("128GB".to_string()),
            condition: Some(Condition::Used),
        };
        assert_eq!(product.headline(true), "iPhone 15 (128GB) Seminovo");
        assert_eq!(product.headline(false), "iPhone 15 128GB Seminovo");

        let nameless = ProductDescriptor::default();
        assert_eq!(nameless.headline(true), "Produto");
    }

    #[test]
    fn test_dual_message_instant_transfer_without_entry() {
        let schedule = RateSchedule::official();
        let text = dual_price_message(
            &schedule,
            &request(PaymentMethod::InstantTransfer),
            Money::from_major(1_800),
        );

        assert_eq!(
            text,
            "iPhone 15 Pro (256GB) Novo\n\n\
             🟨 Valor normal: 💵 À vista no PIX: R$ 2.000,00\n\n\
             🟦 Para membros do Clube: 💵 À vista no PIX: R$ 1.800,00\n\n\
             💰 Economia imediata: R$ 200,00 na compra só por ser membro"
        );
    }

    #[test]
    fn test_dual_message_card_with_cash_entry() {
        let schedule = RateSchedule::official();
        let mut req = request(PaymentMethod::PaymentLink);
        req.cash_down_payment = Money::from_major(500);
        req.installments = 1;

        let text = dual_price_message(&schedule, &req, Money::from_major(1_800));

        // bases drop to 1500 and 1300 before the 1x fee of 3.10%
        assert_eq!(
            text,
            "iPhone 15 Pro (256GB) Novo\n\n\
             Com a entrada de R$ 500,00 fica:\n\n\
             🟨 Valor normal: 💳 Parcelado em 1x de R$ 1.546,50\n\n\
             🟦 Para membros do Clube: 💳 Parcelado em 1x de R$ 1.340,30\n\n\
             💰 Economia imediata: R$ 200,00 na compra só por ser membro"
        );
    }

    #[test]
    fn test_dual_message_trade_in_context_lines() {
        let schedule = RateSchedule::official();
        let mut req = request(PaymentMethod::InstantTransfer);
        req.trade_in_credit = Money::from_major(600);

        let text = dual_price_message(&schedule, &req, Money::from_major(1_800));
        assert!(text.contains("Com o aparelho de entrada, o restante no PIX fica:"));

        req.cash_down_payment = Money::from_major(100);
        let text = dual_price_message(&schedule, &req, Money::from_major(1_800));
        assert!(text.contains("Com o aparelho de entrada + R$ 100,00, o restante no PIX fica:"));
    }

    #[test]
    fn test_single_message_instant_transfer() {
        let schedule = RateSchedule::official();
        let text = single_price_message(&schedule, &request(PaymentMethod::InstantTransfer));

        assert_eq!(
            text,
            "📱iPhone 15 Pro 256GB Novo\n\n\
             💰com desconto no dinheiro ou PIX R$ 2.000,00\n\n\
             1 ano de garantia da loja"
        );
    }

    #[test]
    fn test_single_message_card_with_both_entries() {
        let schedule = RateSchedule::official();
        let mut req = request(PaymentMethod::CardAcquirer);
        req.brand = Some(CardBrand::Visa);
        req.trade_in_credit = Money::from_major(800);
        req.cash_down_payment = Money::from_major(200);
        req.installments = 12;

        let text = single_price_message(&schedule, &req);

        // base 1000 at 10.22% over 12 installments
        assert_eq!(
            text,
            "📱iPhone 15 Pro 256GB Novo\n\n\
             Com o aparelho + entrada em dinheiro fica:\n\n\
             💳 Parcelado em 12x de R$ 91,85\n\n\
             1 ano de garantia da loja"
        );
    }
}
