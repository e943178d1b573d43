/// quick quote - minimal example to get started
use installment_pricing_rs::{
    adjusted_base, calculate_installment, format_brl, parse_locale_number, CardBrand,
    PaymentMethod, RateSchedule,
};

fn main() {
    let schedule = RateSchedule::official();

    // sticker price typed by a sales rep, minus a trade-in and some cash down
    let listed = parse_locale_number("7.999,00");
    let trade_in = parse_locale_number("1.500,00");
    let cash_down = parse_locale_number("499,00");

    let base = adjusted_base(listed, trade_in, cash_down);
    println!("financed amount: {}", format_brl(base));

    // 12x on a Visa card through the acquirer
    let quote = calculate_installment(
        &schedule,
        base,
        12,
        PaymentMethod::CardAcquirer,
        Some(CardBrand::Visa),
    );

    println!("fee rate: {}", quote.rate);
    println!("total with fees: {}", format_brl(quote.final_value));
    println!("12x of {}", format_brl(quote.installment_value));

    // instant transfer is always a single fee-free payment
    let pix = calculate_installment(&schedule, base, 12, PaymentMethod::InstantTransfer, None);
    println!("or one instant transfer of {}", format_brl(pix.final_value));
}
