/// full installment table plus the member/regular comparison
use installment_pricing_rs::{
    comparison_table, format_brl, installment_table, member_savings, Money, PaymentMethod,
    RateSchedule,
};

fn main() {
    // RUST_LOG=warn surfaces rate-table lookup misses
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let schedule = RateSchedule::official();
    let base = Money::from_major(2_000);

    println!("payment link, base {}", format_brl(base));
    println!("{:<10} {:>8} {:>14} {:>14}", "parcelas", "taxa", "total", "parcela");
    for row in installment_table(&schedule, base, PaymentMethod::PaymentLink, None) {
        println!(
            "{:<10} {:>8} {:>14} {:>14}",
            format!("{}x", row.installments),
            row.rate.to_string(),
            format_brl(row.final_value),
            format_brl(row.installment_value),
        );
    }

    let regular_price = Money::from_major(2_000);
    let member_price = Money::from_major(1_800);
    let savings = member_savings(regular_price, member_price);

    println!();
    println!("member comparison, savings {}", format_brl(savings));
    println!("{:<10} {:>14} {:>14}", "parcelas", "normal", "clube");
    let rows = comparison_table(
        &schedule,
        member_price,
        regular_price,
        PaymentMethod::PaymentLink,
        None,
    );
    for row in rows {
        println!(
            "{:<10} {:>14} {:>14}",
            format!("{}x", row.installments),
            format_brl(row.regular_installment_value),
            format_brl(row.member_installment_value),
        );
    }
}
