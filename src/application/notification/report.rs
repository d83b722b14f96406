//! Plain-text trade reports.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::domain::{EntryTrade, ExitTrade, Spread, REPORTING_CURRENCY_SYMBOL as USD};

/// Subject line for entry reports.
pub const SUBJECT_NEW_ENTRY: &str = "New Entry Trade";

/// Subject line for exit reports.
pub const SUBJECT_NEW_EXIT: &str = "New Exit Trade";

/// Printed in place of an amount that does not fit in a decimal.
const OVERFLOW: &str = "overflow";

/// Render the report for opening a long/short pair.
///
/// Slippage is measured against the ticker at send time: the long leg pays
/// above the ask, the short leg sells below the bid.
#[must_use]
pub fn entry_report(spread: &Spread, trade: &EntryTrade) -> String {
    let pair = spread.currency_pair();
    let long_slip = trade
        .long_limit_price
        .checked_sub(spread.long_ticker().ask());
    let short_slip = spread
        .short_ticker()
        .bid()
        .checked_sub(trade.short_limit_price);

    let mut body = String::from("***** ENTRY *****\n");
    let _ = writeln!(body, "Entry spread: {}", spread.spread_in());
    let _ = writeln!(body, "Exit spread target: {}", trade.exit_target);
    let _ = writeln!(
        body,
        "Long entry: {} {} {} @ {} ({} slip) = {}{}",
        spread.long_exchange(),
        pair,
        trade.long_volume,
        trade.long_limit_price,
        amount(long_slip),
        USD,
        amount(trade.long_volume.checked_mul(trade.long_limit_price))
    );
    let _ = writeln!(
        body,
        "Short entry: {} {} {} @ {} ({} slip) = {}{}",
        spread.short_exchange(),
        pair,
        trade.short_volume,
        trade.short_limit_price,
        amount(short_slip),
        USD,
        amount(trade.short_volume.checked_mul(trade.short_limit_price))
    );
    body
}

/// Render the report for closing a long/short pair, including profit.
///
/// Close notional is valued at the ticker (long bid, short ask) rather than
/// the limit price. Lines end right after the notional.
#[must_use]
pub fn exit_report(spread: &Spread, trade: &ExitTrade) -> String {
    let pair = spread.currency_pair();
    let long_bid = spread.long_ticker().bid();
    let short_ask = spread.short_ticker().ask();

    let mut body = String::from("***** EXIT *****\n");
    let _ = writeln!(
        body,
        "Long close: {} {} {} @ {} ({} slip) = {}{}",
        spread.long_exchange(),
        pair,
        trade.long_volume,
        trade.long_limit_price,
        amount(trade.long_limit_price.checked_sub(long_bid)),
        USD,
        amount(trade.long_volume.checked_mul(long_bid))
    );
    let _ = writeln!(
        body,
        "Short close: {} {} {} @ {} ({} slip) = {}{}",
        spread.short_exchange(),
        pair,
        trade.short_volume,
        trade.short_limit_price,
        amount(short_ask.checked_sub(trade.short_limit_price)),
        USD,
        amount(trade.short_volume.checked_mul(short_ask))
    );
    let _ = writeln!(
        body,
        "Combined account balances on entry: {}{}",
        USD, trade.entry_balance
    );
    let _ = writeln!(
        body,
        "Profit calculation: {}{} - {}{} = {}{}",
        USD,
        trade.updated_balance,
        USD,
        trade.entry_balance,
        USD,
        amount(trade.profit())
    );
    body
}

/// Plain-notation amount, or `overflow` when the computation did not fit.
fn amount(value: Option<Decimal>) -> String {
    value.map_or_else(|| OVERFLOW.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurrencyPair, ExchangeId, Ticker};
    use rust_decimal_macros::dec;

    fn spread() -> Spread {
        Spread::new(
            CurrencyPair::new("BTC", "USD"),
            ExchangeId::new("CoinDynasty"),
            ExchangeId::new("CoinSnake"),
            Ticker::new(dec!(99.00), dec!(100.00)),
            Ticker::new(dec!(102.00), dec!(103.00)),
        )
        .unwrap()
    }

    #[test]
    fn entry_report_lines() {
        let trade = EntryTrade {
            exit_target: dec!(0.005),
            long_volume: dec!(0.50),
            long_limit_price: dec!(100.10),
            short_volume: dec!(0.50),
            short_limit_price: dec!(101.90),
        };

        let report = entry_report(&spread(), &trade);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "***** ENTRY *****");
        assert!(lines[1].starts_with("Entry spread: 0.02"));
        assert_eq!(lines[2], "Exit spread target: 0.005");
        assert_eq!(
            lines[3],
            "Long entry: CoinDynasty BTC/USD 0.50 @ 100.10 (0.10 slip) = $50.0500"
        );
        assert_eq!(
            lines[4],
            "Short entry: CoinSnake BTC/USD 0.50 @ 101.90 (0.10 slip) = $50.9500"
        );
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn exit_report_includes_profit() {
        let trade = ExitTrade {
            long_volume: dec!(0.50),
            long_limit_price: dec!(98.90),
            short_volume: dec!(0.50),
            short_limit_price: dec!(103.10),
            entry_balance: dec!(1000.00),
            updated_balance: dec!(1003.25),
        };

        let report = exit_report(&spread(), &trade);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "***** EXIT *****");
        assert_eq!(
            lines[1],
            "Long close: CoinDynasty BTC/USD 0.50 @ 98.90 (-0.10 slip) = $49.5000"
        );
        assert_eq!(
            lines[2],
            "Short close: CoinSnake BTC/USD 0.50 @ 103.10 (-0.10 slip) = $51.5000"
        );
        assert_eq!(lines[3], "Combined account balances on entry: $1000.00");
        assert_eq!(
            lines[4],
            "Profit calculation: $1003.25 - $1000.00 = $3.25"
        );
    }

    #[test]
    fn close_lines_end_at_notional() {
        let report = exit_report(&spread(), &crate::testkit::domain::exit_trade());

        // No trailing whitespace before the newline on any line.
        assert!(report.lines().all(|line| line == line.trim_end()));
        assert!(report.contains("= $49.5000\nShort close:"));
        assert!(report.contains("= $51.5000\nCombined account"));
    }

    #[test]
    fn overflowing_amounts_render_without_panicking() {
        let trade = EntryTrade {
            exit_target: dec!(0.005),
            long_volume: Decimal::MAX,
            long_limit_price: Decimal::MAX,
            short_volume: dec!(0.50),
            short_limit_price: dec!(101.90),
        };

        let report = entry_report(&spread(), &trade);
        let lines: Vec<&str> = report.lines().collect();

        assert!(lines[3].ends_with("= $overflow"));
        assert!(lines[4].ends_with("= $50.9500"));
    }

    #[test]
    fn overflowing_profit_renders_without_panicking() {
        let trade = ExitTrade {
            entry_balance: Decimal::MIN,
            updated_balance: Decimal::MAX,
            ..crate::testkit::domain::exit_trade()
        };

        let report = exit_report(&spread(), &trade);

        assert!(report.ends_with("= $overflow\n"));
    }
}
