//! Currency and label formatting for Malaysian Ringgit amounts
//!
//! All amounts are whole ringgit (`u64`). Three renderings exist:
//!
//! | Function | 1500000 | Used by |
//! |---|---|---|
//! | [`format_currency`] | `RM 1,500,000` | slider readouts, total overlay, modal summary |
//! | [`format_currency_precise`] | `RM 1,500,000.00` | chart tooltip |
//! | [`format_axis_label`] | `RM 1.5M` | chart Y axis |

/// Currency prefix used by every formatter
pub const CURRENCY_PREFIX: &str = "RM";

/// Insert `,` thousands separators into a non-negative integer.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Full currency string with no fractional digits, e.g. `RM 300,000`.
pub fn format_currency(amount: u64) -> String {
    format!("{} {}", CURRENCY_PREFIX, group_thousands(amount))
}

/// Currency string with the currency's default two fractional digits,
/// e.g. `RM 60,000.00`.
pub fn format_currency_precise(amount: u64) -> String {
    format!("{}.00", format_currency(amount))
}

/// Abbreviated Y-axis label.
///
/// Values below 1,000 are shown in full, values below 1,000,000 as whole
/// thousands (`RM 60k`) and anything larger as millions with one decimal
/// (`RM 1.2M`). Rounding is half-up.
pub fn format_axis_label(value: u64) -> String {
    if value >= 1_000_000 {
        let tenths = (value + 50_000) / 100_000;
        format!("{} {}.{}M", CURRENCY_PREFIX, tenths / 10, tenths % 10)
    } else if value >= 1_000 {
        format!("{} {}k", CURRENCY_PREFIX, (value + 500) / 1_000)
    } else {
        format!("{} {}", CURRENCY_PREFIX, value)
    }
}

/// Duration readout for the years control, e.g. `5 Years`.
pub fn format_years(years: u32) -> String {
    if years == 1 {
        "1 Year".to_string()
    } else {
        format!("{} Years", years)
    }
}

/// X-axis tick label for a year index, e.g. `Year 3`.
pub fn format_year_tick(year_index: u32) -> String {
    format!("Year {}", year_index)
}

/// Tooltip label for a year index, e.g. `Duration: 3 years`.
pub fn format_duration_tooltip(year_index: u32) -> String {
    format!("Duration: {} years", year_index)
}
