/// Format a float as a euro amount, Greek style: 1.234,56 €
pub fn euro(val: f64) -> String {
    let negative = val < 0.0 && format!("{:.2}", val.abs()) != "0.00";
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-{grouped},{dec_part} \u{20ac}")
    } else {
        format!("{grouped},{dec_part} \u{20ac}")
    }
}

/// Plain two-decimal number for CSV cells, never "-0.00".
pub fn decimal(val: f64) -> String {
    let s = format!("{val:.2}");
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

pub fn percent(val: f64) -> String {
    format!("{val:.1}%")
}
