use std::io::Write;

use crate::error::Result;

pub const NUMBERS_PER_LINE: usize = 10;

pub fn write_numbers<W: Write>(out: &mut W, numbers: &[i32]) -> Result<()> {
    for row in numbers.chunks(NUMBERS_PER_LINE) {
        let line = row
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Format `value` with two decimals, rounding ties away from zero on its
/// shortest decimal representation, so `0.125` and `1.005` round up.
pub fn two_decimals(value: f64) -> String {
    let shortest = format!("{}", value.abs());
    let (int_part, frac_part) = match shortest.find('.') {
        Some(dot) => (&shortest[..dot], &shortest[dot + 1..]),
        None => (shortest.as_str(), ""),
    };

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let mut frac = frac_part.bytes().chain(std::iter::repeat(b'0'));
    digits.push(frac.next().unwrap_or(b'0'));
    digits.push(frac.next().unwrap_or(b'0'));

    if frac.next().map_or(false, |d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!(
        "{}{}.{}",
        sign,
        String::from_utf8_lossy(&digits[..split]),
        String::from_utf8_lossy(&digits[split..])
    )
}
