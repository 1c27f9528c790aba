//! Luhn (mod 10) checksum.

/// Check digit for `partial`, the number without its final digit.
///
/// Digits are doubled starting from the rightmost digit of `partial`, i.e. the
/// one adjacent to where the check digit goes. An empty partial yields 0.
pub fn check_digit(partial: &[u8]) -> u8 {
    let len = partial.len();
    let mut sum: u32 = 0;

    for (i, &digit) in partial.iter().enumerate() {
        let mut value = u32::from(digit);
        if (len - i) % 2 == 1 {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
    }

    ((sum * 9) % 10) as u8
}

/// Check digit for a partial number given as ASCII digits.
/// Returns `None` if `partial` contains anything other than 0-9.
pub fn check_digit_str(partial: &str) -> Option<u8> {
    let digits = to_digits(partial)?;
    Some(check_digit(&digits))
}

/// True if `number` is all digits, non-empty, and passes the Luhn check.
pub fn is_valid(number: &str) -> bool {
    let Some(digits) = to_digits(number) else {
        return false;
    };
    if digits.is_empty() {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            let value = u32::from(digit);
            if i % 2 == 1 {
                let doubled = value * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                value
            }
        })
        .sum();

    sum % 10 == 0
}

fn to_digits(s: &str) -> Option<Vec<u8>> {
    s.bytes()
        .map(|b| if b.is_ascii_digit() { Some(b - b'0') } else { None })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_numbers() {
        assert!(is_valid("4539148803436467"));
        assert!(is_valid("378282246310005"));
        assert!(is_valid("6011111111111117"));
        assert!(is_valid("5555555555554444"));
        assert!(is_valid("79927398713"));
    }

    #[test]
    fn test_known_invalid_numbers() {
        assert!(!is_valid("4539148803436468"));
        assert!(!is_valid("79927398710"));
        assert!(!is_valid(""));
        assert!(!is_valid("4539-1488-0343-6467"));
    }

    #[test]
    fn test_check_digit_pins_doubling_parity() {
        // Odd and even partial lengths exercise both parities.
        assert_eq!(check_digit_str("453914880343646"), Some(7));
        assert_eq!(check_digit_str("37828224631000"), Some(5));
        assert_eq!(check_digit_str("601111111111111"), Some(7));
        assert_eq!(check_digit_str("555555555555444"), Some(4));
        assert_eq!(check_digit_str("7992739871"), Some(3));
    }

    #[test]
    fn test_check_digit_of_empty_partial_is_zero() {
        assert_eq!(check_digit(&[]), 0);
        assert!(is_valid("0"));
    }

    #[test]
    fn test_check_digit_rejects_non_digits() {
        assert_eq!(check_digit_str("45x9"), None);
    }

    #[test]
    fn test_appended_check_digit_always_validates() {
        for partial in ["4", "51", "3400000000000", "601100000000000", "999999999"] {
            let digit = check_digit_str(partial).unwrap();
            let full = format!("{}{}", partial, digit);
            assert!(is_valid(&full), "{} should be valid", full);
        }
    }
}
