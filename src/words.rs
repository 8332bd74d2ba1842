//! Number spell-out for the result sentence ("at least three sevens").

/// Turns an integer into words. Returning `None` leaves the caller's
/// previous words in place.
pub trait NumberWords {
    fn spell(&self, n: i64) -> Option<String>;
}

/// English cardinal numbers: "zero", "twenty-one", "minus five",
/// "one hundred four", "two million three".
#[derive(Copy, Clone, Debug, Default)]
pub struct EnglishWords;

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// u64::MAX is ~1.8e19, so quintillion is the largest group needed.
const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

fn below_thousand(n: u64, out: &mut Vec<String>) {
    debug_assert!(n < 1000);
    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds > 0 {
        out.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    if rest == 0 {
        return;
    }
    if rest < 20 {
        out.push(ONES[rest as usize].to_string());
    } else if rest % 10 == 0 {
        out.push(TENS[(rest / 10) as usize].to_string());
    } else {
        out.push(format!("{}-{}", TENS[(rest / 10) as usize], ONES[(rest % 10) as usize]));
    }
}

impl NumberWords for EnglishWords {
    fn spell(&self, n: i64) -> Option<String> {
        if n == 0 {
            return Some(ONES[0].to_string());
        }
        let mut parts = Vec::new();
        if n < 0 {
            parts.push("minus".to_string());
        }
        let mut rest = n.unsigned_abs();
        for &(scale, name) in &SCALES {
            let group = rest / scale;
            if group > 0 {
                below_thousand(group, &mut parts);
                parts.push(name.to_string());
                rest %= scale;
            }
        }
        below_thousand(rest, &mut parts);
        Some(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(n: i64) -> String {
        EnglishWords.spell(n).unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(spell(0), "zero");
        assert_eq!(spell(7), "seven");
        assert_eq!(spell(13), "thirteen");
        assert_eq!(spell(40), "forty");
        assert_eq!(spell(21), "twenty-one");
        assert_eq!(spell(99), "ninety-nine");
    }

    #[test]
    fn hundreds_and_groups() {
        assert_eq!(spell(100), "one hundred");
        assert_eq!(spell(104), "one hundred four");
        assert_eq!(spell(1_000), "one thousand");
        assert_eq!(spell(2_000_003), "two million three");
        assert_eq!(spell(12_345), "twelve thousand three hundred forty-five");
    }

    #[test]
    fn negatives() {
        assert_eq!(spell(-5), "minus five");
        assert!(spell(i64::MIN).starts_with("minus nine quintillion"));
    }
}
