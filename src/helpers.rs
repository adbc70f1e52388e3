use indicatif::{ProgressBar, ProgressStyle};

pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let progress_bar = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
    progress_bar.set_style(style);
    progress_bar.set_message(message.to_owned());
    progress_bar
}

/// 60500 -> "60,500"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Uppercases the first character of every space-separated word.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(3600), "3,600");
        assert_eq!(format_thousands(60500), "60,500");
        assert_eq!(format_thousands(187_700), "187,700");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn title_casing() {
        assert_eq!(title_case("4 month sleep regression"), "4 Month Sleep Regression");
        assert_eq!(title_case("newborn won't sleep"), "Newborn Won't Sleep");
        assert_eq!(title_case("BABY nap"), "Baby Nap");
    }
}
