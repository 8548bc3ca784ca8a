//! Console output helpers for CLI commands

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a win/draw/loss summary for two named players
pub fn print_match_summary(
    name_a: &str,
    name_b: &str,
    result: &crate::pipeline::TrainingResult,
) {
    print_kv("Games", &format_number(result.total_games));
    print_kv(
        name_a,
        &format!(
            "{} wins ({:.1}%)",
            format_number(result.wins_a),
            result.win_rate_a * 100.0
        ),
    );
    print_kv(
        name_b,
        &format!(
            "{} wins ({:.1}%)",
            format_number(result.wins_b),
            result.win_rate_b * 100.0
        ),
    );
    print_kv(
        "Draws",
        &format!(
            "{} ({:.1}%)",
            format_number(result.draws),
            result.draw_rate * 100.0
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(50000), "50,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
