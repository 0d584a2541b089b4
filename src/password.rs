//! Password strength heuristic and brute-force crack-time estimation.

/// Guess rate assumed for a modern computer.
const GUESSES_PER_SECOND: f64 = 10e9;

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

pub struct CrackTimes {
    pub regular: String,
    pub supercomputer: String,
    pub quantum: String,
}

/// Additive 0-100 score from length and character-class variety.
pub fn calculate_strength(password: &str) -> u8 {
    let mut score: u32 = 0;
    let length = password.chars().count();

    if length >= 8 {
        score += 20;
    }
    if length >= 12 {
        score += 20;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        score += 20;
    }
    if length >= 16 {
        score += 10;
    }

    score.min(100) as u8
}

pub fn strength_label(strength: u8) -> &'static str {
    if strength >= 80 {
        "Very Strong"
    } else if strength >= 60 {
        "Strong"
    } else if strength >= 40 {
        "Medium"
    } else if strength >= 20 {
        "Weak"
    } else {
        "Very Weak"
    }
}

/// Brute-force search time over the password's character-set size, at three
/// attacker speeds (supercomputer ×1000, quantum ×1e6).
pub fn estimate_crack_times(password: &str) -> CrackTimes {
    let mut charset_size: u32 = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        charset_size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        charset_size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        charset_size += 10;
    }
    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        charset_size += 32;
    }

    let length = password.chars().count() as i32;
    let possibilities = (charset_size as f64).powi(length);
    let seconds = possibilities / GUESSES_PER_SECOND;

    CrackTimes {
        regular: format_time(seconds),
        supercomputer: format_time(seconds / 1e3),
        quantum: format_time(seconds / 1e6),
    }
}

pub fn format_time(seconds: f64) -> String {
    if seconds < 1.0 {
        "instantly".to_string()
    } else if seconds < 60.0 {
        format!("{} seconds", seconds.round())
    } else if seconds < 3_600.0 {
        format!("{} minutes", (seconds / 60.0).round())
    } else if seconds < 86_400.0 {
        format!("{} hours", (seconds / 3_600.0).round())
    } else if seconds < 31_536_000.0 {
        format!("{} days", (seconds / 86_400.0).round())
    } else if seconds < 315_360_000.0 {
        format!("{} years", (seconds / 31_536_000.0).round())
    } else {
        "millions of years".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_scores_zero() {
        assert_eq!(calculate_strength(""), 0);
        assert_eq!(strength_label(0), "Very Weak");
    }

    #[test]
    fn test_lowercase_only_short() {
        // Only the lowercase class contributes.
        assert_eq!(calculate_strength("abc"), 10);
    }

    #[test]
    fn test_mixed_class_scoring() {
        // 8+ chars (20) + lower (10) + upper (10) + digit (10) = 50
        assert_eq!(calculate_strength("Abcdef12"), 50);
    }

    #[test]
    fn test_long_varied_password_caps_at_100() {
        let strength = calculate_strength("Abcdefgh1234!@#$xyz");
        assert_eq!(strength, 100);
        assert_eq!(strength_label(strength), "Very Strong");
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(strength_label(19), "Very Weak");
        assert_eq!(strength_label(20), "Weak");
        assert_eq!(strength_label(40), "Medium");
        assert_eq!(strength_label(60), "Strong");
        assert_eq!(strength_label(80), "Very Strong");
    }

    #[test]
    fn test_format_time_bands() {
        assert_eq!(format_time(0.5), "instantly");
        assert_eq!(format_time(30.0), "30 seconds");
        assert_eq!(format_time(120.0), "2 minutes");
        assert_eq!(format_time(7_200.0), "2 hours");
        assert_eq!(format_time(172_800.0), "2 days");
        assert_eq!(format_time(63_072_000.0), "2 years");
        assert_eq!(format_time(1e12), "millions of years");
    }

    #[test]
    fn test_short_password_cracks_instantly() {
        let times = estimate_crack_times("ab");
        assert_eq!(times.regular, "instantly");
    }

    #[test]
    fn test_faster_attackers_never_take_longer() {
        // A long varied password takes the slow attacker the longest.
        let times = estimate_crack_times("Correct-Horse-Battery-1!");
        assert_eq!(times.regular, "millions of years");
    }
}
