use phonetic_password::{
    elements::ELEMENTS, phonetic_password, SPECIAL_CHARACTERS,
};
use secrecy::ExposeSecret;

#[test]
fn test_phonetic_password() {
    for length in [5, 8, 12, 20, 32] {
        for _ in 0..100 {
            let password = phonetic_password(length).unwrap();
            let password = password.expose_secret();
            println!("{}", password);

            assert_eq!(password.len(), length);

            // Check for exactly one digit
            assert_eq!(
                password.chars().filter(|c| c.is_ascii_digit()).count(),
                1
            );

            // Check for exactly one uppercase letter
            assert_eq!(
                password.chars().filter(|c| c.is_ascii_uppercase()).count(),
                1
            );

            // Check for exactly one special character
            assert_eq!(
                password
                    .chars()
                    .filter(|c| SPECIAL_CHARACTERS.contains(c))
                    .count(),
                1
            );

            // Everything else is a lowercase element letter
            assert!(password.chars().all(|c| c.is_ascii_lowercase()
                || c.is_ascii_uppercase()
                || c.is_ascii_digit()
                || SPECIAL_CHARACTERS.contains(&c)));

            // The final table entry is never drawn so no z appears
            assert!(!password.contains(['z', 'Z']));

            check_segments(password);
        }
    }
}

/// Check each pronounceable segment between injected characters.
fn check_segments(password: &str) {
    let mut segments: Vec<(String, bool)> = Vec::new();
    let mut current = String::new();
    for c in password.chars() {
        if c.is_ascii_alphabetic() {
            current.push(c.to_ascii_lowercase());
        } else {
            // Closed by an injection, may have been cut short
            segments.push((std::mem::take(&mut current), true));
        }
    }
    segments.push((current, false));

    for (segment, truncated) in segments {
        assert!(!segment.starts_with("gh"));
        assert!(!segment.starts_with("ng"));
        assert!(
            decomposes(&segment, truncated),
            "segment {} does not decompose into elements",
            segment
        );
    }
}

/// Determine if a segment splits into element texts, allowing a
/// dangling first letter of a two letter element when the segment
/// was cut short by an injection.
fn decomposes(segment: &str, truncated: bool) -> bool {
    let mut reachable = vec![false; segment.len() + 1];
    reachable[0] = true;
    for position in 0..segment.len() {
        if !reachable[position] {
            continue;
        }
        for element in ELEMENTS {
            if segment[position..].starts_with(element.text()) {
                reachable[position + element.text().len()] = true;
            }
        }
    }
    if reachable[segment.len()] {
        return true;
    }
    truncated
        && !segment.is_empty()
        && reachable[segment.len() - 1]
        && ELEMENTS.iter().any(|element| {
            element.text().len() == 2
                && element.text().starts_with(&segment[segment.len() - 1..])
        })
}
