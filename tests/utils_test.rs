use festcli::festival::FestivalConfig;
use festcli::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_time_range_display() {
    assert_eq!(TimeRange::Short.to_string(), "short_term");
    assert_eq!(TimeRange::Medium.to_string(), "medium_term");
    assert_eq!(TimeRange::Long.to_string(), "long_term");
}

#[test]
fn test_time_range_all_constant() {
    assert_eq!(TimeRange::ALL.len(), 3);
    assert!(TimeRange::ALL.contains(&TimeRange::Short));
    assert!(TimeRange::ALL.contains(&TimeRange::Medium));
    assert!(TimeRange::ALL.contains(&TimeRange::Long));
}

#[test]
fn test_parse_time_range_valid_inputs() {
    // Test short names
    assert_eq!(parse_time_range("short").unwrap(), TimeRange::Short);
    assert_eq!(parse_time_range("medium").unwrap(), TimeRange::Medium);
    assert_eq!(parse_time_range("long").unwrap(), TimeRange::Long);

    // Test API names
    assert_eq!(parse_time_range("short_term").unwrap(), TimeRange::Short);
    assert_eq!(parse_time_range("medium_term").unwrap(), TimeRange::Medium);
    assert_eq!(parse_time_range("long_term").unwrap(), TimeRange::Long);

    // Test with spaces, hyphens, and mixed case
    assert_eq!(parse_time_range(" short ").unwrap(), TimeRange::Short);
    assert_eq!(parse_time_range("short-term").unwrap(), TimeRange::Short);
    assert_eq!(parse_time_range("MEDIUM").unwrap(), TimeRange::Medium);
}

#[test]
fn test_parse_time_range_invalid_inputs() {
    // Test empty string
    let result = parse_time_range("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test whitespace only
    let result = parse_time_range("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test invalid value
    let result = parse_time_range("decade");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'decade'"));
}

#[test]
fn test_format_time_slot_headliner() {
    let config = FestivalConfig::default();

    // Headliners play the fixed headliner slot regardless of position
    assert_eq!(format_time_slot(&config, 0, 0, true), "9:30 PM");
    assert_eq!(format_time_slot(&config, 2, 4, true), "9:30 PM");
}

#[test]
fn test_format_time_slot_stage_starts() {
    let config = FestivalConfig::default();

    // First slot per stage follows the configured start times
    assert_eq!(format_time_slot(&config, 0, 0, false), "2:00 PM");
    assert_eq!(format_time_slot(&config, 1, 0, false), "3:30 PM");
    assert_eq!(format_time_slot(&config, 2, 0, false), "4:00 PM");
}

#[test]
fn test_format_time_slot_position_offsets() {
    let config = FestivalConfig::default();

    // Each position adds one 75-minute slot
    assert_eq!(format_time_slot(&config, 0, 1, false), "3:15 PM");
    assert_eq!(format_time_slot(&config, 0, 2, false), "4:30 PM");
    assert_eq!(format_time_slot(&config, 1, 1, false), "4:45 PM");
}

#[test]
fn test_format_time_slot_clamps_unknown_stage() {
    let config = FestivalConfig::default();

    // Stage indexes beyond the configured list use stage 0's start time
    assert_eq!(format_time_slot(&config, 7, 0, false), "2:00 PM");
}

#[test]
fn test_format_time_slot_wraps_past_midnight() {
    let config = FestivalConfig::default();

    // 2:00 PM + 8 * 75 minutes = 24:00 -> 12:00 AM
    assert_eq!(format_time_slot(&config, 0, 8, false), "12:00 AM");

    // 2:00 PM + 9 * 75 minutes = 25:15 -> 1:15 AM
    assert_eq!(format_time_slot(&config, 0, 9, false), "1:15 AM");
}

#[test]
fn test_format_time_slot_pads_minutes() {
    let config = FestivalConfig::default();

    // Minute component is always two digits
    let slot = format_time_slot(&config, 2, 0, false);
    assert_eq!(slot, "4:00 PM");
    assert!(slot.contains(":00"));
}
