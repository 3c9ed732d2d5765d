use super::{
    init_logging,
    test_numbers::{
        CH_FIXED_LINE, GB_MOBILE, INVALID_INPUTS, SEEDED_REGION_NUMBERS, UNASSIGNED_US_AREA_CODE,
        US_FIXED_OR_MOBILE,
    },
};
use crate::{validate, LineType, PhoneValidationResult, PHONE_VALIDATOR};

#[test]
fn invalid_inputs_echo_raw_value() {
    init_logging();

    for raw in INVALID_INPUTS {
        let result = validate(raw);
        assert!(!result.is_valid, "{raw:?}");
        assert_eq!(result.formatted_international, raw);
        assert_eq!(result.formatted_national, raw);
        assert_eq!(result.country_code, "");
        assert_eq!(result.country_name, "");
        assert_eq!(result.line_type, LineType::Unknown);
        assert_eq!(result, PhoneValidationResult::invalid(raw));
    }
}

#[test]
fn us_number() {
    init_logging();

    let result = validate(US_FIXED_OR_MOBILE);
    assert!(result.is_valid);
    assert_eq!(result.country_code, "US");
    assert_eq!(result.country_name, "United States");
    assert!(result.formatted_international.starts_with("+1"));
    assert_eq!(result.formatted_international, "+1 650 253 0000");
    assert!(result.formatted_national.contains("253-0000"));
    // US fixed-line and mobile ranges overlap.
    assert_eq!(result.line_type, LineType::Unknown);
}

#[test]
fn unassigned_us_area_code_is_invalid() {
    init_logging();

    let result = validate(UNASSIGNED_US_AREA_CODE);
    assert!(!result.is_valid);
    assert_eq!(result, PhoneValidationResult::invalid(UNASSIGNED_US_AREA_CODE));
}

#[test]
fn international_format_uses_single_spaces() {
    init_logging();

    for (number, expected) in [
        (US_FIXED_OR_MOBILE, "+1 650 253 0000"),
        ("+16502530000", "+1 650 253 0000"),
        ("+81 90 1234 5678", "+81 90 1234 5678"),
        ("+819012345678", "+81 90 1234 5678"),
        ("+55 11 96123 4567", "+55 11 96123 4567"),
        ("+5511961234567", "+55 11 96123 4567"),
    ] {
        let international = validate(number).formatted_international;
        assert_eq!(international, expected, "{number}");
    }

    for (_, number) in SEEDED_REGION_NUMBERS {
        let international = validate(number).formatted_international;
        assert!(!international.contains('-'), "{international}");
        assert!(!international.contains("  "), "{international}");
    }
}

#[test]
fn gb_mobile() {
    init_logging();

    let result = validate(GB_MOBILE);
    assert!(result.is_valid);
    assert_eq!(result.country_code, "GB");
    assert_eq!(result.country_name, "United Kingdom");
    assert_eq!(result.formatted_international, "+44 7400 123456");
    assert!(result.formatted_national.ends_with("7400 123456"));
    assert_eq!(result.line_type, LineType::Mobile);
}

#[test]
fn ch_fixed_line() {
    init_logging();

    let result = validate(CH_FIXED_LINE);
    assert!(result.is_valid);
    assert_eq!(result.country_code, "CH");
    assert_eq!(result.country_name, "Switzerland");
    assert_eq!(result.formatted_international, "+41 44 668 18 00");
    assert!(result.formatted_national.ends_with("44 668 18 00"));
    assert_eq!(result.line_type, LineType::Landline);
}

#[test]
fn seeded_regions_validate() {
    init_logging();

    for (region, number) in SEEDED_REGION_NUMBERS {
        let result = validate(number);
        assert!(result.is_valid, "{number}");
        assert_eq!(result.country_code, region, "{number}");
        assert!(!result.country_name.is_empty());
        assert!(result.formatted_international.starts_with('+'));
        assert!(!result.formatted_national.starts_with('+'));
    }
}

#[test]
fn mobile_examples_are_mobile() {
    for number in ["+61 412 345 678", "+33 6 12 34 56 78", "+81 90 1234 5678"] {
        assert_eq!(validate(number).line_type, LineType::Mobile, "{number}");
    }
}

#[test]
fn validation_is_deterministic() {
    for (_, number) in SEEDED_REGION_NUMBERS {
        assert_eq!(validate(number), validate(number));
    }
    assert_eq!(validate("not a phone number"), validate("not a phone number"));
}

#[test]
fn surrounding_whitespace_and_punctuation() {
    let padded = validate("  +44 7400-123456 ");
    assert!(padded.is_valid);
    assert_eq!(padded.formatted_international, "+44 7400 123456");

    let compact = validate("+447400123456");
    assert_eq!(compact, validate(GB_MOBILE));
}

#[test]
fn full_width_digits() {
    let result = validate("+４４ ７４００ １２３４５６");
    assert!(result.is_valid);
    assert_eq!(result.formatted_international, "+44 7400 123456");
}

#[test]
fn viability_pre_check() {
    assert!(PHONE_VALIDATOR.is_viable_phone_number("+1 650 253 0000"));
    assert!(PHONE_VALIDATOR.is_viable_phone_number("1-800-FLOWERS"));
    assert!(PHONE_VALIDATOR.is_viable_phone_number("+44\u{2013}2087654321"));
    assert!(!PHONE_VALIDATOR.is_viable_phone_number("not a phone number"));
    assert!(!PHONE_VALIDATOR.is_viable_phone_number("12"));
    assert!(!PHONE_VALIDATOR.is_viable_phone_number(""));
}

#[test]
fn result_json_shape() {
    let json = serde_json::to_value(validate(GB_MOBILE)).unwrap();
    assert_eq!(json["isValid"], true);
    assert_eq!(json["formattedInternational"], "+44 7400 123456");
    assert!(json["formattedNational"].is_string());
    assert_eq!(json["countryCode"], "GB");
    assert_eq!(json["countryName"], "United Kingdom");
    assert_eq!(json["lineType"], "mobile");
    assert_eq!(json.as_object().unwrap().len(), 6);
}
