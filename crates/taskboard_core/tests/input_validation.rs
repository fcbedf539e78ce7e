use taskboard_core::{validate_item_input, ValidationBounds, ValidationError};

fn bounds() -> ValidationBounds {
    ValidationBounds::default()
}

#[test]
fn default_bounds_match_board_rules() {
    let bounds = bounds();
    assert_eq!(bounds.title_min_len, 2);
    assert_eq!(bounds.description_min_len, 5);
    assert_eq!(bounds.description_max_len, 20);
    assert_eq!(bounds.people_min, 1);
    assert_eq!(bounds.people_max, 5);
}

#[test]
fn boundary_values_are_accepted() {
    let bounds = bounds();
    assert!(validate_item_input("ab", "abcde", 1, &bounds).is_ok());
    assert!(validate_item_input("ab", "abcdefghijklmnopqrst", 5, &bounds).is_ok());
}

#[test]
fn input_is_trimmed_before_checks() {
    let input = validate_item_input("  Build API  ", "  REST endpoints ", 3, &bounds()).unwrap();
    assert_eq!(input.title, "Build API");
    assert_eq!(input.description, "REST endpoints");
    assert_eq!(input.people_count, 3);

    let err = validate_item_input(" a ", "abcde", 1, &bounds()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TooShort {
            field: "title",
            min: 2,
            actual: 1
        }
    );
}

#[test]
fn empty_title_is_required_error() {
    let err = validate_item_input("   ", "abcde", 1, &bounds()).unwrap_err();
    assert_eq!(err, ValidationError::Required { field: "title" });
}

#[test]
fn description_outside_length_window_is_rejected() {
    let short = validate_item_input("ab", "abcd", 1, &bounds()).unwrap_err();
    assert!(matches!(short, ValidationError::TooShort { field: "description", .. }));

    let long = validate_item_input("ab", "Implement REST endpoints", 1, &bounds()).unwrap_err();
    assert_eq!(
        long,
        ValidationError::TooLong {
            field: "description",
            max: 20,
            actual: 24
        }
    );
}

#[test]
fn people_outside_range_is_rejected() {
    for people in [0, 6, -1] {
        let err = validate_item_input("ab", "abcde", people, &bounds()).unwrap_err();
        assert_eq!(err.field(), "people");
    }
}

#[test]
fn custom_bounds_are_honored() {
    let bounds = ValidationBounds {
        people_max: 10,
        ..ValidationBounds::default()
    };
    assert!(validate_item_input("ab", "abcde", 10, &bounds).is_ok());
}
