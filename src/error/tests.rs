use super::*;

#[test]
fn test_display_invalid_key() {
    let err = Error::InvalidKey {
        context: "StateTable::from_key",
    };
    assert_eq!(
        format!("{}", err),
        "Invalid key material in StateTable::from_key: length must be at least 1"
    );
}

#[test]
fn test_validation_functions() {
    assert!(validate::non_empty("test", 1).is_ok());
    assert!(validate::non_empty("test", 256).is_ok());

    let err = validate::non_empty("test", 0).unwrap_err();
    match err {
        Error::InvalidKey { context } => {
            assert_eq!(context, "test");
        }
    }
}

#[test]
fn test_error_equality() {
    assert_eq!(
        Error::InvalidKey { context: "encrypt" },
        Error::InvalidKey { context: "encrypt" }
    );
    assert_ne!(
        Error::InvalidKey { context: "encrypt" },
        Error::InvalidKey { context: "decrypt" }
    );
}

#[test]
fn test_error_clone() {
    let err = Error::InvalidKey { context: "decrypt" };
    let cloned = err.clone();
    assert_eq!(err, cloned);
}
