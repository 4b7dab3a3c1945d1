//! Unit tests for JsError and ErrorKind

use core_types::{ErrorKind, JsError};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_copy_and_eq() {
        let kind1 = ErrorKind::TypeError;
        let kind2 = kind1;
        assert_eq!(kind1, kind2);
        assert_ne!(ErrorKind::TypeError, ErrorKind::RangeError);
    }

    #[test]
    fn test_error_kind_names() {
        let names: Vec<String> = [
            ErrorKind::SyntaxError,
            ErrorKind::TypeError,
            ErrorKind::ReferenceError,
            ErrorKind::RangeError,
            ErrorKind::EvalError,
            ErrorKind::URIError,
            ErrorKind::InternalError,
        ]
        .iter()
        .map(|k| k.to_string())
        .collect();
        assert_eq!(
            names,
            vec![
                "SyntaxError",
                "TypeError",
                "ReferenceError",
                "RangeError",
                "EvalError",
                "URIError",
                "InternalError"
            ]
        );
    }
}

#[cfg(test)]
mod js_error_tests {
    use super::*;

    #[test]
    fn test_type_error_constructor() {
        let error = JsError::type_error("not callable");
        assert_eq!(error.kind, ErrorKind::TypeError);
        assert_eq!(error.message, "not callable");
        assert!(error.is_type_error());
    }

    #[test]
    fn test_syntax_error_constructor() {
        let error = JsError::syntax_error("unexpected token");
        assert_eq!(error.kind, ErrorKind::SyntaxError);
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let error = JsError::new(ErrorKind::ReferenceError, "x is not defined");
        assert_eq!(format!("{}", error), "ReferenceError: x is not defined");
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&JsError::range_error("bad length"));
    }

    #[test]
    fn test_error_clone_eq() {
        let error = JsError::type_error("a");
        assert_eq!(error.clone(), error);
        assert_ne!(error, JsError::type_error("b"));
    }
}
