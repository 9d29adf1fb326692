//! # Value Module Unit Tests / Value 模块单元测试
//!
//! Tests for kinds, member lookup, calling and strict equality.
//!
//! 测试类型、成员查找、调用和严格相等。

use subject_runner::core::value::{Kind, Value};

#[cfg(test)]
mod kind_tests {
    use super::*;

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(Value::Undefined.kind(), Kind::Undefined);
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::from(true).kind(), Kind::Boolean);
        assert_eq!(Value::from(1.5).kind(), Kind::Number);
        assert_eq!(Value::from("bar").kind(), Kind::String);
        assert_eq!(Value::array([Value::Null]).kind(), Kind::Array);
        assert_eq!(Value::object([("a", Value::Null)]).kind(), Kind::Object);
        assert_eq!(Value::function("f", || Value::Null).kind(), Kind::Function);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Object.to_string(), "object");
        assert_eq!(Kind::Function.to_string(), "function");
    }
}

#[cfg(test)]
mod access_tests {
    use super::*;

    #[test]
    fn test_get_member() {
        let obj = Value::object([("foo", Value::from(3))]);
        assert!(obj.get("foo").strict_eq(&Value::from(3)));
    }

    #[test]
    fn test_get_missing_member_is_undefined() {
        let obj = Value::object([("foo", Value::from(3))]);
        assert_eq!(obj.get("bar").kind(), Kind::Undefined);
    }

    #[test]
    fn test_get_on_non_object_is_undefined() {
        assert_eq!(Value::Undefined.get("foo").kind(), Kind::Undefined);
        assert_eq!(Value::from("text").get("foo").kind(), Kind::Undefined);
    }

    #[test]
    fn test_call_function() {
        let f = Value::function("foo", || Value::from("bar"));
        let result = f.call(".foo").unwrap();
        assert!(result.strict_eq(&Value::from("bar")));
    }

    #[test]
    fn test_call_non_function_fails_with_label() {
        let err = Value::Undefined.call(".foo").unwrap_err();
        let message = err.to_string();
        assert!(message.contains(".foo is not a function"));
        assert!(message.contains("undefined"));
    }
}

#[cfg(test)]
mod equality_tests {
    use super::*;

    #[test]
    fn test_primitives_compare_by_value() {
        assert!(Value::from("bar").strict_eq(&Value::from("bar")));
        assert!(!Value::from("bar").strict_eq(&Value::from("Bar")));
        assert!(Value::from(2).strict_eq(&Value::from(2.0)));
        assert!(Value::Null.strict_eq(&Value::Null));
        assert!(Value::Undefined.strict_eq(&Value::Undefined));
    }

    #[test]
    fn test_no_cross_kind_equality() {
        assert!(!Value::from("1").strict_eq(&Value::from(1)));
        assert!(!Value::Null.strict_eq(&Value::Undefined));
        assert!(!Value::from(false).strict_eq(&Value::from(0)));
    }

    #[test]
    fn test_nan_is_never_equal() {
        let nan = Value::from(f64::NAN);
        assert!(!nan.strict_eq(&nan));
    }

    #[test]
    fn test_composites_compare_by_identity() {
        let a = Value::object([("foo", Value::Null)]);
        let same = a.clone();
        let lookalike = Value::object([("foo", Value::Null)]);
        assert!(a.strict_eq(&same));
        assert!(!a.strict_eq(&lookalike));

        let f = Value::function("f", || Value::Null);
        assert!(f.strict_eq(&f.clone()));
        assert!(!f.strict_eq(&Value::function("f", || Value::Null)));
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::from("bar").to_string(), "\"bar\"");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(
            Value::function("foo", || Value::Null).to_string(),
            "[Function: foo]"
        );
        assert_eq!(
            Value::object([("foo", Value::Null), ("baz", Value::Null)]).to_string(),
            "{ baz, foo }"
        );
        assert_eq!(
            Value::object(Vec::<(String, Value)>::new()).to_string(),
            "{}"
        );
    }
}
