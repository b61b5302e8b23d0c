//! Property-based tests for the accessor engine.
//!
//! These use proptest to verify the packing, round-trip, naming, and
//! construction-permissiveness laws across many randomly generated inputs.

use std::rc::Rc;

use proptest::prelude::*;
use quipu::{ArgMap, Class, Value, follow_best_practice, mk_accessors};

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        "[a-z]{0,8}".prop_map(Value::Str),
    ]
}

proptest! {
    /// A writer called with one argument stores it unwrapped.
    #[test]
    fn single_argument_writes_round_trip(value in scalar_value()) {
        let mut class = Class::new("P");
        mk_accessors(&mut class, &["foo"]).unwrap();
        let class = Rc::new(class);
        let mut instance = class.instantiate(&ArgMap::new()).unwrap();

        instance.call("foo", std::slice::from_ref(&value)).unwrap();
        prop_assert_eq!(instance.call("foo", &[]).unwrap(), value);
    }

    /// A writer called with several arguments stores them as an ordered
    /// sequence, in call order.
    #[test]
    fn multi_argument_writes_pack_in_order(values in prop::collection::vec(scalar_value(), 2..6)) {
        let mut class = Class::new("P");
        mk_accessors(&mut class, &["foo"]).unwrap();
        let class = Rc::new(class);
        let mut instance = class.instantiate(&ArgMap::new()).unwrap();

        instance.call("foo", &values).unwrap();
        prop_assert_eq!(instance.call("foo", &[]).unwrap(), Value::List(values.clone()));
    }

    /// Best-practice naming prefixes reader and writer and never installs
    /// the bare field name.
    #[test]
    fn best_practice_prefixes_hold_for_any_field(field in "[a-z][a-z0-9_]{0,10}") {
        let mut class = Class::new("P");
        follow_best_practice(&mut class);
        mk_accessors(&mut class, &[field.as_str()]).unwrap();

        let getter = format!("get_{}", field);
        let setter = format!("set_{}", field);
        prop_assert!(class.has_method(&getter));
        prop_assert!(class.has_method(&setter));
        prop_assert!(!class.has_method(&field));
    }

    /// Every constructor key is retrievable after construction, declared
    /// or not.
    #[test]
    fn construction_accepts_arbitrary_extra_keys(
        extras in prop::collection::btree_map("extra_[a-z]{1,6}", scalar_value(), 0..5)
    ) {
        let mut class = Class::new("P");
        mk_accessors(&mut class, &["foo"]).unwrap();
        let class = Rc::new(class);

        let mut args: ArgMap = extras.clone();
        args.insert("foo".to_string(), Value::Int(1));
        let instance = class.instantiate(&args).unwrap();

        for (key, value) in &extras {
            prop_assert_eq!(instance.get_raw(key), Some(value));
        }
        prop_assert_eq!(instance.get_raw("foo"), Some(&Value::Int(1)));
    }
}
