use depot_registry::Registry;
use proptest::prelude::*;

struct Audit;

proptest! {
    #[test]
    fn last_registration_wins(values in prop::collection::vec(any::<u32>(), 1..16)) {
        let mut registry = Registry::new();
        for value in &values {
            let value = *value;
            registry.register::<u32>(move |_| value);
        }

        prop_assert_eq!(registry.resolve::<u32>(), *values.last().unwrap());
        prop_assert_eq!(registry.len(), 1);
    }

    #[test]
    fn namespaces_never_bleed_into_each_other(plain in any::<i64>(), targeted in any::<i64>()) {
        let mut registry = Registry::new();
        registry
            .register::<i64>(move |_| plain)
            .register_for::<i64, Audit>(move |_| targeted);

        prop_assert_eq!(registry.resolve::<i64>(), plain);
        prop_assert_eq!(registry.resolve_for::<i64, Audit>(), targeted);
    }

    #[test]
    fn factory_output_round_trips(text in ".*") {
        let mut registry = Registry::new();
        let captured = text.clone();
        registry.register::<String>(move |_| captured.clone());

        prop_assert_eq!(registry.resolve::<String>(), text);
    }
}
