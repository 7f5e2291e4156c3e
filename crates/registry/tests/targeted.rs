use depot_registry::{Registry, RegistryError};

trait Formatter {
    fn format(&self, body: &str) -> String;
}

struct ReportTarget;
struct InvoiceTarget;

struct Plain;

impl Formatter for Plain {
    fn format(&self, body: &str) -> String {
        body.to_owned()
    }
}

#[test]
fn resolves_targeted_registration() {
    let mut registry = Registry::new();
    registry.register_for::<String, ReportTarget>(|_| "report-formatter".to_owned());

    assert_eq!(registry.resolve_for::<String, ReportTarget>(), "report-formatter");
}

#[test]
#[should_panic(expected = "not registered")]
fn targeted_registration_does_not_answer_unqualified_lookup() {
    let mut registry = Registry::new();
    registry.register_for::<String, ReportTarget>(|_| "report-formatter".to_owned());

    let _ = registry.resolve::<String>();
}

#[test]
fn qualified_and_unqualified_registrations_are_independent() {
    let mut registry = Registry::new();
    registry
        .register::<String>(|_| "default".to_owned())
        .register_for::<String, ReportTarget>(|_| "report".to_owned());

    assert_eq!(registry.resolve::<String>(), "default");
    assert_eq!(registry.resolve_for::<String, ReportTarget>(), "report");
    assert_eq!(registry.len(), 2);
}

#[test]
fn each_target_has_its_own_slot() {
    let mut registry = Registry::new();
    registry
        .register_for::<String, ReportTarget>(|_| "report".to_owned())
        .register_for::<String, InvoiceTarget>(|_| "invoice".to_owned());

    assert_eq!(registry.resolve_for::<String, ReportTarget>(), "report");
    assert_eq!(registry.resolve_for::<String, InvoiceTarget>(), "invoice");
    assert!(registry.contains_for::<String, InvoiceTarget>());
    assert!(!registry.contains::<String>());
}

#[test]
fn targets_may_be_unsized() {
    let mut registry = Registry::new();
    registry.register_for::<Box<dyn Formatter>, dyn Formatter>(|_| Box::new(Plain));
    registry.register_for::<u8, str>(|_| 1);

    assert_eq!(registry.resolve_for::<Box<dyn Formatter>, dyn Formatter>().format("x"), "x");
    assert_eq!(registry.resolve_for::<u8, str>(), 1);
}

#[test]
fn targeted_registration_is_overwritten_by_the_latest() {
    let mut registry = Registry::new();
    registry.register_for::<u8, ReportTarget>(|_| 1);
    registry.register_for::<u8, ReportTarget>(|_| 2);

    assert_eq!(registry.resolve_for::<u8, ReportTarget>(), 2);
    assert_eq!(registry.targeted_services().count(), 1);
}

#[test]
fn missing_targeted_service_names_both_types() {
    let registry = Registry::new();

    let err = registry
        .try_resolve_for::<u8, ReportTarget>()
        .err()
        .expect("nothing is registered");
    assert!(matches!(err, RegistryError::NotRegistered { .. }));
    assert!(err.key().starts_with("u8"), "unexpected key: {}", err.key());
    assert!(err.key().ends_with("ReportTarget"), "unexpected key: {}", err.key());
}

#[test]
fn erased_targeted_factory_is_checked_on_resolution() {
    let mut registry = Registry::new();
    registry.register_erased_for::<u8, ReportTarget>(|_| Box::new(1_u16));

    let err = registry.try_resolve_for::<u8, ReportTarget>().err().expect("wrong output type");
    assert!(matches!(err, RegistryError::TypeMismatch { expected: "u8", .. }));
}

#[test]
fn targeted_factory_can_resolve_unqualified_dependencies() {
    let mut registry = Registry::new();
    registry
        .register::<Box<dyn Formatter>>(|_| Box::new(Plain))
        .register_for::<String, ReportTarget>(|r| {
            r.resolve::<Box<dyn Formatter>>().format("quarterly report")
        });

    assert_eq!(registry.resolve_for::<String, ReportTarget>(), "quarterly report");
}
