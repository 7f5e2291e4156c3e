use depot_registry::Registry;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

struct Target;

/// Runs `f`, returning the file of the panic it raised.
fn panic_file(f: impl FnOnce()) -> String {
    let location = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&location);
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        *slot.lock().unwrap() = info.location().map(|l| l.file().to_owned());
    }));

    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);

    assert!(outcome.is_err(), "expected a panic");
    location.lock().unwrap().take().expect("panic without a location")
}

// The hook is process-wide, so both lookups are checked from one test.
#[test]
fn failed_resolution_reports_the_calling_line() {
    let registry = Registry::new();

    let file = panic_file(|| {
        let _: u8 = registry.resolve::<u8>();
    });
    assert_eq!(file, file!());

    let file = panic_file(|| {
        let _: u8 = registry.resolve_for::<u8, Target>();
    });
    assert_eq!(file, file!());
}
