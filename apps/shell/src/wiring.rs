use crate::services::{
    ConsoleLogger, Formatter, InlineFormatter, Logger, ReportService, ReportTarget, SummaryTarget,
    TableFormatter,
};
use depot_kernel::registry::Registry;
use std::sync::Arc;

/// Registers every demo service. Call once, before the registry is shared.
pub(crate) fn wire(registry: &mut Registry) {
    let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger);

    registry
        .register::<Arc<dyn Logger>>(move |_| Arc::clone(&logger))
        .register::<Arc<dyn Formatter>>(|_| Arc::new(InlineFormatter))
        .register_for::<Arc<dyn Formatter>, ReportTarget>(|_| Arc::new(TableFormatter))
        .register_for::<ReportService, ReportTarget>(|r| {
            ReportService::new(r.resolve(), r.resolve_for::<Arc<dyn Formatter>, ReportTarget>())
        })
        .register_for::<ReportService, SummaryTarget>(|r| {
            ReportService::new(r.resolve(), r.resolve())
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wired() -> Registry {
        let mut registry = Registry::new();
        wire(&mut registry);
        registry
    }

    #[test]
    fn logger_is_a_shared_instance() {
        let registry = wired();
        let first = registry.resolve::<Arc<dyn Logger>>();
        let second = registry.resolve::<Arc<dyn Logger>>();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn report_pipeline_uses_targeted_formatter() {
        let registry = wired();
        let report = registry.resolve_for::<ReportService, ReportTarget>();
        assert_eq!(report.formatter_name(), "table");
    }

    #[test]
    fn summary_pipeline_uses_default_formatter() {
        let registry = wired();
        let summary = registry.resolve_for::<ReportService, SummaryTarget>();
        assert_eq!(summary.formatter_name(), "inline");
        assert_eq!(summary.render("Q3", &[("revenue", 120)]), "Q3: revenue=120");
    }

    #[test]
    fn unqualified_report_service_is_not_wired() {
        let registry = wired();
        assert!(registry.try_resolve::<ReportService>().is_err());
        assert_eq!(registry.len(), 5);
    }
}
