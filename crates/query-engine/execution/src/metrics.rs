//! Metrics setup and update for lookup execution.

use prometheus::core::{AtomicU64, GenericCounter};

/// The metrics we maintain across lookup operations.
#[derive(Debug, Clone)]
pub struct Metrics {
    point_lookups_total: GenericCounter<AtomicU64>,
    range_lookups_total: GenericCounter<AtomicU64>,
    statements_executed_total: GenericCounter<AtomicU64>,
    rollbacks_total: GenericCounter<AtomicU64>,
}

impl Metrics {
    /// Create the counters and register them with the provided Prometheus Registry.
    pub fn initialize(
        metrics_registry: &mut prometheus::Registry,
    ) -> Result<Self, prometheus::Error> {
        let point_lookups_total = add_int_counter_metric(
            metrics_registry,
            "partition_lookup_point_lookups_total",
            "Total successful point lookups.",
        )?;

        let range_lookups_total = add_int_counter_metric(
            metrics_registry,
            "partition_lookup_range_lookups_total",
            "Total successful range lookups.",
        )?;

        let statements_executed_total = add_int_counter_metric(
            metrics_registry,
            "partition_lookup_statements_executed_total",
            "Total statements executed against the database.",
        )?;

        let rollbacks_total = add_int_counter_metric(
            metrics_registry,
            "partition_lookup_rollbacks_total",
            "Total transactions rolled back after a failed statement.",
        )?;

        Ok(Self {
            point_lookups_total,
            range_lookups_total,
            statements_executed_total,
            rollbacks_total,
        })
    }

    pub fn record_successful_point_lookup(&self) {
        self.point_lookups_total.inc();
    }

    pub fn record_successful_range_lookup(&self) {
        self.range_lookups_total.inc();
    }

    pub fn record_statement_executed(&self) {
        self.statements_executed_total.inc();
    }

    pub fn record_rollback(&self) {
        self.rollbacks_total.inc();
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericCounter<AtomicU64>, prometheus::Error> {
    let int_counter =
        prometheus::IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_registers_every_counter() {
        let mut registry = prometheus::Registry::new();
        let metrics = Metrics::initialize(&mut registry).unwrap();

        metrics.record_successful_point_lookup();
        metrics.record_statement_executed();
        metrics.record_statement_executed();

        let families = registry.gather();
        assert_eq!(families.len(), 4);
    }

    #[test]
    fn it_refuses_double_registration() {
        let mut registry = prometheus::Registry::new();
        Metrics::initialize(&mut registry).unwrap();
        assert!(Metrics::initialize(&mut registry).is_err());
    }
}
