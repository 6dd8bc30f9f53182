//! Fakes shared by unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use crate::clients::{LookupError, ProductLookup, UserLookup};
use crate::domain::product;
use crate::metrics::MetricsSink;

// ============================================================================
// Metrics
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedMetric {
    Duration { method: String, endpoint: String },
    Request { method: String, endpoint: String, status: u16 },
    Order { status: String, total: f64 },
    ProductView { product_id: i64, category: String },
}

/// MetricsSink that keeps every call in memory.
#[derive(Default)]
pub struct RecordingSink {
    recorded: Mutex<Vec<RecordedMetric>>,
}

impl RecordingSink {
    pub fn recorded(&self) -> Vec<RecordedMetric> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn durations(&self) -> usize {
        self.recorded()
            .iter()
            .filter(|m| matches!(m, RecordedMetric::Duration { .. }))
            .count()
    }

    pub fn orders(&self) -> Vec<RecordedMetric> {
        self.recorded()
            .into_iter()
            .filter(|m| matches!(m, RecordedMetric::Order { .. }))
            .collect()
    }

    fn push(&self, metric: RecordedMetric) {
        self.recorded.lock().unwrap().push(metric);
    }
}

impl MetricsSink for RecordingSink {
    fn observe_request_duration(&self, method: &str, endpoint: &str, _seconds: f64) {
        self.push(RecordedMetric::Duration {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
        });
    }

    fn count_request(&self, method: &str, endpoint: &str, status: u16) {
        self.push(RecordedMetric::Request {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            status,
        });
    }

    fn record_order(&self, status: &str, total: f64) {
        self.push(RecordedMetric::Order {
            status: status.to_string(),
            total,
        });
    }

    fn record_product_view(&self, product_id: i64, category: &str) {
        self.push(RecordedMetric::ProductView {
            product_id,
            category: category.to_string(),
        });
    }
}

// ============================================================================
// Lookups
// ============================================================================

/// Positive ids exist; every call is logged. No latency.
#[derive(Default)]
pub struct CountingUsers {
    calls: Mutex<Vec<i64>>,
}

impl CountingUsers {
    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserLookup for CountingUsers {
    async fn lookup_user(&self, user_id: i64) -> Result<(), LookupError> {
        self.calls.lock().unwrap().push(user_id);
        if user_id > 0 {
            Ok(())
        } else {
            Err(LookupError::UserNotFound(user_id))
        }
    }
}

/// Catalog prices; every call is logged in order. No latency.
pub struct CountingProducts {
    prices: HashMap<i64, f64>,
    calls: Mutex<Vec<i64>>,
}

impl CountingProducts {
    pub fn catalog() -> Self {
        Self {
            prices: product::catalog().iter().map(|p| (p.id, p.price)).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductLookup for CountingProducts {
    async fn lookup_price(&self, product_id: i64) -> Result<f64, LookupError> {
        self.calls.lock().unwrap().push(product_id);
        self.prices
            .get(&product_id)
            .copied()
            .ok_or(LookupError::ProductNotFound(product_id))
    }
}

// ============================================================================
// Spans
// ============================================================================

#[derive(Default)]
struct SpanLogInner {
    opened: Vec<String>,
    closed: Vec<String>,
    /// (span name, field, value)
    fields: Vec<(String, String, String)>,
}

/// Layer that remembers span opens, closes and field values.
#[derive(Clone, Default)]
pub struct SpanLog {
    inner: Arc<Mutex<SpanLogInner>>,
}

impl SpanLog {
    /// Route this thread's spans into the log until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub fn opened_names(&self) -> Vec<String> {
        self.inner.lock().unwrap().opened.clone()
    }

    pub fn opened(&self, name: &str) -> usize {
        self.inner.lock().unwrap().opened.iter().filter(|n| *n == name).count()
    }

    pub fn closed(&self, name: &str) -> usize {
        self.inner.lock().unwrap().closed.iter().filter(|n| *n == name).count()
    }

    pub fn has_field(&self, span: &str, field: &str, value: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .fields
            .iter()
            .any(|(s, f, v)| s == span && f == field && v == value)
    }
}

struct FieldCollector<'a> {
    span: &'a str,
    out: &'a mut Vec<(String, String, String)>,
}

impl FieldCollector<'_> {
    fn push(&mut self, field: &Field, value: String) {
        self.out
            .push((self.span.to_string(), field.name().to_string(), value));
    }
}

impl Visit for FieldCollector<'_> {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, value.to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }
}

impl<S> Layer<S> for SpanLog
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        let name = attrs.metadata().name();
        let mut inner = self.inner.lock().unwrap();
        inner.opened.push(name.to_string());
        attrs.record(&mut FieldCollector {
            span: name,
            out: &mut inner.fields,
        });
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            let mut inner = self.inner.lock().unwrap();
            values.record(&mut FieldCollector {
                span: span.name(),
                out: &mut inner.fields,
            });
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(&id) {
            self.inner.lock().unwrap().closed.push(span.name().to_string());
        }
    }
}
