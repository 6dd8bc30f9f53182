//! Request instrumentation middleware
//!
//! Wraps every route of a service. For each completed request it records
//! latency (`method`, `endpoint`) and a completion count (`method`,
//! `endpoint`, `status`). It never touches the response body.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;

use crate::metrics::MetricsSink;

/// Middleware factory; register with `App::wrap`.
#[derive(Clone)]
pub struct RequestMetrics {
    sink: Arc<dyn MetricsSink>,
}

impl RequestMetrics {
    pub fn new(sink: Arc<dyn MetricsSink>) -> Self {
        Self { sink }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestMetricsMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsMiddleware {
            service: Rc::new(service),
            sink: self.sink.clone(),
        }))
    }
}

pub struct RequestMetricsMiddleware<S> {
    service: Rc<S>,
    sink: Arc<dyn MetricsSink>,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();

        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let method = req.method().to_string();
        // Route template keeps `/orders/{id}` as one series
        let endpoint = req
            .match_pattern()
            .unwrap_or_else(|| req.path().to_string());

        let sink = self.sink.clone();
        let service = self.service.clone();

        Box::pin(async move {
            let result = service.call(req).await;

            // An inner error has not been rendered yet; count the status it will render as
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            let elapsed = start.elapsed();

            sink.observe_request_duration(&method, &endpoint, elapsed.as_secs_f64());
            sink.count_request(&method, &endpoint, status.as_u16());

            if status.is_server_error() {
                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %endpoint,
                    status = status.as_u16(),
                    latency_ms = elapsed.as_millis() as u64,
                    "Request failed"
                );
            } else {
                tracing::info!(
                    request_id = %request_id,
                    method = %method,
                    path = %endpoint,
                    status = status.as_u16(),
                    latency_ms = elapsed.as_millis() as u64,
                    "Request completed"
                );
            }

            result
        })
    }
}
