use std::time::Duration;

use actix_web::{web, HttpResponse};
use tracing::{field, Instrument};

use super::error::{parse_id, ApiError};
use crate::domain::user::{self, User};

/// Artificial processing time of the user listing.
const LIST_USERS_DELAY: Duration = Duration::from_millis(50);

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(list_users))
        .route("/users/{id}", web::get().to(get_user));
}

async fn list_users(users: web::Data<Vec<User>>) -> HttpResponse {
    let span = tracing::info_span!(
        "get-users",
        operation = "get-users",
        user.count = users.len()
    );
    async {
        tracing::info!(count = users.len(), "GET /users");
        tokio::time::sleep(LIST_USERS_DELAY).await;
        HttpResponse::Ok().json(users.as_slice())
    }
    .instrument(span)
    .await
}

async fn get_user(
    users: web::Data<Vec<User>>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let span = tracing::info_span!("get-user", user.id = field::Empty, error = field::Empty);
    async {
        let span = tracing::Span::current();
        let id = match parse_id(&id, "user") {
            Ok(id) => id,
            Err(e) => {
                span.record("error", "invalid user id");
                return Err(e);
            }
        };
        span.record("user.id", id);

        match user::find_user(&users, id) {
            Some(user) => Ok(HttpResponse::Ok().json(user)),
            None => {
                span.record("error", "user not found");
                Err(ApiError::not_found("User"))
            }
        }
    }
    .instrument(span)
    .await
}
