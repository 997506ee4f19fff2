use axum::http::StatusCode;

/// Liveness probe for `GET /healthz`. Answers 200 while the process serves.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe for `GET /readyz`. The service takes traffic as soon as
/// it binds, so this mirrors the liveness answer.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_answer_ok_on_both_probes() {
        assert_eq!(healthz().await, StatusCode::OK);
        assert_eq!(readyz().await, StatusCode::OK);
    }
}
