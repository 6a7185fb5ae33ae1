//! 路由与中间件
//!
//! 组装 axum `Router`：路由表、跨域头、请求追踪。

use axum::http::{header, HeaderValue, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::api::handlers::{self, AppState};
use crate::config::Config;

const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE";

/// 构建完整的 HTTP 路由
pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route(
            "/categories",
            get(handlers::get_categories).fallback(handlers::method_not_allowed),
        )
        .route(
            "/categories/:id/questions",
            get(handlers::get_category_questions).fallback(handlers::method_not_allowed),
        )
        .route(
            "/questions",
            get(handlers::list_questions)
                .post(handlers::create_question)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/questions/search",
            post(handlers::search_questions).fallback(handlers::method_not_allowed),
        )
        .route(
            "/questions/:id",
            delete(handlers::delete_question).fallback(handlers::method_not_allowed),
        )
        .route(
            "/quizzes",
            post(handlers::play_quiz).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 跨域策略：包含 "*" 时允许任意来源，否则只允许列出的来源
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins.iter().filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("⚠️ 忽略无效的跨域来源: {}", o);
                None
            }
        }))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
