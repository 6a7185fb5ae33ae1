//! HTTP 处理函数
//!
//! 只做请求解析和响应组装，规则都在 services 层。

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::api::envelope::{success, ErrorEnvelope};
use crate::error::{AppError, AppResult};
use crate::models::{
    categories_map, CategoryId, NewQuestion, QuestionId, QuizOutcome, QuizRequest, QuizScope,
};
use crate::services::{parse_page_number, QuestionService, QuizSelector};

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub questions: QuestionService,
    pub quiz: QuizSelector,
}

/// 查询参数按键值对接收，`page` 重复出现时不会被拒绝
type PageQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// 路径参数，解码失败时按资源不存在处理
type RawId = Result<Path<String>, PathRejection>;

/// `POST /questions/search` 请求体
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// `GET /categories`
pub async fn get_categories(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let categories = state.questions.list_categories()?;
    Ok(success(json!({
        "categories": categories_map(&categories),
    })))
}

/// `GET /questions?page=N`
pub async fn list_questions(
    State(state): State<AppState>,
    query: PageQuery,
) -> AppResult<Json<Value>> {
    let listing = state.questions.list_questions(page_number(query))?;
    Ok(success(json!({
        "questions": listing.questions,
        "total_questions": listing.total_questions,
        "categories": categories_map(&listing.categories),
        "current_category": Value::Null,
    })))
}

/// `DELETE /questions/{id}`
pub async fn delete_question(
    State(state): State<AppState>,
    raw_id: RawId,
) -> AppResult<Json<Value>> {
    let (id, raw_id) = parse_id::<QuestionId>(raw_id, "题目")?;
    let total = state.questions.delete(id)?;
    Ok(success(json!({
        "deleted": raw_id,
        "total_questions": total,
    })))
}

/// `POST /questions`
pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(new_question) = payload.map_err(|e| AppError::unprocessable(e.body_text()))?;
    let (question, total) = state.questions.create(new_question)?;
    Ok(success(json!({
        "created": question.id,
        "total_questions": total,
    })))
}

/// `POST /questions/search`
pub async fn search_questions(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(request) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;
    let outcome = state.questions.search(&request.search_term)?;
    Ok(success(json!({
        "searched": request.search_term,
        "questions": outcome.questions,
        "total_questions": outcome.total_questions,
    })))
}

/// `GET /categories/{id}/questions?page=N`
pub async fn get_category_questions(
    State(state): State<AppState>,
    raw_id: RawId,
    query: PageQuery,
) -> AppResult<Json<Value>> {
    let (category_id, _) = parse_id::<CategoryId>(raw_id, "分类")?;
    let listing = state
        .questions
        .list_category_questions(category_id, page_number(query))?;
    Ok(success(json!({
        "questions": listing.questions,
        "category_questions": listing.category_questions,
        "total_questions": listing.total_questions,
        "current_category": listing.category.kind,
    })))
}

/// `POST /quizzes`
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(request) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;
    let scope = QuizScope::from(request);

    let question = match state.quiz.next_question(&scope)? {
        QuizOutcome::Question(question) => json!(question),
        QuizOutcome::NoQuestionAvailable => Value::Bool(false),
    };
    Ok(success(json!({ "question": question })))
}

/// 未知路由
pub async fn not_found() -> AppError {
    AppError::not_found("未知路由")
}

/// 已知路由但方法不支持
pub async fn method_not_allowed() -> ErrorEnvelope {
    ErrorEnvelope::new(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}

/// 取第一个 `page` 参数；缺失、不是整数或查询串无法解析时为第 1 页
fn page_number(query: PageQuery) -> i64 {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            debug!("查询参数无法解析，使用第 1 页: {}", e.body_text());
            Vec::new()
        }
    };
    let raw = pairs
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str());
    parse_page_number(raw)
}

/// 路径中的 ID 无法解码或不是整数时，不可能匹配任何资源
///
/// 返回解析后的 ID 和原始字符串。
fn parse_id<T: std::str::FromStr>(raw: RawId, what: &str) -> AppResult<(T, String)> {
    let Path(raw) = raw.map_err(|e| {
        debug!("{} ID 无法解码: {}", what, e.body_text());
        AppError::not_found(format!("{} ID 无法解码", what))
    })?;
    match raw.parse() {
        Ok(id) => Ok((id, raw)),
        Err(_) => {
            debug!("{} ID 无法解析: {}", what, raw);
            Err(AppError::not_found(format!("{} {} 不存在", what, raw)))
        }
    }
}
