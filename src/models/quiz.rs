//! 答题流程的数据结构
//!
//! `QuizRequest` 是线上的请求格式，`QuizScope` 是核心逻辑使用的范围，
//! `QuizOutcome` 区分"抽到了题目"与"没有可用题目"两种正常结果。

use serde::Deserialize;
use std::collections::HashSet;

use crate::models::category::CategoryId;
use crate::models::question::{Question, QuestionId};

/// 表示"全部分类"的分类 ID
pub const ALL_CATEGORIES: CategoryId = 0;

/// 一次抽题请求的范围：分类 + 已出过的题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizScope {
    pub category_id: CategoryId,
    pub previous_question_ids: HashSet<QuestionId>,
}

impl QuizScope {
    pub fn new(
        category_id: CategoryId,
        previous_question_ids: impl IntoIterator<Item = QuestionId>,
    ) -> Self {
        Self {
            category_id,
            previous_question_ids: previous_question_ids.into_iter().collect(),
        }
    }

    /// 是否不限分类
    pub fn is_all_categories(&self) -> bool {
        self.category_id == ALL_CATEGORIES
    }

    /// 分类过滤条件，`None` 表示不过滤
    pub fn category_filter(&self) -> Option<CategoryId> {
        if self.is_all_categories() {
            None
        } else {
            Some(self.category_id)
        }
    }
}

/// 抽题结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// 抽到一道未出过的题目
    Question(Question),
    /// 候选集为空，答题正常结束
    NoQuestionAvailable,
}

/// `POST /quizzes` 请求体
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: QuizCategory,
}

/// 请求体中的分类信息，前端可能以字符串形式传入 ID
///
/// 前端同时会带上分类名称 `type`，抽题只看 ID，其余字段忽略。
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_category_id")]
    pub id: CategoryId,
}

impl From<QuizRequest> for QuizScope {
    fn from(req: QuizRequest) -> Self {
        QuizScope::new(req.quiz_category.id, req.previous_questions)
    }
}

// Helper function to deserialize category id as either string or integer
fn deserialize_category_id<'de, D>(deserializer: D) -> Result<CategoryId, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct CategoryIdVisitor;

    impl<'de> Visitor<'de> for CategoryIdVisitor {
        type Value = CategoryId;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or numeric string representing a category id")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid category id: {}", value)))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            CategoryId::try_from(value)
                .map_err(|_| E::custom(format!("category id out of range: {}", value)))
        }
    }

    deserializer.deserialize_any(CategoryIdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quiz_request_accepts_numeric_and_string_ids() {
        let req: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [10],
            "quiz_category": {"type": "Sports", "id": 6}
        }))
        .unwrap();
        assert_eq!(req.quiz_category.id, 6);

        let req: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [],
            "quiz_category": {"type": "Sports", "id": "6"}
        }))
        .unwrap();
        assert_eq!(req.quiz_category.id, 6);
    }

    #[test]
    fn test_quiz_request_rejects_non_numeric_id() {
        let result: Result<QuizRequest, _> = serde_json::from_value(json!({
            "previous_questions": [],
            "quiz_category": {"id": "sports"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_scope_from_request() {
        let req: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [3, 3, 7],
            "quiz_category": {"type": "click", "id": 0}
        }))
        .unwrap();

        let scope = QuizScope::from(req);
        assert!(scope.is_all_categories());
        assert_eq!(scope.category_filter(), None);
        assert_eq!(scope.previous_question_ids.len(), 2);
    }
}
