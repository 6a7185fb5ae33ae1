use serde::{Deserialize, Serialize};

use crate::models::category::CategoryId;
use crate::utils::logging::truncate_text;

/// 题目 ID
pub type QuestionId = i64;

/// 题目
///
/// 创建后除删除外不可变，序列化结果即对外的题目记录格式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// 新建题目的请求体，四个字段均为必填
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl NewQuestion {
    /// 使用分配好的 ID 生成题目
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} [分类 {}] {}",
            self.id,
            self.category,
            truncate_text(&self.question, 60)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_record_shape() {
        let q = NewQuestion {
            question: "What is the heaviest organ in the human body?".to_string(),
            answer: "The Liver".to_string(),
            category: 1,
            difficulty: 4,
        }
        .into_question(20);

        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["id"], 20);
        assert_eq!(value["answer"], "The Liver");
        assert_eq!(value["category"], 1);
        assert_eq!(value["difficulty"], 4);
    }
}
