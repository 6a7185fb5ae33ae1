use crate::error::{AppResult, SeedError};
use crate::models::category::Category;
use crate::models::question::Question;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

/// 种子数据：题库启动时的分类与题目
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl SeedData {
    /// 校验种子数据
    ///
    /// - 分类 ID 唯一
    /// - 题目 ID 唯一
    /// - 题干唯一
    /// - 题目引用的分类必须存在
    pub fn validate(&self) -> AppResult<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id) {
                return Err(SeedError::DuplicateCategory { id: category.id }.into());
            }
        }

        let mut question_ids = HashSet::new();
        let mut texts = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id) {
                return Err(SeedError::DuplicateQuestionId { id: question.id }.into());
            }
            if !texts.insert(question.question.as_str()) {
                return Err(SeedError::DuplicateQuestionText {
                    text: question.question.clone(),
                }
                .into());
            }
            if !category_ids.contains(&question.category) {
                return Err(SeedError::UnknownCategory {
                    question_id: question.id,
                    category: question.category,
                }
                .into());
            }
        }

        Ok(())
    }
}

/// 解析 TOML 文本为种子数据并校验
///
/// `origin` 仅用于错误信息
pub fn parse_seed(content: &str, origin: &str) -> AppResult<SeedData> {
    let seed: SeedData = toml::from_str(content).map_err(|source| SeedError::TomlParseFailed {
        path: origin.to_string(),
        source,
    })?;

    seed.validate()?;
    Ok(seed)
}

/// 从 TOML 文件加载种子数据
pub async fn load_seed(path: &Path) -> AppResult<SeedData> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

    let seed = parse_seed(&content, &path.display().to_string())?;
    tracing::info!(
        "成功加载种子数据: {} 个分类, {} 个题目",
        seed.categories.len(),
        seed.questions.len()
    );

    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    const SAMPLE: &str = r#"
[[categories]]
id = 1
type = "Science"

[[categories]]
id = 6
type = "Sports"

[[questions]]
id = 10
question = "Which is the only team to play in every soccer World Cup tournament?"
answer = "Brazil"
category = 6
difficulty = 3
"#;

    #[test]
    fn test_parse_seed() {
        let seed = parse_seed(SAMPLE, "sample").unwrap();
        assert_eq!(seed.categories.len(), 2);
        assert_eq!(seed.categories[1].kind, "Sports");
        assert_eq!(seed.questions[0].answer, "Brazil");
    }

    #[test]
    fn test_parse_seed_rejects_unknown_category() {
        let content = SAMPLE.replace("category = 6", "category = 99");
        let err = parse_seed(&content, "sample").unwrap_err();
        assert!(matches!(
            err,
            AppError::Seed(SeedError::UnknownCategory { category: 99, .. })
        ));
    }

    #[test]
    fn test_parse_seed_rejects_duplicate_text() {
        let content = format!(
            "{}\n[[questions]]\nid = 11\nquestion = \"Which is the only team to play in every soccer World Cup tournament?\"\nanswer = \"Brazil\"\ncategory = 6\ndifficulty = 3\n",
            SAMPLE
        );
        let err = parse_seed(&content, "sample").unwrap_err();
        assert!(matches!(
            err,
            AppError::Seed(SeedError::DuplicateQuestionText { .. })
        ));
    }

    #[test]
    fn test_parse_seed_rejects_malformed_toml() {
        let err = parse_seed("[[categories]]\nid = ", "broken").unwrap_err();
        assert!(matches!(
            err,
            AppError::Seed(SeedError::TomlParseFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_bundled_seed_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/trivia.toml");
        let seed = load_seed(&path).await.unwrap();
        assert_eq!(seed.categories.len(), 6);
        assert!(seed.questions.len() > 10);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_seed(Path::new("does/not/exist.toml")).await.unwrap_err();
        assert!(matches!(err, AppError::Seed(SeedError::ReadFailed { .. })));
    }
}
