use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 分类 ID，0 在答题流程中表示"全部分类"
pub type CategoryId = i64;

/// 题目分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

/// 将分类列表转换为 `{id: type}` 映射（对外格式）
pub fn categories_map(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_map_serializes_with_string_keys() {
        let categories = vec![
            Category {
                id: 1,
                kind: "Science".to_string(),
            },
            Category {
                id: 6,
                kind: "Sports".to_string(),
            },
        ];

        let value = serde_json::to_value(categories_map(&categories)).unwrap();
        assert_eq!(value["1"], "Science");
        assert_eq!(value["6"], "Sports");
    }
}
