//! 题库存储接口
//!
//! 只描述"存储能做什么"（增删查、过滤），业务规则（空结果即错误、
//! 重复题干检查等）由 services 层负责。

use std::collections::HashSet;

use crate::error::AppResult;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// 题库存储
///
/// 每次调用保证读到自己的写入，但不提供跨调用的事务：
/// "先检查后写入" 的组合在并发写入时不是原子的。
pub trait QuestionStore: Send + Sync {
    /// 全部分类，按 ID 升序
    fn categories(&self) -> AppResult<Vec<Category>>;

    /// 按 ID 查找分类
    fn category(&self, id: CategoryId) -> AppResult<Option<Category>>;

    /// 全部题目，按 ID 升序
    fn questions(&self) -> AppResult<Vec<Question>>;

    /// 某个分类下的题目，按 ID 升序
    fn questions_in_category(&self, category: CategoryId) -> AppResult<Vec<Question>>;

    /// 题干包含 `term` 的题目（不区分大小写，按字面匹配）
    fn search(&self, term: &str) -> AppResult<Vec<Question>>;

    /// 是否存在题干完全相同的题目（区分大小写）
    fn exists_with_text(&self, text: &str) -> AppResult<bool>;

    /// 可出的题目：可选的分类过滤，排除 `excluded` 中的 ID
    fn available_questions(
        &self,
        category: Option<CategoryId>,
        excluded: &HashSet<QuestionId>,
    ) -> AppResult<Vec<Question>>;

    /// 题目总数
    fn count(&self) -> AppResult<usize>;

    /// 插入题目并分配 ID
    fn insert(&self, new_question: NewQuestion) -> AppResult<Question>;

    /// 删除题目，返回被删除的题目；不存在时返回 `None`
    fn delete(&self, id: QuestionId) -> AppResult<Option<Question>>;
}
