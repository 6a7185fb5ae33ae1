//! 内存题库
//!
//! 用 `RwLock` 串行化写入；启动时由种子数据填充。

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::error::{AppError, AppResult, StoreError};
use crate::infrastructure::store::QuestionStore;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId, SeedData};

#[derive(Debug)]
struct Tables {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    /// `None` 表示 ID 已用尽
    next_id: Option<QuestionId>,
}

/// 内存题库
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    simulate_write_error: AtomicBool,
}

impl MemoryStore {
    /// 使用种子数据创建题库
    pub fn from_seed(seed: SeedData) -> Self {
        let next_id = seed
            .questions
            .iter()
            .map(|q| q.id)
            .max()
            .unwrap_or(0)
            .checked_add(1);
        let tables = Tables {
            categories: seed.categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: seed.questions.into_iter().map(|q| (q.id, q)).collect(),
            next_id,
        };
        debug!(
            "内存题库已创建: {} 个分类, {} 个题目, 下一个 ID {:?}",
            tables.categories.len(),
            tables.questions.len(),
            next_id
        );

        Self {
            tables: RwLock::new(tables),
            simulate_write_error: AtomicBool::new(false),
        }
    }

    /// 模拟写入失败，用于测试错误处理
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| AppError::from(StoreError::LockPoisoned))
    }

    fn write(&self, operation: &str) -> AppResult<RwLockWriteGuard<'_, Tables>> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed {
                operation: operation.to_string(),
            }
            .into());
        }
        self.tables
            .write()
            .map_err(|_| AppError::from(StoreError::LockPoisoned))
    }

    fn filter_questions<F>(&self, filter: F) -> AppResult<Vec<Question>>
    where
        F: Fn(&Question) -> bool,
    {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| filter(q))
            .cloned()
            .collect())
    }
}

impl QuestionStore for MemoryStore {
    fn categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    fn category(&self, id: CategoryId) -> AppResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    fn questions(&self) -> AppResult<Vec<Question>> {
        self.filter_questions(|_| true)
    }

    fn questions_in_category(&self, category: CategoryId) -> AppResult<Vec<Question>> {
        self.filter_questions(|q| q.category == category)
    }

    fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        // 等价于 SQL 的 ILIKE '%term%'
        let term = term.to_lowercase();
        self.filter_questions(|q| q.question.to_lowercase().contains(&term))
    }

    fn exists_with_text(&self, text: &str) -> AppResult<bool> {
        Ok(self.read()?.questions.values().any(|q| q.question == text))
    }

    fn available_questions(
        &self,
        category: Option<CategoryId>,
        excluded: &HashSet<QuestionId>,
    ) -> AppResult<Vec<Question>> {
        self.filter_questions(|q| {
            category.map_or(true, |c| q.category == c) && !excluded.contains(&q.id)
        })
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.questions.len())
    }

    fn insert(&self, new_question: NewQuestion) -> AppResult<Question> {
        let mut tables = self.write("insert")?;
        let id = tables.next_id.ok_or(StoreError::IdsExhausted)?;
        tables.next_id = id.checked_add(1);

        let question = new_question.into_question(id);
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    fn delete(&self, id: QuestionId) -> AppResult<Option<Question>> {
        Ok(self.write("delete")?.questions.remove(&id))
    }
}
