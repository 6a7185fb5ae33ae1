/// 题目服务
///
/// 负责题目与分类的查询、搜索、新建、删除规则：
/// - 空的分类题目列表、空的搜索结果都视为 `NotFound`
/// - 新建前检查题干是否重复（先检查后写入，并发写入时不是原子的）
use crate::error::{AppError, AppResult};
use crate::infrastructure::QuestionStore;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::services::paginator::paginate;
use crate::utils::logging::truncate_text;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 题目列表页
#[derive(Debug, Clone)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
}

/// 分类题目列表页
#[derive(Debug, Clone)]
pub struct CategoryListing {
    pub category: Category,
    pub questions: Vec<Question>,
    pub category_questions: usize,
    pub total_questions: usize,
}

/// 搜索结果
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// 题目服务
#[derive(Clone)]
pub struct QuestionService {
    store: Arc<dyn QuestionStore>,
}

impl QuestionService {
    /// 创建新的题目服务
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// 全部分类
    pub fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.store
            .categories()
            .map_err(|e| e.or_public(AppError::NotFound))
    }

    /// 分页列出全部题目，附带分类与总数
    pub fn list_questions(&self, page_number: i64) -> AppResult<QuestionListing> {
        let load = || -> AppResult<_> {
            let questions = self.store.questions()?;
            let categories = self.store.categories()?;
            Ok((questions, categories))
        };
        let (questions, categories) = load().map_err(|e| e.or_public(AppError::NotFound))?;

        let page = paginate(&questions, page_number)?;
        debug!(
            "题目列表第 {} 页: {} 条 / 共 {} 条",
            page_number,
            page.len(),
            questions.len()
        );

        Ok(QuestionListing {
            total_questions: questions.len(),
            questions: page,
            categories,
        })
    }

    /// 某个分类下的全部题目
    ///
    /// # 错误
    /// - 分类不存在 → `NotFound`（先检查）
    /// - 分类存在但没有题目 → `NotFound`
    pub fn questions_for_category(
        &self,
        category_id: CategoryId,
    ) -> AppResult<(Category, Vec<Question>)> {
        let category = self
            .store
            .category(category_id)
            .map_err(|e| e.or_public(AppError::NotFound))?
            .ok_or_else(|| AppError::not_found(format!("分类 {} 不存在", category_id)))?;

        let questions = self
            .store
            .questions_in_category(category_id)
            .map_err(|e| e.or_public(AppError::NotFound))?;

        if questions.is_empty() {
            return Err(AppError::not_found(format!(
                "分类 {} ({}) 下没有题目",
                category_id, category.kind
            )));
        }

        Ok((category, questions))
    }

    /// 分页列出某个分类下的题目
    pub fn list_category_questions(
        &self,
        category_id: CategoryId,
        page_number: i64,
    ) -> AppResult<CategoryListing> {
        let (category, questions) = self.questions_for_category(category_id)?;
        let page = paginate(&questions, page_number)?;

        Ok(CategoryListing {
            category,
            category_questions: questions.len(),
            questions: page,
            total_questions: self.total_questions()?,
        })
    }

    /// 按题干搜索（不区分大小写的子串匹配），无结果时为 `NotFound`
    pub fn search(&self, term: &str) -> AppResult<SearchOutcome> {
        let questions = self
            .store
            .search(term)
            .map_err(|e| e.or_public(AppError::BadRequest))?;

        let preview = truncate_text(term, 60);
        if questions.is_empty() {
            info!("🔍 搜索 '{}' 没有结果", preview);
            return Err(AppError::not_found(format!("没有题目包含 '{}'", preview)));
        }

        info!("🔍 搜索 '{}' 找到 {} 个题目", preview, questions.len());
        Ok(SearchOutcome {
            questions,
            total_questions: self
                .store
                .count()
                .map_err(|e| e.or_public(AppError::BadRequest))?,
        })
    }

    /// 新建题目，返回新题目与新的总数
    ///
    /// 先检查题干是否已存在再插入，两步之间没有原子性保证。
    pub fn create(&self, new_question: NewQuestion) -> AppResult<(Question, usize)> {
        let unprocessable = |e: AppError| e.or_public(AppError::Unprocessable);

        if self
            .store
            .exists_with_text(&new_question.question)
            .map_err(unprocessable)?
        {
            warn!("⚠️ 题目已存在，拒绝重复创建: {}", new_question.question);
            return Err(AppError::unprocessable("题目已存在"));
        }

        if self
            .store
            .category(new_question.category)
            .map_err(unprocessable)?
            .is_none()
        {
            warn!("⚠️ 分类 {} 不存在，拒绝创建题目", new_question.category);
            return Err(AppError::unprocessable(format!(
                "分类 {} 不存在",
                new_question.category
            )));
        }

        let question = self.store.insert(new_question).map_err(unprocessable)?;
        let total = self.store.count().map_err(unprocessable)?;
        info!("✓ 新建题目 {}", question);

        Ok((question, total))
    }

    /// 删除题目，返回新的总数
    ///
    /// # 错误
    /// - 题目不存在 → `NotFound`
    /// - 删除失败 → `Unprocessable`
    pub fn delete(&self, id: QuestionId) -> AppResult<usize> {
        let unprocessable = |e: AppError| e.or_public(AppError::Unprocessable);

        match self.store.delete(id).map_err(unprocessable)? {
            Some(question) => {
                info!("🗑️ 已删除题目 {}", question);
                self.store.count().map_err(unprocessable)
            }
            None => Err(AppError::not_found(format!("题目 {} 不存在", id))),
        }
    }

    /// 题目总数
    pub fn total_questions(&self) -> AppResult<usize> {
        self.store
            .count()
            .map_err(|e| e.or_public(AppError::NotFound))
    }
}
