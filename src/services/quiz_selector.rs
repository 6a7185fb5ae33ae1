//! 抽题服务
//!
//! 给定分类范围与已出过的题目，均匀随机地抽一道未出过的题。
//! 候选集为空不是错误，而是答题结束的正常信号。

use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::infrastructure::{choose, QuestionStore, RandomChoice};
use crate::models::{QuizOutcome, QuizScope};

/// 抽题服务
#[derive(Clone)]
pub struct QuizSelector {
    store: Arc<dyn QuestionStore>,
    random: Arc<dyn RandomChoice>,
}

impl QuizSelector {
    /// 创建新的抽题服务
    pub fn new(store: Arc<dyn QuestionStore>, random: Arc<dyn RandomChoice>) -> Self {
        Self { store, random }
    }

    /// 抽下一道题
    ///
    /// 候选集 = 分类内（`category_id == 0` 时为全部）的题目 − 已出过的题目。
    ///
    /// # 错误
    /// - `category_id != 0` 且分类不存在 → `NotFound`（在计算候选集之前检查）
    pub fn next_question(&self, scope: &QuizScope) -> AppResult<QuizOutcome> {
        let not_found = |e: AppError| e.or_public(AppError::NotFound);

        if let Some(category_id) = scope.category_filter() {
            if self.store.category(category_id).map_err(not_found)?.is_none() {
                return Err(AppError::not_found(format!(
                    "答题分类 {} 不存在",
                    category_id
                )));
            }
        }

        let candidates = self
            .store
            .available_questions(scope.category_filter(), &scope.previous_question_ids)
            .map_err(not_found)?;

        debug!(
            "[分类 {}] 候选题目 {} 个, 已出 {} 个",
            scope.category_id,
            candidates.len(),
            scope.previous_question_ids.len()
        );

        match choose(self.random.as_ref(), &candidates) {
            Some(question) => {
                info!("[分类 {}] 🎲 抽到题目 {}", scope.category_id, question);
                Ok(QuizOutcome::Question(question.clone()))
            }
            None => {
                info!("[分类 {}] 🏁 没有可出的题目了", scope.category_id);
                Ok(QuizOutcome::NoQuestionAvailable)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{FixedChoice, MemoryStore, ThreadRandom};
    use crate::models::{Category, Question, QuestionId, SeedData};
    use std::collections::HashSet;

    fn store() -> Arc<MemoryStore> {
        let question = |id: QuestionId, category| Question {
            id,
            question: format!("Question {}?", id),
            answer: format!("Answer {}", id),
            category,
            difficulty: 2,
        };
        Arc::new(MemoryStore::from_seed(SeedData {
            categories: vec![
                Category {
                    id: 1,
                    kind: "Science".to_string(),
                },
                Category {
                    id: 6,
                    kind: "Sports".to_string(),
                },
            ],
            questions: vec![
                question(20, 1),
                question(21, 1),
                question(22, 1),
                question(10, 6),
                question(11, 6),
            ],
        }))
    }

    fn selector(random: Arc<dyn RandomChoice>) -> QuizSelector {
        QuizSelector::new(store(), random)
    }

    fn picked_id(outcome: QuizOutcome) -> QuestionId {
        match outcome {
            QuizOutcome::Question(q) => q.id,
            QuizOutcome::NoQuestionAvailable => panic!("expected a question"),
        }
    }

    #[test]
    fn test_picks_unseen_question_in_category() {
        let selector = selector(Arc::new(ThreadRandom));
        let scope = QuizScope::new(6, [10]);
        for _ in 0..20 {
            assert_eq!(picked_id(selector.next_question(&scope).unwrap()), 11);
        }
    }

    #[test]
    fn test_all_seen_means_no_question_available() {
        let selector = selector(Arc::new(ThreadRandom));
        let scope = QuizScope::new(6, [10, 11]);
        assert_eq!(
            selector.next_question(&scope).unwrap(),
            QuizOutcome::NoQuestionAvailable
        );
    }

    #[test]
    fn test_unknown_category_is_not_found() {
        let selector = selector(Arc::new(ThreadRandom));
        let scope = QuizScope::new(55, [3]);
        assert!(matches!(
            selector.next_question(&scope),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_all_categories_spans_every_category() {
        let selector = selector(Arc::new(ThreadRandom));
        let scope = QuizScope::new(0, []);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(picked_id(selector.next_question(&scope).unwrap()));
        }
        assert_eq!(seen, [10, 11, 20, 21, 22].into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn test_never_returns_excluded_id() {
        let selector = selector(Arc::new(ThreadRandom));
        let mut scope = QuizScope::new(0, []);
        // 每次把抽到的题加入排除集，直到抽完
        for _ in 0..5 {
            let id = picked_id(selector.next_question(&scope).unwrap());
            assert!(!scope.previous_question_ids.contains(&id));
            scope.previous_question_ids.insert(id);
        }
        assert_eq!(
            selector.next_question(&scope).unwrap(),
            QuizOutcome::NoQuestionAvailable
        );
    }

    #[test]
    fn test_deterministic_source_picks_by_index() {
        let selector = selector(Arc::new(FixedChoice::new(1)));
        // 候选按 ID 升序: 20, 21, 22
        let scope = QuizScope::new(1, []);
        assert_eq!(picked_id(selector.next_question(&scope).unwrap()), 21);

        let scope = QuizScope::new(1, [21]);
        assert_eq!(picked_id(selector.next_question(&scope).unwrap()), 22);
    }

    #[test]
    fn test_excluding_unknown_ids_is_harmless() {
        let selector = selector(Arc::new(FixedChoice::new(0)));
        let scope = QuizScope::new(6, [9999, 10]);
        assert_eq!(picked_id(selector.next_question(&scope).unwrap()), 11);
    }
}
