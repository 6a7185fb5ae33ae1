//! # Trivia API
//!
//! 一个提供答题题库的 HTTP 服务：分页浏览题目、按分类查看、搜索、
//! 新建与删除题目，以及随机抽取未出过的题目进行答题。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有共享资源，只暴露能力
//! - `QuestionStore` / `MemoryStore` - 题库存储（增删查、过滤）
//! - `RandomChoice` - 均匀随机选择能力，测试时可替换
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `paginator` - 每页 10 条，空页即 `NotFound`
//! - `QuestionService` - 分类、列表、搜索、新建、删除规则
//! - `QuizSelector` - 抽题规则（分类范围、排除已出题目）
//!
//! ### ③ 接口层（Api）
//! - `api/` - axum 路由、统一响应格式、跨域头
//!
//! ### ④ 编排层（App）
//! - `app` - 配置 → 种子数据 → 题库 → 路由 → 监听
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{MemoryStore, QuestionStore, RandomChoice};
pub use models::{Category, NewQuestion, Question, QuizOutcome, QuizScope};
pub use services::{QuestionService, QuizSelector};
