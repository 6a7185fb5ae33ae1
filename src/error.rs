use thiserror::Error;

use crate::models::{CategoryId, QuestionId};

/// 应用程序错误类型
///
/// 前三个变体对应对外暴露的错误码（404 / 422 / 400），
/// 其余变体属于内部基础设施错误，由具体操作决定对外的状态码。
#[derive(Debug, Error)]
pub enum AppError {
    /// 请求的资源或结果集不存在（空页、分类不存在、搜索无结果、题目不存在）
    #[error("资源不存在: {0}")]
    NotFound(String),
    /// 语义上无法处理的写操作（重复题目、删除失败）
    #[error("无法处理: {0}")]
    Unprocessable(String),
    /// 请求格式错误
    #[error("错误的请求: {0}")]
    BadRequest(String),
    /// 存储层错误
    #[error("存储错误: {0}")]
    Store(#[from] StoreError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 种子数据错误
    #[error("种子数据错误: {0}")]
    Seed(#[from] SeedError),
}

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 锁被污染（持锁线程 panic）
    #[error("存储锁已损坏")]
    LockPoisoned,
    /// 写入失败
    #[error("写入失败: {operation}")]
    WriteFailed { operation: String },
    /// 题目 ID 已用尽
    #[error("题目 ID 已用尽")]
    IdsExhausted,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// 种子数据错误
#[derive(Debug, Error)]
pub enum SeedError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 分类 ID 重复
    #[error("分类 ID 重复: {id}")]
    DuplicateCategory { id: CategoryId },
    /// 题目 ID 重复
    #[error("题目 ID 重复: {id}")]
    DuplicateQuestionId { id: QuestionId },
    /// 题干重复
    #[error("题干重复: {text}")]
    DuplicateQuestionText { text: String },
    /// 题目引用了不存在的分类
    #[error("题目 {question_id} 引用了不存在的分类 {category}")]
    UnknownCategory {
        question_id: QuestionId,
        category: CategoryId,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建资源不存在错误
    pub fn not_found(what: impl Into<String>) -> Self {
        AppError::NotFound(what.into())
    }

    /// 创建无法处理错误
    pub fn unprocessable(reason: impl Into<String>) -> Self {
        AppError::Unprocessable(reason.into())
    }

    /// 创建错误请求
    pub fn bad_request(reason: impl Into<String>) -> Self {
        AppError::BadRequest(reason.into())
    }

    /// 对外的 HTTP 状态码
    ///
    /// 内部错误统一为 500，调用方应在边界处先转换为对外错误。
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::NotFound(_) => 404,
            AppError::Unprocessable(_) => 422,
            AppError::BadRequest(_) => 400,
            AppError::Store(_) | AppError::Config(_) | AppError::Seed(_) => 500,
        }
    }

    /// 对外的错误描述（与状态码一一对应）
    pub fn public_message(&self) -> &'static str {
        match self.status_code() {
            404 => "resource not found",
            422 => "unprocessable",
            400 => "bad request",
            _ => "internal server error",
        }
    }

    /// 将内部错误折叠为指定的对外错误，对外错误保持不变
    pub fn or_public(self, fallback: fn(String) -> AppError) -> Self {
        match self {
            AppError::Store(_) | AppError::Config(_) | AppError::Seed(_) => {
                fallback(self.to_string())
            }
            public => public,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
