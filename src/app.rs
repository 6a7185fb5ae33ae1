//! 应用生命周期
//!
//! 配置 → 种子数据 → 题库 → 服务 → HTTP 路由 → 监听，直到收到退出信号。

use crate::api::{build_router, AppState};
use crate::config::Config;
use crate::infrastructure::{MemoryStore, QuestionStore, RandomChoice, ThreadRandom};
use crate::models::{load_seed, SeedData};
use crate::services::{QuestionService, QuizSelector};
use crate::utils::logging::{log_shutdown, log_startup};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    store: Arc<MemoryStore>,
    random: Arc<dyn RandomChoice>,
}

impl App {
    /// 初始化应用：加载种子数据并创建题库
    pub async fn initialize(config: Config) -> Result<Self> {
        let seed = load_seed_or_empty(&config).await?;
        Ok(Self::with_store(
            config,
            Arc::new(MemoryStore::from_seed(seed)),
            Arc::new(ThreadRandom),
        ))
    }

    /// 使用已有的题库与随机源创建应用
    pub fn with_store(
        config: Config,
        store: Arc<MemoryStore>,
        random: Arc<dyn RandomChoice>,
    ) -> Self {
        Self {
            config,
            store,
            random,
        }
    }

    /// 题库
    pub fn store(&self) -> Arc<MemoryStore> {
        self.store.clone()
    }

    /// 构建 HTTP 路由
    pub fn router(&self) -> Router {
        let store: Arc<dyn QuestionStore> = self.store.clone();
        let state = AppState {
            questions: QuestionService::new(store.clone()),
            quiz: QuizSelector::new(store, self.random.clone()),
        };
        build_router(state, &self.config)
    }

    /// 绑定监听地址，主机名（如 `localhost`）由系统解析
    pub async fn bind(&self) -> Result<TcpListener> {
        let (host, port) = self.config.bind_address();
        TcpListener::bind((host, port))
            .await
            .with_context(|| format!("无法监听地址: {}:{}", host, port))
    }

    /// 运行应用主逻辑，直到收到 Ctrl-C
    pub async fn run(self) -> Result<()> {
        let listener = self.bind().await?;
        let addr = listener.local_addr().context("无法获取监听地址")?;

        log_startup(
            addr,
            self.store.categories()?.len(),
            self.store.count()?,
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP 服务异常退出")?;

        log_shutdown();
        Ok(())
    }
}

/// 加载种子数据；文件不存在时以空题库启动
async fn load_seed_or_empty(config: &Config) -> Result<SeedData> {
    if !config.seed_file.exists() {
        warn!(
            "⚠️ 种子数据文件不存在: {}，以空题库启动",
            config.seed_file.display()
        );
        return Ok(SeedData::default());
    }

    info!("\n📁 正在加载种子数据: {}", config.seed_file.display());
    load_seed(&config.seed_file)
        .await
        .with_context(|| format!("无法加载种子数据: {}", config.seed_file.display()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("⚠️ 无法监听退出信号: {}", e);
        std::future::pending::<()>().await;
    }
}
