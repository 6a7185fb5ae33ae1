use crate::error::{AppError, AppResult, ConfigError};
use std::path::PathBuf;
use std::str::FromStr;

/// 程序配置
///
/// 进程启动时创建一次，传给题库、HTTP 层和应用，生命周期与进程相同。
#[derive(Clone, Debug)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 种子数据文件（TOML），不存在时以空题库启动
    pub seed_file: PathBuf,
    /// 允许跨域的来源，包含 "*" 时允许任意来源
    pub cors_allowed_origins: Vec<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            seed_file: PathBuf::from("data/trivia.toml"),
            cors_allowed_origins: vec!["*".to_string()],
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，未设置的项使用默认值
    ///
    /// # 环境变量
    /// - `TRIVIA_HOST` / `TRIVIA_PORT`
    /// - `SEED_FILE`
    /// - `CORS_ALLOWED_ORIGINS`（逗号分隔）
    /// - `VERBOSE_LOGGING`
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源读取配置（便于测试）
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        Ok(Self {
            host: lookup("TRIVIA_HOST").unwrap_or(default.host),
            port: parse_var(&lookup, "TRIVIA_PORT", "u16")?.unwrap_or(default.port),
            seed_file: lookup("SEED_FILE")
                .map(PathBuf::from)
                .unwrap_or(default.seed_file),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| split_origins(&v))
                .unwrap_or(default.cors_allowed_origins),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
        })
    }

    /// 监听地址，主机名在绑定时解析
    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var_name: &str, expected_type: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value.trim().parse().map(Some).map_err(|_| {
            AppError::from(ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value: value.clone(),
                expected_type: expected_type.to_string(),
            })
        }),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.cors_allowed_origins, vec!["*"]);
        assert_eq!(config.bind_address(), ("127.0.0.1", 5000));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TRIVIA_HOST", "localhost"),
            ("TRIVIA_PORT", "8080"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, http://example.com,"),
            ("VERBOSE_LOGGING", "true"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), ("localhost", 8080));
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "http://example.com"]
        );
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[("TRIVIA_PORT", "abc")])).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::EnvVarParseFailed { ref var_name, .. }) if var_name == "TRIVIA_PORT"
        ));
    }
}
