//! 应用上下文配置
//!
//! 配置来源按优先级从低到高：默认值、`config/context.*` 文件（可选）、
//! `BEAN_CONTEXT_` 前缀的环境变量。

use bean_common::{ContextError, ContextResult};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, error};

/// 应用上下文配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// 是否允许同名 bean 覆盖（后注册者生效）
    pub allow_bean_name_overriding: bool,
    /// 是否通过 tracing 输出容器事件
    pub log_diagnostics: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            allow_bean_name_overriding: false,
            log_diagnostics: true,
        }
    }
}

impl ContextConfig {
    /// 环境变量前缀
    pub const ENV_PREFIX: &'static str = "BEAN_CONTEXT";

    /// 默认配置文件（不含扩展名）
    pub const DEFAULT_FILE: &'static str = "config/context";

    /// 从默认配置文件和环境变量加载
    pub fn load() -> ContextResult<Self> {
        Self::build(
            Config::builder()
                .add_source(File::with_name(Self::DEFAULT_FILE).required(false))
                .add_source(Environment::with_prefix(Self::ENV_PREFIX).try_parsing(true)),
        )
    }

    /// 从指定文件加载，格式由扩展名决定
    pub fn from_file(path: impl AsRef<Path>) -> ContextResult<Self> {
        let path = path.as_ref();
        debug!("加载上下文配置文件: {}", path.display());
        Self::build(Config::builder().add_source(File::from(path)))
    }

    /// 设置是否允许同名 bean 覆盖
    pub fn with_bean_name_overriding(mut self, allow: bool) -> Self {
        self.allow_bean_name_overriding = allow;
        self
    }

    /// 设置是否输出容器事件日志
    pub fn with_log_diagnostics(mut self, enabled: bool) -> Self {
        self.log_diagnostics = enabled;
        self
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> ContextResult<Self> {
        builder
            .build()
            .and_then(|config| config.try_deserialize::<Self>())
            .map_err(|err| {
                error!("加载上下文配置失败: {}", err);
                ContextError::Configuration {
                    source: Box::new(err),
                }
            })
    }
}
