//! 错误类型定义

use thiserror::Error;

/// 装箱的外部错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// bean 查询错误类型
///
/// 查询期错误可以恢复，直接返回给调用方
#[derive(Error, Debug)]
pub enum BeanError {
    #[error("没有找到匹配的 bean: 类型 {type_name}{}", display_name(.name))]
    NoSuchBean {
        type_name: String,
        name: Option<String>,
    },

    #[error("bean 不唯一: 类型 {type_name} 匹配到 {} 个候选 {candidates:?}", .candidates.len())]
    NoUniqueBean {
        type_name: String,
        candidates: Vec<String>,
    },
}

fn display_name(name: &Option<String>) -> String {
    name.as_ref()
        .map(|name| format!(", 名称 {}", name))
        .unwrap_or_default()
}

impl BeanError {
    /// 创建按类型查询失败的错误
    pub fn no_such_bean(type_name: impl Into<String>) -> Self {
        Self::NoSuchBean {
            type_name: type_name.into(),
            name: None,
        }
    }

    /// 创建按名称和类型查询失败的错误
    pub fn no_such_named_bean(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NoSuchBean {
            type_name: type_name.into(),
            name: Some(name.into()),
        }
    }

    /// 创建候选不唯一的错误
    pub fn no_unique_bean(type_name: impl Into<String>, mut candidates: Vec<String>) -> Self {
        candidates.sort();
        Self::NoUniqueBean {
            type_name: type_name.into(),
            candidates,
        }
    }
}

/// 字段注入错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectError {
    #[error("注入目标类型不匹配: 期望 {expected}")]
    TargetMismatch { expected: &'static str },

    #[error("注入值类型不匹配: 期望 Arc<{expected}>")]
    ValueMismatch { expected: &'static str },

    #[error("字段已经注入过: {type_name}")]
    AlreadyInjected { type_name: &'static str },
}

/// 容器构建错误类型
///
/// 构建期错误是致命的，容器不会以部分初始化的状态返回
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("bean 创建失败: {bean_name} ({type_name}), 原因: {source}")]
    ConstructionFailure {
        bean_name: String,
        type_name: String,
        source: BoxError,
    },

    #[error("前置条件不满足: {message}")]
    PreconditionViolation { message: String },

    #[error("bean 名称重复: {name}, 已注册 {existing_type}, 新注册 {new_type}")]
    DuplicateBeanName {
        name: String,
        existing_type: String,
        new_type: String,
    },

    #[error("字段注入失败: {bean_name}.{field}, 原因: {source}")]
    Injection {
        bean_name: String,
        field: String,
        #[source]
        source: InjectError,
    },

    #[error(transparent)]
    Lookup(#[from] BeanError),

    #[error("容器配置加载失败: {source}")]
    Configuration { source: BoxError },
}

impl ContextError {
    /// 创建前置条件错误
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            message: message.into(),
        }
    }

    /// 是否为查询期错误的透传
    pub fn as_lookup(&self) -> Option<&BeanError> {
        match self {
            Self::Lookup(err) => Some(err),
            _ => None,
        }
    }
}

/// 结果类型别名
pub type BeanResult<T> = Result<T, BeanError>;
pub type ContextResult<T> = Result<T, ContextError>;
