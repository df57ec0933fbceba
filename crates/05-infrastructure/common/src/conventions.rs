//! 约定规范定义
//!
//! 提供 bean 命名和命名空间匹配的约定规范

/// 命名空间路径分隔符
pub const NAMESPACE_SEPARATOR: &str = "::";

/// 命名约定规范
#[derive(Debug)]
pub struct NamingConventions;

impl NamingConventions {
    /// 从类型简单名称推导默认 bean 名称
    ///
    /// 只把首字符转为小写，其余字符保持不变
    pub fn default_bean_name(simple_name: &str) -> String {
        let mut chars = simple_name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// 从完整类型名称中提取简单名称
    ///
    /// 去掉模块路径、泛型参数和 trait object 的附加约束
    pub fn simple_type_name(full_name: &str) -> &str {
        let base = full_name.trim_start_matches("dyn ");
        let base = base.split(['<', ' ']).next().unwrap_or(base);
        base.rsplit(NAMESPACE_SEPARATOR).next().unwrap_or(base)
    }

    /// 检查 `candidate` 是否位于 `namespace` 或其子命名空间中
    pub fn namespace_contains(namespace: &str, candidate: &str) -> bool {
        let namespace = namespace.trim().trim_end_matches(NAMESPACE_SEPARATOR);
        if namespace.is_empty() {
            return false;
        }

        match candidate.strip_prefix(namespace) {
            Some("") => true,
            Some(rest) => rest.starts_with(NAMESPACE_SEPARATOR),
            None => false,
        }
    }
}
