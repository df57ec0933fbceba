//! bean 定义
//!
//! 编译时注册表中的条目：元数据、零参数工厂、提供的类型视图以及注入点

use crate::injection::Inject;
use bean_common::{BeanMetadata, BoxError, InjectError, TypeInfo};
use std::any::Any;
use std::sync::Arc;

/// 类型擦除的 bean 实例
pub type BeanObject = Arc<dyn Any + Send + Sync>;

/// 类型擦除的 bean 视图，实际类型为 `Arc<T>`
pub type BeanView = Box<dyn Any + Send + Sync>;

/// bean 工厂函数类型
pub type BeanFactoryFn = Arc<dyn Fn() -> Result<BeanObject, BoxError> + Send + Sync>;

/// 视图转换函数类型
pub type ViewCastFn = Arc<dyn Fn(&BeanObject) -> Option<BeanView> + Send + Sync>;

/// 字段赋值函数类型
pub type FieldAssignFn = Arc<
    dyn Fn(&(dyn Any + Send + Sync), &(dyn Any + Send + Sync)) -> Result<(), InjectError>
        + Send
        + Sync,
>;

/// 可被注册的 bean 类型
///
/// 通常由 `#[derive(Bean)]` 生成实现
pub trait Bean: Send + Sync + Sized + 'static {
    /// 获取 bean 定义
    fn bean_definition() -> BeanDefinition;
}

/// bean 提供的类型视图
///
/// bean 自身的类型总是被提供；额外的视图让 bean 能以抽象类型（如 `dyn Trait`）被查询
#[derive(Clone)]
pub struct ProvidedType {
    /// 提供的类型信息
    pub type_info: TypeInfo,
    cast: ViewCastFn,
}

impl ProvidedType {
    /// bean 自身类型的视图
    pub fn of_self<B>() -> Self
    where
        B: Send + Sync + 'static,
    {
        Self {
            type_info: TypeInfo::of::<B>(),
            cast: Arc::new(|object: &BeanObject| {
                Arc::clone(object)
                    .downcast::<B>()
                    .ok()
                    .map(|bean| Box::new(bean) as BeanView)
            }),
        }
    }

    /// 以抽象类型 `U` 提供 bean `B`
    pub fn alias<B, U>(cast: fn(Arc<B>) -> Arc<U>) -> Self
    where
        B: Send + Sync + 'static,
        U: ?Sized + Send + Sync + 'static,
    {
        Self {
            type_info: TypeInfo::of::<U>(),
            cast: Arc::new(move |object: &BeanObject| {
                Arc::clone(object)
                    .downcast::<B>()
                    .ok()
                    .map(|bean| Box::new(cast(bean)) as BeanView)
            }),
        }
    }

    /// 把实例转换为该类型的视图
    pub fn cast(&self, object: &BeanObject) -> Option<BeanView> {
        (self.cast)(object)
    }
}

impl std::fmt::Debug for ProvidedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvidedType")
            .field("type_info", &self.type_info)
            .field("cast", &"<function>")
            .finish()
    }
}

/// 注入点
///
/// 对应字段上的注入标记：字段名、依赖类型以及把依赖写入字段的函数
#[derive(Clone)]
pub struct InjectionPoint {
    /// 字段名称
    pub field: &'static str,
    /// 依赖类型
    pub dependency: TypeInfo,
    assign: FieldAssignFn,
}

impl InjectionPoint {
    /// 为 bean `B` 的 `Inject<T>` 字段创建注入点
    pub fn new<B, T>(field: &'static str, accessor: fn(&B) -> &Inject<T>) -> Self
    where
        B: Send + Sync + 'static,
        T: ?Sized + Send + Sync + 'static,
    {
        Self {
            field,
            dependency: TypeInfo::of::<T>(),
            assign: Arc::new(
                move |target: &(dyn Any + Send + Sync), value: &(dyn Any + Send + Sync)| {
                    let bean = target
                        .downcast_ref::<B>()
                        .ok_or(InjectError::TargetMismatch {
                            expected: std::any::type_name::<B>(),
                        })?;
                    let value = value
                        .downcast_ref::<Arc<T>>()
                        .ok_or(InjectError::ValueMismatch {
                            expected: std::any::type_name::<T>(),
                        })?;
                    accessor(bean).set(Arc::clone(value))
                },
            ),
        }
    }

    /// 把依赖视图写入目标实例的字段
    pub fn assign(
        &self,
        target: &(dyn Any + Send + Sync),
        value: &(dyn Any + Send + Sync),
    ) -> Result<(), InjectError> {
        (self.assign)(target, value)
    }
}

impl std::fmt::Debug for InjectionPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectionPoint")
            .field("field", &self.field)
            .field("dependency", &self.dependency)
            .field("assign", &"<function>")
            .finish()
    }
}

/// bean 定义
#[derive(Clone)]
pub struct BeanDefinition {
    metadata: BeanMetadata,
    factory: BeanFactoryFn,
    provided_types: Vec<ProvidedType>,
    injection_points: Vec<InjectionPoint>,
}

impl BeanDefinition {
    /// 创建新的 bean 定义
    ///
    /// `factory` 是显式的零参数工厂，bean 自身类型自动作为第一个提供的视图
    pub fn new<B, F>(metadata: BeanMetadata, factory: F) -> Self
    where
        B: Send + Sync + 'static,
        F: Fn() -> Result<B, BoxError> + Send + Sync + 'static,
    {
        Self {
            metadata,
            factory: Arc::new(move || factory().map(|bean| Arc::new(bean) as BeanObject)),
            provided_types: vec![ProvidedType::of_self::<B>()],
            injection_points: Vec::new(),
        }
    }

    /// 使用 `Default` 作为工厂创建 bean 定义
    pub fn with_default<B>(metadata: BeanMetadata) -> Self
    where
        B: Default + Send + Sync + 'static,
    {
        Self::new(metadata, || Ok(B::default()))
    }

    /// 声明 bean 还以抽象类型 `U` 提供
    pub fn provides<B, U>(mut self, cast: fn(Arc<B>) -> Arc<U>) -> Self
    where
        B: Send + Sync + 'static,
        U: ?Sized + Send + Sync + 'static,
    {
        let provided = ProvidedType::alias::<B, U>(cast);
        if !self
            .provided_types
            .iter()
            .any(|existing| existing.type_info.id == provided.type_info.id)
        {
            self.provided_types.push(provided);
        }
        self
    }

    /// 添加注入点
    pub fn with_injection_point(mut self, point: InjectionPoint) -> Self {
        self.injection_points.push(point);
        self
    }

    /// 获取元数据
    pub fn metadata(&self) -> &BeanMetadata {
        &self.metadata
    }

    /// 获取 bean 类型信息
    pub fn type_info(&self) -> &TypeInfo {
        &self.metadata.type_info
    }

    /// 解析 bean 名称
    pub fn bean_name(&self) -> String {
        self.metadata.resolved_name()
    }

    /// 获取提供的类型视图
    pub fn provided_types(&self) -> &[ProvidedType] {
        &self.provided_types
    }

    /// 获取注入点
    pub fn injection_points(&self) -> &[InjectionPoint] {
        &self.injection_points
    }

    /// 调用工厂创建实例
    pub fn instantiate(&self) -> Result<BeanObject, BoxError> {
        (self.factory)()
    }
}

impl std::fmt::Debug for BeanDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanDefinition")
            .field("metadata", &self.metadata)
            .field("provided_types", &self.provided_types)
            .field("injection_points", &self.injection_points)
            .field("factory", &"<function>")
            .finish()
    }
}
