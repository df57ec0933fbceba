//! 应用上下文集成测试
//!
//! 每个子模块是一个独立的命名空间，测试按命名空间构建上下文，互不干扰。

use bean_common::{BeanError, ContextError};
use context_abstractions::{BeanLookup, BeanLookupExt};
use context_impl::{ApplicationContext, ContextConfig};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

fn init_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// 问候 trait，由多个 bean 提供
pub trait Greeter: Send + Sync {
    fn greet(&self) -> &'static str;
}

mod demo {
    use bean_macros::Bean;
    use context_abstractions::Inject;

    #[derive(Debug, Default, Bean)]
    pub struct SecondBean;

    #[derive(Debug, Default, Bean)]
    pub struct FirstBean {
        #[inject]
        pub bean: Inject<SecondBean>,
    }

    pub mod nested {
        use super::FirstBean;
        use bean_macros::Bean;
        use context_abstractions::Inject;

        #[derive(Debug, Default, Bean)]
        pub struct ThirdBean {
            #[inject]
            pub first: Inject<FirstBean>,
        }
    }
}

mod named {
    use bean_macros::Bean;

    #[derive(Debug, Default, Bean)]
    #[bean(name = "customName")]
    pub struct Renamed;

    #[derive(Debug, Default, Bean)]
    #[bean(name = "  ")]
    pub struct BlankName;
}

mod greeters {
    use super::Greeter;
    use bean_macros::Bean;

    #[derive(Debug, Default, Bean)]
    #[bean(provides(dyn Greeter))]
    pub struct EnglishGreeter;

    impl Greeter for EnglishGreeter {
        fn greet(&self) -> &'static str {
            "hello"
        }
    }

    #[derive(Debug, Default, Bean)]
    #[bean(provides(dyn Greeter))]
    pub struct FrenchGreeter;

    impl Greeter for FrenchGreeter {
        fn greet(&self) -> &'static str {
            "bonjour"
        }
    }
}

mod greeting {
    use super::Greeter;
    use bean_macros::Bean;
    use context_abstractions::Inject;

    #[derive(Debug, Default, Bean)]
    #[bean(provides(dyn Greeter))]
    pub struct GermanGreeter;

    impl Greeter for GermanGreeter {
        fn greet(&self) -> &'static str {
            "hallo"
        }
    }

    #[derive(Default, Bean)]
    pub struct GreetingService {
        #[inject]
        pub greeter: Inject<dyn Greeter>,
    }

    impl GreetingService {
        pub fn welcome(&self) -> String {
            let greeting = self.greeter.get().map_or("", |greeter| greeter.greet());
            format!("{greeting}, world")
        }
    }
}

mod ambiguous {
    use super::Greeter;
    use bean_macros::Bean;
    use context_abstractions::Inject;

    #[derive(Debug, Default, Bean)]
    #[bean(provides(dyn Greeter))]
    pub struct LoudGreeter;

    impl Greeter for LoudGreeter {
        fn greet(&self) -> &'static str {
            "HELLO"
        }
    }

    #[derive(Debug, Default, Bean)]
    #[bean(provides(dyn Greeter))]
    pub struct QuietGreeter;

    impl Greeter for QuietGreeter {
        fn greet(&self) -> &'static str {
            "hello"
        }
    }

    #[derive(Default, Bean)]
    pub struct Announcer {
        #[inject]
        pub greeter: Inject<dyn Greeter>,
    }
}

mod duplicates {
    pub mod left {
        use bean_macros::Bean;

        #[derive(Debug, Default, Bean)]
        #[bean(name = "shared")]
        pub struct LeftBean;
    }

    pub mod right {
        use bean_macros::Bean;

        #[derive(Debug, Default, Bean)]
        #[bean(name = "shared")]
        pub struct RightBean;
    }
}

mod failing {
    use bean_macros::Bean;

    #[derive(Debug, Bean)]
    #[bean(try_factory = "Self::connect")]
    pub struct FailingBean;

    impl FailingBean {
        fn connect() -> Result<Self, std::io::Error> {
            Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "连接被拒绝",
            ))
        }
    }
}

mod factories {
    use bean_macros::Bean;

    #[derive(Debug, Bean)]
    #[bean(factory = "Counter::starting_at_ten")]
    pub struct Counter {
        pub start: u32,
    }

    impl Counter {
        fn starting_at_ten() -> Self {
            Self { start: 10 }
        }
    }
}

const DEMO: &str = concat!(module_path!(), "::demo");
const NAMED: &str = concat!(module_path!(), "::named");
const GREETERS: &str = concat!(module_path!(), "::greeters");
const GREETING: &str = concat!(module_path!(), "::greeting");
const AMBIGUOUS: &str = concat!(module_path!(), "::ambiguous");
const DUPLICATES: &str = concat!(module_path!(), "::duplicates");
const FAILING: &str = concat!(module_path!(), "::failing");
const FACTORIES: &str = concat!(module_path!(), "::factories");

#[test]
fn test_demo_namespace_wires_first_and_second_bean() -> anyhow::Result<()> {
    init_logger();
    let context = ApplicationContext::new(DEMO)?;

    let first = context.get_bean::<demo::FirstBean>()?;
    let second = context.get_bean::<demo::SecondBean>()?;

    assert!(Arc::ptr_eq(first.bean.get().expect("字段应该已注入"), &second));
    assert_eq!(
        context.bean_names(),
        vec!["firstBean", "secondBean", "thirdBean"]
    );
    Ok(())
}

#[test]
fn test_sub_namespace_beans_are_included() -> anyhow::Result<()> {
    let context = ApplicationContext::new(DEMO)?;

    let third = context.get_bean::<demo::nested::ThirdBean>()?;
    let first = context.get_bean::<demo::FirstBean>()?;
    assert!(Arc::ptr_eq(third.first.get().expect("字段应该已注入"), &first));

    let nested = ApplicationContext::new(concat!(module_path!(), "::demo::nested"));
    // 只扫描子命名空间时 FirstBean 不在容器中
    assert!(matches!(
        nested,
        Err(ContextError::Lookup(BeanError::NoSuchBean { .. }))
    ));
    Ok(())
}

#[test]
fn test_lookup_returns_same_instance_every_time() -> anyhow::Result<()> {
    let context = ApplicationContext::new(DEMO)?;

    let by_type = context.get_bean::<demo::SecondBean>()?;
    let by_name = context.get_bean_by_name::<demo::SecondBean>("secondBean")?;
    let all = context.get_all_beans::<demo::SecondBean>();

    assert!(Arc::ptr_eq(&by_type, &by_name));
    assert_eq!(all.len(), 1);
    assert!(Arc::ptr_eq(&all["secondBean"], &by_type));
    Ok(())
}

#[test]
fn test_lookup_of_unregistered_type_fails() -> anyhow::Result<()> {
    let context = ApplicationContext::new(DEMO)?;

    assert!(matches!(
        context.get_bean::<String>(),
        Err(BeanError::NoSuchBean { name: None, .. })
    ));
    assert!(matches!(
        context.get_bean_by_name::<demo::SecondBean>("firstBean"),
        Err(BeanError::NoSuchBean { name: Some(_), .. })
    ));
    assert!(context.get_all_beans::<String>().is_empty());
    Ok(())
}

#[test]
fn test_explicit_and_blank_names() -> anyhow::Result<()> {
    let context = ApplicationContext::new(NAMED)?;

    assert_eq!(context.bean_names(), vec!["blankName", "customName"]);
    let renamed = context.get_bean_by_name::<named::Renamed>("customName")?;
    assert!(Arc::ptr_eq(&renamed, &context.get_bean::<named::Renamed>()?));
    assert!(!context.contains_bean("renamed"));
    Ok(())
}

#[test]
fn test_trait_lookup_with_multiple_providers() -> anyhow::Result<()> {
    let context = ApplicationContext::new(GREETERS)?;

    match context.get_bean::<dyn Greeter>() {
        Err(BeanError::NoUniqueBean { candidates, .. }) => {
            assert_eq!(candidates, vec!["englishGreeter", "frenchGreeter"]);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("多个实现时不应返回唯一 bean"),
    }

    let greeters = context.get_all_beans::<dyn Greeter>();
    assert_eq!(greeters.len(), 2);
    assert_eq!(greeters["frenchGreeter"].greet(), "bonjour");

    let english = context.get_bean_by_name::<dyn Greeter>("englishGreeter")?;
    assert_eq!(english.greet(), "hello");

    // 具体类型仍然唯一
    let french = context.get_bean::<greeters::FrenchGreeter>()?;
    assert_eq!(french.greet(), "bonjour");
    Ok(())
}

#[test]
fn test_trait_injection_with_single_provider() -> anyhow::Result<()> {
    let context = ApplicationContext::new(GREETING)?;

    let service = context.get_bean::<greeting::GreetingService>()?;
    assert_eq!(service.welcome(), "hallo, world");
    Ok(())
}

#[test]
fn test_ambiguous_injection_aborts_construction() {
    let result = ApplicationContext::new(AMBIGUOUS);

    match result {
        Err(ContextError::Lookup(BeanError::NoUniqueBean { candidates, .. })) => {
            assert_eq!(candidates, vec!["loudGreeter", "quietGreeter"]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_duplicate_names_fail_unless_overriding_allowed() -> anyhow::Result<()> {
    let result = ApplicationContext::new(DUPLICATES);
    assert!(matches!(
        result,
        Err(ContextError::DuplicateBeanName { ref name, .. }) if name == "shared"
    ));

    let context = ApplicationContext::builder()
        .namespace(DUPLICATES)
        .config(ContextConfig::default().with_bean_name_overriding(true))
        .build()?;
    assert_eq!(context.bean_names(), vec!["shared"]);
    Ok(())
}

#[test]
fn test_failing_factory_aborts_construction() {
    match ApplicationContext::new(FAILING) {
        Err(ContextError::ConstructionFailure {
            bean_name, source, ..
        }) => {
            assert_eq!(bean_name, "failingBean");
            assert_eq!(source.to_string(), "连接被拒绝");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_explicit_factory_is_used() -> anyhow::Result<()> {
    let context = ApplicationContext::new(FACTORIES)?;

    assert_eq!(context.get_bean::<factories::Counter>()?.start, 10);
    Ok(())
}

#[test]
fn test_blank_namespace_is_rejected() {
    for namespace in ["", "  "] {
        assert!(matches!(
            ApplicationContext::new(namespace),
            Err(ContextError::PreconditionViolation { .. })
        ));
    }
}

#[test]
fn test_unknown_namespace_yields_empty_context() -> anyhow::Result<()> {
    let context = ApplicationContext::new(concat!(module_path!(), "::nowhere"))?;

    assert_eq!(context.bean_count(), 0);
    assert!(matches!(
        context.get_bean::<demo::FirstBean>(),
        Err(BeanError::NoSuchBean { .. })
    ));
    Ok(())
}

#[test]
fn test_concurrent_readers_see_same_instances() -> anyhow::Result<()> {
    let context = ApplicationContext::new(DEMO)?;
    let expected = context.get_bean::<demo::SecondBean>()?;

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let second = context
                        .get_bean::<demo::SecondBean>()
                        .expect("查询应该成功");
                    assert!(Arc::ptr_eq(&second, &expected));
                    let first = context.get_bean::<demo::FirstBean>().expect("查询应该成功");
                    assert!(Arc::ptr_eq(first.bean.get().expect("字段应该已注入"), &expected));
                }
            });
        }
    });
    Ok(())
}
