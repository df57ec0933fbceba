use bean_macros::Bean;
use context_abstractions::{Bean as _, Inject};

#[derive(Default, Bean)]
struct SecondBean;

#[derive(Default, Bean)]
#[bean(name = "first")]
struct FirstBean {
    #[inject]
    bean: Inject<SecondBean>,
}

fn main() {
    let definition = FirstBean::bean_definition();
    assert_eq!(definition.bean_name(), "first");
    assert_eq!(definition.injection_points().len(), 1);
    assert_eq!(SecondBean::bean_definition().bean_name(), "secondBean");
    assert!(!FirstBean::default().bean.is_injected());
}
