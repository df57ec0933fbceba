use bean_macros::Bean;
use context_abstractions::Bean as _;

trait Repository: Send + Sync {
    fn table(&self) -> &'static str;
}

#[derive(Bean)]
#[bean(factory = "UserRepository::new", provides(dyn Repository))]
struct UserRepository {
    table: &'static str,
}

impl UserRepository {
    fn new() -> Self {
        Self { table: "users" }
    }
}

impl Repository for UserRepository {
    fn table(&self) -> &'static str {
        self.table
    }
}

fn main() {
    let definition = UserRepository::bean_definition();
    assert_eq!(definition.provided_types().len(), 2);
    assert!(definition.provided_types()[1].type_info.is::<dyn Repository>());
}
