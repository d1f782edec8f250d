
use enlighter::{tokenizer::rule::RuleTable, LanguageRegistry, RuleLibrary};
use lazy_static::lazy_static;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

lazy_static! {
    pub static ref LIBRARY: RuleLibrary = RuleLibrary::new().expect("library compiles");
    pub static ref GENERIC: RuleTable = build("generic");
    pub static ref JAVASCRIPT: RuleTable = build("javascript");
    pub static ref SOLIDITY: RuleTable = build("solidity");
}

fn build(language: &str) -> RuleTable {
    LanguageRegistry::builtin()
        .build(language, &LIBRARY)
        .expect("built-in table builds")
}

pub fn builtin_tables() -> [&'static RuleTable; 3] {
    [&*GENERIC, &*JAVASCRIPT, &*SOLIDITY]
}
