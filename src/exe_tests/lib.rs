mod fixtures;

mod concurrency_tests;
mod guard_tests;

// RUST_LOG overrides; defaults to tracing the registry
pub fn init_logging()
{
    let _ = colog::basic_builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Warn)
        .filter_module("enum_sigil", log::LevelFilter::Trace)
        .parse_default_env()
        .try_init();
}
