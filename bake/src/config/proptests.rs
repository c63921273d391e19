//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, GlobConfig, ProcessConfig};
use crate::logging::LogLevel;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn level_strategy() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Quiet),
        Just(LogLevel::Minimal),
        Just(LogLevel::Normal),
        Just(LogLevel::Verbose),
        Just(LogLevel::Diagnostic),
    ]
}

fn glob_strategy() -> impl Strategy<Value = GlobConfig> {
    (prop::option::of(any::<bool>()), prop::option::of(any::<bool>())).prop_map(
        |(case_sensitive, include_hidden)| GlobConfig {
            case_sensitive,
            include_hidden,
        },
    )
}

fn process_strategy() -> impl Strategy<Value = ProcessConfig> {
    (
        prop::option::of(1u64..100_000),
        prop::option::of(any::<bool>()),
        prop::option::of(prop::collection::btree_map("[A-Z]{1,4}", "[a-z]{0,4}", 0..4)),
    )
        .prop_map(|(timeout_ms, silent, environment)| ProcessConfig {
            timeout_ms,
            silent,
            environment,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(level_strategy()),
        prop::option::of(glob_strategy()),
        prop::option::of(process_strategy()),
    )
        .prop_map(|(verbosity, glob, process)| Config {
            verbosity,
            glob,
            process,
        })
}

fn merged(low: &Config, high: &Config) -> Config {
    let mut result = low.clone();
    ConfigMerger::merge_into(&mut result, high);
    result
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Values present in the higher source always win; absent ones fall through.
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let result = merged(&low, &high);
        prop_assert_eq!(result.verbosity, high.verbosity.or(low.verbosity));

        let field = |config: &Config, f: fn(&GlobConfig) -> Option<bool>| config.glob.as_ref().and_then(f);
        prop_assert_eq!(
            field(&result, |g| g.case_sensitive),
            field(&high, |g| g.case_sensitive).or(field(&low, |g| g.case_sensitive))
        );
        prop_assert_eq!(
            field(&result, |g| g.include_hidden),
            field(&high, |g| g.include_hidden).or(field(&low, |g| g.include_hidden))
        );

        let timeout = |config: &Config| config.process.as_ref().and_then(|p| p.timeout_ms);
        prop_assert_eq!(timeout(&result), timeout(&high).or(timeout(&low)));
    }

    // Merging an empty config changes nothing.
    #[test]
    fn config_merge_default_is_identity(config in config_strategy()) {
        let result = merged(&config, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Merging is idempotent.
    #[test]
    fn config_merge_idempotent(low in config_strategy(), high in config_strategy()) {
        let once = merged(&low, &high);
        let twice = merged(&once, &high);
        prop_assert_eq!(once, twice);
    }

    // Every environment key from either side survives, the higher value winning.
    #[test]
    fn config_merge_environment_union(low in process_strategy(), high in process_strategy()) {
        let low = Config { process: Some(low), ..Default::default() };
        let high = Config { process: Some(high), ..Default::default() };
        let result = merged(&low, &high);

        let environment = |config: &Config| -> BTreeMap<String, String> {
            config.process.as_ref().and_then(|p| p.environment.clone()).unwrap_or_default()
        };
        let (low_env, high_env, result_env) = (environment(&low), environment(&high), environment(&result));

        for (key, value) in &high_env {
            prop_assert_eq!(result_env.get(key), Some(value));
        }
        for (key, value) in &low_env {
            if !high_env.contains_key(key) {
                prop_assert_eq!(result_env.get(key), Some(value));
            }
        }
        prop_assert!(result_env.keys().all(|k| low_env.contains_key(k) || high_env.contains_key(k)));
    }
}
