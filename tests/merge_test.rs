//! Tests for merging per-branch collectors after parallel sub-validation.
//!
//! The collector itself is single-threaded; concurrent branches each own a
//! collector and the owning thread merges the results via `add_errors`.

use std::sync::Arc;
use std::thread;

use faultline::{
    CollectorConfig, ConstraintError, ErrorCollector, ErrorContext, Pointer,
};
use indexmap::IndexMap;

#[test]
fn test_per_branch_collectors_merge_on_owning_thread() {
    let config = Arc::new(CollectorConfig::new());

    let handles: Vec<_> = (0..4)
        .map(|branch| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                let mut collector = ErrorCollector::new(config);
                let path = Pointer::root().push_property("items").push_index(branch);
                collector
                    .add_error(Some(&ConstraintError::Type), Some(&path), IndexMap::new())
                    .unwrap();
                collector.into_validation()
            })
        })
        .collect();

    let mut owner = ErrorCollector::new(config.clone());
    for handle in handles {
        if let stillwater::Validation::Failure(errors) = handle.join().unwrap() {
            owner.add_errors(errors.into_vec());
        }
    }

    assert_eq!(owner.num_errors(ErrorContext::ALL), 4);
    assert_eq!(owner.error_mask(), ErrorContext::DOCUMENT_VALIDATION);

    let properties: Vec<String> = owner
        .get_errors(ErrorContext::ALL)
        .iter()
        .map(|r| r.property.clone())
        .collect();
    for branch in 0..4 {
        assert!(properties.contains(&format!("items[{}]", branch)));
    }
}

#[test]
fn test_shared_config_context_switch_is_visible_to_branches() {
    let config = Arc::new(CollectorConfig::new());
    config.set_error_context(ErrorContext::SCHEMA_VALIDATION);

    let mut collector = ErrorCollector::new(config.clone());
    collector
        .add_error(Some(&ConstraintError::Required), None, IndexMap::new())
        .unwrap();

    assert_eq!(collector.error_mask(), ErrorContext::SCHEMA_VALIDATION);
}
