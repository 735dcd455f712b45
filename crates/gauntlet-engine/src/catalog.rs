//! Test catalogs - static descriptions of one module's tests
//!
//! A catalog is registered once at startup and never mutated by the
//! engine. It carries the ordered test records, the module's lifecycle
//! hooks, and the optional policy that decides whether a record's
//! disabled bits mean "disabled right now".

use serde::Serialize;

/// Executable logic of one test. Success is `Ok(())`; any `Err` counts
/// as a failure with the given message.
pub type TestFn = fn() -> Result<(), String>;

/// A lifecycle hook. Module setup failure aborts the module's run;
/// every other hook failure is reported as a warning and execution
/// continues.
pub type HookFn = fn() -> Result<(), String>;

/// Disabling policy: maps a record's raw disabled bits to a boolean
/// "is disabled now" decision.
pub type DisablePolicy = fn(u32) -> bool;

/// Static description of a single test.
///
/// Immutable after registration. A record without a bound function is
/// a configuration defect that aborts the module's run when selected.
#[derive(Debug, Clone)]
pub struct TestRecord {
    description: String,
    known_issue: Option<String>,
    func: Option<TestFn>,
    disabled: u32,
}

impl TestRecord {
    /// Create a record bound to a test function.
    pub fn new(description: impl Into<String>, func: TestFn) -> Self {
        Self {
            description: description.into(),
            known_issue: None,
            func: Some(func),
            disabled: 0,
        }
    }

    /// Create a record with no function bound. Selecting it at run
    /// time is a fatal configuration error for the module.
    pub fn placeholder(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            known_issue: None,
            func: None,
            disabled: 0,
        }
    }

    /// Mark this test as a documented known issue. The test is never
    /// invoked and is tallied separately from failures.
    pub fn with_known_issue(mut self, issue: impl Into<String>) -> Self {
        self.known_issue = Some(issue.into());
        self
    }

    /// Set the raw disabled bits. Without a catalog-level policy, any
    /// non-zero value means disabled.
    pub fn with_disabled(mut self, flags: u32) -> Self {
        self.disabled = flags;
        self
    }

    /// Human-readable description of the test.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Known-issue text, if any.
    pub fn known_issue(&self) -> Option<&str> {
        self.known_issue.as_deref()
    }

    /// The bound test function, if any.
    pub fn func(&self) -> Option<TestFn> {
        self.func
    }

    /// Raw disabled bits as registered.
    pub fn disabled_flags(&self) -> u32 {
        self.disabled
    }
}

/// Status of a test in a read-only listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "detail")]
pub enum ListStatus {
    /// Runs normally when selected.
    Normal,
    /// Excluded by static flag or runtime policy.
    Disabled,
    /// Documented unresolved defect; never executed.
    KnownIssue(String),
}

/// One row of a catalog listing. Indices are 1-based, matching what
/// run output shows to users.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub index: usize,
    pub description: String,
    #[serde(flatten)]
    pub status: ListStatus,
}

/// A named, ordered collection of test records plus module metadata
/// and lifecycle hooks.
///
/// Hooks are explicitly optional; an absent hook is a no-op at every
/// call site in the engine.
#[derive(Debug, Clone)]
pub struct Catalog {
    id: String,
    description: String,
    tests: Vec<TestRecord>,
    list_comment: Option<String>,
    summary_comment: Option<String>,
    setup: Option<HookFn>,
    teardown: Option<HookFn>,
    pre_test: Option<HookFn>,
    post_test: Option<HookFn>,
    disable_policy: Option<DisablePolicy>,
}

impl Catalog {
    /// Create a catalog from its identifier, header description, and
    /// ordered test records. Index order is significant: it defines
    /// the 1-based numbering shown to users for the process lifetime.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        tests: Vec<TestRecord>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            tests,
            list_comment: None,
            summary_comment: None,
            setup: None,
            teardown: None,
            pre_test: None,
            post_test: None,
            disable_policy: None,
        }
    }

    /// Free-text comment appended to list headers.
    pub fn with_list_comment(mut self, comment: impl Into<String>) -> Self {
        self.list_comment = Some(comment.into());
        self
    }

    /// Free-text comment appended to the run summary.
    pub fn with_summary_comment(mut self, comment: impl Into<String>) -> Self {
        self.summary_comment = Some(comment.into());
        self
    }

    /// Module setup hook, run once before any test. Failure aborts the
    /// module's run before any test executes.
    pub fn with_setup(mut self, hook: HookFn) -> Self {
        self.setup = Some(hook);
        self
    }

    /// Module teardown hook, run once after the test loop completes
    /// normally.
    pub fn with_teardown(mut self, hook: HookFn) -> Self {
        self.teardown = Some(hook);
        self
    }

    /// Per-test setup hook, run before each invoked test.
    pub fn with_pre_test(mut self, hook: HookFn) -> Self {
        self.pre_test = Some(hook);
        self
    }

    /// Per-test teardown hook, run after each invoked test.
    pub fn with_post_test(mut self, hook: HookFn) -> Self {
        self.post_test = Some(hook);
        self
    }

    /// Install a disabling policy. With a policy the record's raw bits
    /// are delegated entirely to it; without one, non-zero bits mean
    /// disabled.
    pub fn with_disable_policy(mut self, policy: DisablePolicy) -> Self {
        self.disable_policy = Some(policy);
        self
    }

    /// Module identifier, unique across the registry.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Header description shown for runs and listings.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of registered tests.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// True when the catalog has no tests.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// The ordered test records.
    pub fn records(&self) -> &[TestRecord] {
        &self.tests
    }

    pub fn list_comment(&self) -> Option<&str> {
        self.list_comment.as_deref()
    }

    pub fn summary_comment(&self) -> Option<&str> {
        self.summary_comment.as_deref()
    }

    pub(crate) fn setup(&self) -> Option<HookFn> {
        self.setup
    }

    pub(crate) fn teardown(&self) -> Option<HookFn> {
        self.teardown
    }

    pub(crate) fn pre_test(&self) -> Option<HookFn> {
        self.pre_test
    }

    pub(crate) fn post_test(&self) -> Option<HookFn> {
        self.post_test
    }

    /// Apply the tagged disabling policy to one record.
    pub fn is_disabled(&self, record: &TestRecord) -> bool {
        match self.disable_policy {
            Some(policy) => policy(record.disabled),
            None => record.disabled != 0,
        }
    }

    /// Read-only projection over the catalog for external rendering.
    /// Never touches selection masks or outcome counters.
    pub fn list(&self) -> Vec<ListEntry> {
        self.tests
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let status = if self.is_disabled(record) {
                    ListStatus::Disabled
                } else if let Some(issue) = record.known_issue() {
                    ListStatus::KnownIssue(issue.to_string())
                } else {
                    ListStatus::Normal
                };
                ListEntry {
                    index: i + 1,
                    description: record.description().to_string(),
                    status,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pass() -> Result<(), String> {
        Ok(())
    }

    #[test]
    fn test_record_builders() {
        let record = TestRecord::new("adds numbers", pass)
            .with_known_issue("overflow on 32-bit")
            .with_disabled(0b10);

        assert_eq!(record.description(), "adds numbers");
        assert_eq!(record.known_issue(), Some("overflow on 32-bit"));
        assert_eq!(record.disabled_flags(), 0b10);
        assert!(record.func().is_some());
    }

    #[test]
    fn test_placeholder_has_no_func() {
        let record = TestRecord::placeholder("not written yet");
        assert!(record.func().is_none());
    }

    #[test]
    fn test_disabled_boolean_interpretation() {
        let catalog = Catalog::new(
            "m",
            "Module",
            vec![
                TestRecord::new("on", pass),
                TestRecord::new("off", pass).with_disabled(1),
            ],
        );

        assert!(!catalog.is_disabled(&catalog.records()[0]));
        assert!(catalog.is_disabled(&catalog.records()[1]));
    }

    #[test]
    fn test_disabled_policy_delegation() {
        // Policy only honors bit 2; plain non-zero bits stay enabled.
        fn bit_two(flags: u32) -> bool {
            flags & 0b100 != 0
        }

        let catalog = Catalog::new(
            "m",
            "Module",
            vec![
                TestRecord::new("bit one", pass).with_disabled(0b001),
                TestRecord::new("bit two", pass).with_disabled(0b100),
            ],
        )
        .with_disable_policy(bit_two);

        assert!(!catalog.is_disabled(&catalog.records()[0]));
        assert!(catalog.is_disabled(&catalog.records()[1]));
    }

    #[test]
    fn test_list_projection() {
        let catalog = Catalog::new(
            "m",
            "Module",
            vec![
                TestRecord::new("first", pass),
                TestRecord::new("second", pass).with_disabled(1),
                TestRecord::new("third", pass).with_known_issue("flaky timer"),
            ],
        );

        let entries = catalog.list();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].index, 1);
        assert_eq!(entries[0].status, ListStatus::Normal);
        assert_eq!(entries[1].status, ListStatus::Disabled);
        assert_eq!(
            entries[2].status,
            ListStatus::KnownIssue("flaky timer".to_string())
        );
        assert_eq!(entries[2].index, 3);
    }

    #[test]
    fn test_disabled_takes_precedence_over_known_issue_in_listing() {
        let catalog = Catalog::new(
            "m",
            "Module",
            vec![TestRecord::new("both", pass)
                .with_disabled(1)
                .with_known_issue("tracked elsewhere")],
        );

        assert_eq!(catalog.list()[0].status, ListStatus::Disabled);
    }
}
