use super::AssertionReconciler;
use crate::assertions::{AssertionBag, ExpectedIssue, HaveCodeData, SeePsalmIssuesData, issue_key};
use crate::host::Host;
use rustc_hash::FxHashSet;
use std::fmt::Write;
use tracing::debug;
use typekit_common::{Diagnostic, diagnostic_messages};

/// Matches expected issues against the issues the host recorded inside the
/// code block.
///
/// Every recorded issue of the file whose key is expected and whose range lies
/// within the `haveCode` block is handled and removed from the host's sink.
/// Expected issues left unmatched are reported together, once per key.
pub struct SeePsalmIssuesReconciler;

impl SeePsalmIssuesReconciler {
    /// Remove handled issues from the sink and return the unmatched ones.
    fn handle(
        see_issues: &SeePsalmIssuesData,
        have_code: &HaveCodeData,
        host: &mut dyn Host,
    ) -> Vec<ExpectedIssue> {
        let expected: FxHashSet<String> = see_issues.issues.iter().map(ExpectedIssue::key).collect();
        let block = &have_code.code_location;
        let file = &see_issues.code_location.file;

        let handled: Vec<_> = host
            .issues_for(file)
            .into_iter()
            .filter(|issue| {
                expected.contains(&issue_key(&issue.kind, &issue.message_text))
                    && block.contains_range(issue.from(), issue.to())
            })
            .collect();

        let mut handled_keys = FxHashSet::default();
        for issue in &handled {
            host.remove(file, &issue.kind, issue.from());
            handled_keys.insert(issue_key(&issue.kind, &issue.message_text));
        }
        debug!(handled = handled.len(), expected = expected.len(), "expected issues matched");

        let mut reported = FxHashSet::default();
        see_issues
            .issues
            .iter()
            .filter(|issue| {
                let key = issue.key();
                !handled_keys.contains(&key) && reported.insert(key)
            })
            .cloned()
            .collect()
    }

    fn render(unmatched: &[ExpectedIssue]) -> String {
        let mut listing = String::new();
        for issue in unmatched {
            let _ = write!(listing, "\n[{}]: {}", issue.kind, issue.message);
        }
        listing
    }
}

impl AssertionReconciler for SeePsalmIssuesReconciler {
    fn reconcile(&self, bag: &AssertionBag, host: &mut dyn Host) -> Option<Diagnostic> {
        let see_issues = bag.get::<SeePsalmIssuesData>()?;
        let have_code = bag.get::<HaveCodeData>()?;

        let unmatched = Self::handle(see_issues, have_code, host);
        if unmatched.is_empty() {
            return None;
        }

        Some(Diagnostic::from_message(
            &diagnostic_messages::SEE_PSALM_ISSUE_ASSERTION_FAILED,
            see_issues.code_location.clone(),
            &[&Self::render(&unmatched)],
        ))
    }
}
