use super::AssertionReconciler;
use crate::assertions::{AssertionBag, HaveCodeData, SeeReturnTypeData};
use crate::host::Host;
use tracing::debug;
use typekit_common::{Diagnostic, diagnostic_messages};
use typekit_solver::{Union, is_type_equals_to_type};

/// Compares the code block's return type with the expected one: by canonical
/// identity when invariant, otherwise by containment (`actual ⊑ expected`).
pub struct SeeReturnTypeReconciler;

impl SeeReturnTypeReconciler {
    fn is_valid(host: &dyn Host, expected: &Union, actual: &Union, invariant: bool) -> bool {
        if invariant {
            is_type_equals_to_type(actual, expected)
        } else {
            host.is_type_contained_by_type(actual, expected)
        }
    }
}

impl AssertionReconciler for SeeReturnTypeReconciler {
    fn reconcile(&self, bag: &AssertionBag, host: &mut dyn Host) -> Option<Diagnostic> {
        let have_code = bag.get::<HaveCodeData>()?;
        let see_return_type = bag.get::<SeeReturnTypeData>()?;

        let actual = &have_code.actual_return_type;
        let expected = &see_return_type.expected_return_type;
        let valid = Self::is_valid(host, expected, actual, see_return_type.invariant);
        debug!(
            actual = %actual,
            expected = %expected,
            invariant = see_return_type.invariant,
            valid,
            "return type reconciled"
        );
        if valid {
            return None;
        }

        Some(Diagnostic::from_message(
            &diagnostic_messages::SEE_RETURN_TYPE_ASSERTION_FAILED,
            see_return_type.code_location.clone(),
            &[&actual.id(), &expected.id()],
        ))
    }
}
