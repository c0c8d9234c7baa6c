use super::{AssertionCollector, CollectingContext};
use crate::assertions::{AssertionBag, AssertionName, ExpectedIssue, SeePsalmIssuesData};
use typekit_solver::{Record, as_single_atomic_of, literal_string_value};

/// `seePsalmIssue(kind, message, args?)`: appends one expected issue.
///
/// `#[name]` markers in the message are replaced with the literal string
/// values of the `args` record. If any value is not a literal string the
/// message is kept verbatim.
pub struct SeePsalmIssuesCollector;

impl SeePsalmIssuesCollector {
    fn literal_arg(context: &CollectingContext<'_>, position: usize) -> Option<String> {
        let ty = context.arg_type(position)?;
        literal_string_value(&ty).map(str::to_string)
    }

    fn replacements(context: &CollectingContext<'_>) -> Option<Vec<(String, String)>> {
        let ty = context.arg_type(2)?;
        let record = as_single_atomic_of::<Record>(&ty)?;
        record
            .properties
            .iter()
            .map(|(name, value)| {
                literal_string_value(value).map(|value| (format!("#[{name}]"), value.to_string()))
            })
            .collect()
    }

    fn format_message(template: &str, context: &CollectingContext<'_>) -> String {
        match Self::replacements(context) {
            Some(replacements) => substitute(template, &replacements),
            None => template.to_string(),
        }
    }
}

/// Replace markers in one left-to-right pass. At each position the longest
/// matching marker wins; replaced text is not scanned again.
fn substitute(template: &str, replacements: &[(String, String)]) -> String {
    let mut ordered: Vec<&(String, String)> =
        replacements.iter().filter(|(marker, _)| !marker.is_empty()).collect();
    ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    'scan: while let Some(ch) = rest.chars().next() {
        for (marker, value) in &ordered {
            if let Some(after) = rest.strip_prefix(marker.as_str()) {
                out.push_str(value);
                rest = after;
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

impl AssertionCollector for SeePsalmIssuesCollector {
    fn is_supported(&self, context: &CollectingContext<'_>) -> bool {
        context.assertion_name == AssertionName::SeePsalmIssue
    }

    fn collect(&self, bag: &AssertionBag, context: &CollectingContext<'_>) -> Option<AssertionBag> {
        let kind = Self::literal_arg(context, 0)?;
        let template = Self::literal_arg(context, 1)?;
        let message = Self::format_message(&template, context);

        let existing = bag
            .get::<SeePsalmIssuesData>()
            .cloned()
            .unwrap_or_else(|| SeePsalmIssuesData::empty(context.code_location()));

        Some(bag.with(existing.concat(ExpectedIssue::new(kind, message))))
    }
}

#[cfg(test)]
#[path = "../../../tests/substitute_tests.rs"]
mod tests;
