use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const SEE_RETURN_TYPE_ASSERTION_FAILED: u32 = 9001;
    pub const SEE_PSALM_ISSUE_ASSERTION_FAILED: u32 = 9002;
    pub const MALFORMED_ASSERTION: u32 = 9003;
    pub const TRACE: u32 = 9100;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const SEE_RETURN_TYPE_ASSERTION_FAILED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::SEE_RETURN_TYPE_ASSERTION_FAILED,
        kind: "SeeReturnTypeAssertionFailed",
        category: DiagnosticCategory::Error,
        message: "Actual return type: {0}, Expected return type: {1}",
    };

    pub const SEE_PSALM_ISSUE_ASSERTION_FAILED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::SEE_PSALM_ISSUE_ASSERTION_FAILED,
        kind: "SeePsalmIssueAssertionFailed",
        category: DiagnosticCategory::Error,
        message: "Expected issues were not raised:{0}",
    };

    pub const MALFORMED_ASSERTION: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::MALFORMED_ASSERTION,
        kind: "MalformedAssertion",
        category: DiagnosticCategory::Error,
        message: "Malformed '{0}' assertion: its arguments could not be resolved to the expected types",
    };

    pub const TRACE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TRACE,
        kind: "Trace",
        category: DiagnosticCategory::Message,
        message: "{0}",
    };
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::SEE_RETURN_TYPE_ASSERTION_FAILED,
    diagnostic_messages::SEE_PSALM_ISSUE_ASSERTION_FAILED,
    diagnostic_messages::MALFORMED_ASSERTION,
    diagnostic_messages::TRACE,
];
