use std::fmt::Write;

use stepline_access::AuditLog;

use super::OutputFormatter;

pub(crate) struct PlainTextFormatter;

impl OutputFormatter for PlainTextFormatter {
    fn format_outcome(&self, passed: bool) -> String {
        format!("Pipeline step result: {passed}")
    }

    fn format_audit_log(&self, audit: &AuditLog) -> String {
        if audit.is_empty() {
            return "Audit log: (empty)\n".to_string();
        }

        let mut output = String::from("Audit log:\n");
        for entry in audit.entries() {
            let _ = writeln!(output, "  {entry}");
        }
        output
    }
}
