mod plain;

pub(crate) use plain::PlainTextFormatter;

use stepline_access::AuditLog;

pub(crate) trait OutputFormatter {
    fn format_outcome(&self, passed: bool) -> String;
    fn format_audit_log(&self, audit: &AuditLog) -> String;
}
