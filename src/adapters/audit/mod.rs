pub mod file_audit_log;
