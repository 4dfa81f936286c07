pub mod audit_record;
pub mod board;
