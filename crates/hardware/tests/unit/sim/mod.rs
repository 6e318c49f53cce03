
/// Final-state and configuration reports.
pub mod report;
