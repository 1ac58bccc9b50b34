//! Data models for employee records.

pub mod employee;

pub use employee::{EmployeeRecord, Role, Squad};
