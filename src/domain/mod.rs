//! Domain layer - pure types and pure logic, no I/O.

pub mod chat;
