//! Unit tests for task management.
