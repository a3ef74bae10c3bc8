//! Unit tests for the tracker domain and registry.
