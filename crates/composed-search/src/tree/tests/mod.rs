//! Tests for the composed-tree arena.
