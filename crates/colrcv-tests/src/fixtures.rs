//! Known-value conversion fixtures
//!
//! Each fixture names an input colour and the colour expected after
//! converting it to the expected colour's model. Values come from
//! published colrcv results and hand-checked formula evaluations; all
//! are accurate to [`crate::ALMOST`].

use anyhow::{Context, Result};
use colrcv_core::Color;
use serde::Deserialize;

const FIXTURES_JSON: &str = include_str!("../testdata/fixtures.json");

/// A single conversion fixture
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    /// Human-readable label, e.g. `hsl[108, 86, 86] -> rgb`
    pub name: String,
    pub input: Color,
    pub expected: Color,
}

/// Load every bundled fixture
pub fn load_fixtures() -> Result<Vec<Fixture>> {
    serde_json::from_str(FIXTURES_JSON).context("parse testdata/fixtures.json")
}
