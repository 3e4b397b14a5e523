//! Python bindings via PyO3
//!
//! This module provides the Python interface for symmetric_summarizer.

pub mod native;

use pyo3::prelude::*;

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_class::<native::PyScoredSentence>()?;
    m.add_function(wrap_pyfunction!(native::summarize, m)?)?;
    m.add_function(wrap_pyfunction!(native::summarize_scored, m)?)?;

    Ok(())
}
