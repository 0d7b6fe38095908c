//! Python bindings via PyO3
//!
//! This module provides the Python interface for rapid_summarize.

pub mod native;

use pyo3::prelude::*;

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("EMPTY_INPUT_PROMPT", crate::boundary::EMPTY_INPUT_PROMPT)?;

    m.add_class::<native::PyRankedSentence>()?;
    m.add_class::<native::PySummary>()?;
    m.add_class::<native::PySummarizer>()?;
    m.add_function(wrap_pyfunction!(native::summarize, m)?)?;

    Ok(())
}
