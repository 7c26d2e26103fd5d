//! Python bindings for the mdlite parser.

use mdlite_core::{parse_inline as core_parse_inline, Block, Inline, Parser as CoreParser};
use pyo3::prelude::*;
use pyo3::types::PyList;

// ============================================================================
// Block Types
// ============================================================================

/// Header with its level and inline content.
#[pyclass(frozen, get_all, name = "Header")]
pub struct PyHeader {
    pub level: u32,
    pub content: Py<PyList>,
}

#[pymethods]
impl PyHeader {
    fn __repr__(&self, py: Python<'_>) -> String {
        format!(
            "Header(level={}, spans={})",
            self.level,
            self.content.bind(py).len()
        )
    }
}

/// Paragraph of inline content.
#[pyclass(frozen, get_all, name = "Paragraph")]
pub struct PyParagraph {
    pub content: Py<PyList>,
}

#[pymethods]
impl PyParagraph {
    fn __repr__(&self, py: Python<'_>) -> String {
        format!("Paragraph(spans={})", self.content.bind(py).len())
    }
}

/// Image reference; only the URL is kept.
#[pyclass(frozen, get_all, name = "Image")]
pub struct PyImage {
    pub url: String,
}

#[pymethods]
impl PyImage {
    fn __repr__(&self) -> String {
        format!("Image(url={:?})", self.url)
    }
}

/// Pipe table. Rows are not reconciled with the header width.
#[pyclass(frozen, get_all, name = "Table")]
pub struct PyTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[pymethods]
impl PyTable {
    fn __repr__(&self) -> String {
        format!("Table(headers={:?}, rows={})", self.headers, self.rows.len())
    }
}

/// Horizontal rule following a level 1 or 2 header.
#[pyclass(frozen, name = "Divider")]
pub struct PyDivider;

#[pymethods]
impl PyDivider {
    fn __repr__(&self) -> &'static str {
        "Divider()"
    }
}

// ============================================================================
// Inline Types
// ============================================================================

/// Unstyled text.
#[pyclass(frozen, get_all, name = "Text")]
pub struct PyText {
    pub text: String,
}

#[pymethods]
impl PyText {
    fn __repr__(&self) -> String {
        format!("Text({:?})", self.text)
    }
}

/// `**bold**` span.
#[pyclass(frozen, get_all, name = "Bold")]
pub struct PyBold {
    pub text: String,
}

#[pymethods]
impl PyBold {
    fn __repr__(&self) -> String {
        format!("Bold({:?})", self.text)
    }
}

/// `*italic*` span.
#[pyclass(frozen, get_all, name = "Italic")]
pub struct PyItalic {
    pub text: String,
}

#[pymethods]
impl PyItalic {
    fn __repr__(&self) -> String {
        format!("Italic({:?})", self.text)
    }
}

/// `~~strikethrough~~` span.
#[pyclass(frozen, get_all, name = "Strikethrough")]
pub struct PyStrikethrough {
    pub text: String,
}

#[pymethods]
impl PyStrikethrough {
    fn __repr__(&self) -> String {
        format!("Strikethrough({:?})", self.text)
    }
}

// ============================================================================
// Conversion
// ============================================================================

fn convert_inlines(py: Python<'_>, inlines: &[Inline]) -> PyResult<Py<PyList>> {
    let items = inlines
        .iter()
        .map(|inline| convert_inline(py, inline))
        .collect::<PyResult<Vec<_>>>()?;
    Ok(PyList::new(py, items)?.unbind())
}

fn convert_inline(py: Python<'_>, inline: &Inline) -> PyResult<PyObject> {
    let text = inline.text().to_string();
    let obj = match inline {
        Inline::Text(_) => Py::new(py, PyText { text })?.into_any(),
        Inline::Bold(_) => Py::new(py, PyBold { text })?.into_any(),
        Inline::Italic(_) => Py::new(py, PyItalic { text })?.into_any(),
        Inline::Strikethrough(_) => Py::new(py, PyStrikethrough { text })?.into_any(),
    };
    Ok(obj)
}

fn convert_block(py: Python<'_>, block: &Block) -> PyResult<PyObject> {
    let obj = match block {
        Block::Header { level, content } => Py::new(
            py,
            PyHeader {
                level: *level,
                content: convert_inlines(py, content)?,
            },
        )?
        .into_any(),
        Block::Paragraph { content } => Py::new(
            py,
            PyParagraph {
                content: convert_inlines(py, content)?,
            },
        )?
        .into_any(),
        Block::Image { url } => Py::new(
            py,
            PyImage {
                url: url.to_string(),
            },
        )?
        .into_any(),
        Block::Table { headers, rows } => Py::new(
            py,
            PyTable {
                headers: headers.iter().map(|h| h.to_string()).collect(),
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(|c| c.to_string()).collect())
                    .collect(),
            },
        )?
        .into_any(),
        Block::Divider => Py::new(py, PyDivider)?.into_any(),
    };
    Ok(obj)
}

// ============================================================================
// Document
// ============================================================================

/// A parsed mdlite document.
#[pyclass(frozen, name = "Document")]
pub struct PyDocument {
    #[pyo3(get)]
    pub blocks: Py<PyList>,
}

#[pymethods]
impl PyDocument {
    fn __repr__(&self, py: Python<'_>) -> String {
        format!("Document(blocks={})", self.blocks.bind(py).len())
    }

    fn __len__(&self, py: Python<'_>) -> usize {
        self.blocks.bind(py).len()
    }
}

// ============================================================================
// Module functions
// ============================================================================

/// Parse an mdlite string.
///
/// Parsing never fails: unrecognised lines become paragraphs.
///
/// Args:
///     input: Document string to parse
///
/// Returns:
///     Document: Parsed document
#[pyfunction]
#[pyo3(text_signature = "(input)")]
fn parse(py: Python<'_>, input: &str) -> PyResult<PyDocument> {
    let doc = CoreParser::new().parse(input);
    let blocks = doc
        .iter()
        .map(|block| convert_block(py, block))
        .collect::<PyResult<Vec<_>>>()?;
    Ok(PyDocument {
        blocks: PyList::new(py, blocks)?.unbind(),
    })
}

/// Split one line of text into Text, Bold, Italic, and Strikethrough spans.
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn parse_inline(py: Python<'_>, text: &str) -> PyResult<Py<PyList>> {
    convert_inlines(py, &core_parse_inline(text))
}

// ============================================================================
// Module
// ============================================================================

/// mdlite - Minimal two-stage Markdown parser.
#[pymodule]
fn pymdl(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDocument>()?;
    m.add_class::<PyHeader>()?;
    m.add_class::<PyParagraph>()?;
    m.add_class::<PyImage>()?;
    m.add_class::<PyTable>()?;
    m.add_class::<PyDivider>()?;
    m.add_class::<PyText>()?;
    m.add_class::<PyBold>()?;
    m.add_class::<PyItalic>()?;
    m.add_class::<PyStrikethrough>()?;
    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(parse_inline, m)?)?;
    Ok(())
}
