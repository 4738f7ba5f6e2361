use crate::data_structures::LinkedMinHeap;
use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;

#[pyclass]
pub struct PyMinHeap {
    heap: LinkedMinHeap<i64>,
}

#[pymethods]
impl PyMinHeap {
    #[new]
    fn new() -> Self {
        PyMinHeap {
            heap: LinkedMinHeap::new(),
        }
    }

    fn push(&mut self, value: i64) {
        self.heap.insert(value)
    }

    fn extract_min(&mut self) -> PyResult<i64> {
        self.heap
            .extract_min()
            .map_err(|e| PyIndexError::new_err(e.to_string()))
    }

    fn peek(&self) -> Option<i64> {
        self.heap.peek().copied()
    }

    fn render(&self) -> String {
        self.heap.render()
    }

    fn __len__(&self) -> usize {
        self.heap.len()
    }
}

#[pymodule]
fn linked_heap_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyMinHeap>()?;
    Ok(())
}
