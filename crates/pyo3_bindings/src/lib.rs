//! PyO3 bindings for the auction core.
//!
//! Python callers are untyped, so `bid` accepts arbitrary objects and the
//! argument type checks happen at runtime:
//! - bidder name must be a `str`
//! - amount must be an `int` or `float` (`bool` counts as `int`)
//!
//! The mapping rules themselves live in `auction_core::untyped`, where they
//! are tested; this crate only inspects Python types.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyOverflowError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyFloat, PyLong, PyString};

use auction_core::{
    Auction as RustAuction, Error as RustError, ErrorKind, UntypedArg, DEFAULT_MIN_INCREMENT,
};

create_exception!(
    sealed_auction,
    AuctionError,
    PyException,
    "Raised when a bid breaks an auction rule."
);

fn to_py_err(err: RustError) -> PyErr {
    let msg = err.to_string();
    match err.kind() {
        ErrorKind::Type => PyTypeError::new_err(msg),
        ErrorKind::Auction => AuctionError::new_err(msg),
        ErrorKind::Value | ErrorKind::Config => PyValueError::new_err(msg),
    }
}

/// Classify a Python object by its runtime type.
fn classify(obj: &Bound<'_, PyAny>) -> PyResult<UntypedArg> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(UntypedArg::Str(s.to_str()?.to_owned()));
    }
    if let Ok(b) = obj.downcast::<PyBool>() {
        return Ok(b.is_true().into());
    }
    if obj.is_instance_of::<PyLong>() {
        return match obj.extract::<f64>() {
            Ok(value) => Ok(UntypedArg::Int {
                approx: Some(value),
                negative: value < 0.0,
            }),
            Err(err) if err.is_instance_of::<PyOverflowError>(obj.py()) => Ok(UntypedArg::Int {
                approx: None,
                negative: obj.lt(0)?,
            }),
            Err(err) => Err(err),
        };
    }
    if obj.is_instance_of::<PyFloat>() {
        return Ok(UntypedArg::Float(obj.extract::<f64>()?));
    }
    Ok(UntypedArg::Other)
}

/// An auction for a single item.
#[pyclass]
pub struct Auction {
    inner: RustAuction,
}

#[pymethods]
impl Auction {
    #[new]
    #[pyo3(signature = (auction_name, min_increment = DEFAULT_MIN_INCREMENT))]
    fn new(auction_name: String, min_increment: f64) -> Self {
        Auction {
            inner: RustAuction::with_increment(auction_name, min_increment),
        }
    }

    #[getter]
    fn name(&self) -> &str {
        self.inner.name()
    }

    #[getter]
    fn increment(&self) -> f64 {
        self.inner.min_increment()
    }

    /// Enable bidding.
    fn start(&mut self) {
        self.inner.start();
    }

    /// Disable bidding.
    fn stop(&mut self) {
        self.inner.stop();
    }

    /// True if bidding is enabled.
    fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    /// Submit a bid.
    fn bid(&mut self, bidder_name: &Bound<'_, PyAny>, amount: &Bound<'_, PyAny>) -> PyResult<()> {
        let bidder_name = classify(bidder_name)?.into_value();
        let amount = classify(amount)?.into_value();
        self.inner
            .bid_value(&bidder_name, &amount)
            .map_err(to_py_err)
    }

    /// Highest bid so far.
    fn best_bid(&self) -> f64 {
        self.inner.best_bid()
    }

    /// Name of the highest bidder.
    fn winner(&self) -> String {
        self.inner.winner().to_string()
    }

    /// Convert a name to title case and remove excess whitespace.
    #[staticmethod]
    fn normalize(name: &str) -> String {
        RustAuction::normalize(name)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.repr()
    }
}

/// Sealed Auction - single-item ascending auction implemented in Rust.
#[pymodule]
fn sealed_auction(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Auction>()?;
    m.add("AuctionError", m.py().get_type_bound::<AuctionError>())?;
    Ok(())
}
