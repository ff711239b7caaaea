//! Piecewise regression laws.
//!
//! Every recommended value is a closed-form function of the target length,
//! fitted offline. A fitted quantity is stored as a short ordered table of
//! `(band, rule)` pieces: the first piece whose band contains the length is
//! used. The transition zone between two fitted regimes is an ordinary piece
//! whose law is the mean of the two neighbouring laws.

/// Half-open interval `(above, up_to]` of target lengths. `None` leaves that
/// side unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub above: Option<u32>,
    pub up_to: Option<u32>,
}

impl Band {
    pub const ANY: Band = Band { above: None, up_to: None };

    /// `len <= limit`
    pub const fn at_most(limit: u32) -> Self {
        Self { above: None, up_to: Some(limit) }
    }

    /// `len > limit`
    pub const fn above(limit: u32) -> Self {
        Self { above: Some(limit), up_to: None }
    }

    /// `lower < len <= upper`
    pub const fn between(lower: u32, upper: u32) -> Self {
        Self { above: Some(lower), up_to: Some(upper) }
    }

    #[inline]
    pub fn contains(&self, len: u32) -> bool {
        self.above.map_or(true, |lo| len > lo) && self.up_to.map_or(true, |hi| len <= hi)
    }
}

/// A fitted function of the target length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Law {
    /// `a * len^b`
    Power { a: f64, b: f64 },
    /// `a * ln(len) + b`
    Log { a: f64, b: f64 },
    /// `a * len + b`
    Linear { a: f64, b: f64 },
    Constant(f64),
    /// Arithmetic mean of two laws at the same length
    Mean(&'static Law, &'static Law),
}

impl Law {
    /// `len` itself
    pub const IDENTITY: Law = Law::Linear { a: 1.0, b: 0.0 };

    pub const fn power(a: f64, b: f64) -> Self {
        Law::Power { a, b }
    }

    pub const fn log(a: f64, b: f64) -> Self {
        Law::Log { a, b }
    }

    pub const fn linear(a: f64, b: f64) -> Self {
        Law::Linear { a, b }
    }

    pub fn eval(&self, len: u32) -> f64 {
        let x = len as f64;
        match *self {
            Law::Power { a, b } => a * x.powf(b),
            Law::Log { a, b } => a * x.ln() + b,
            Law::Linear { a, b } => a * x + b,
            Law::Constant(c) => c,
            Law::Mean(lhs, rhs) => (lhs.eval(len) + rhs.eval(len)) / 2.0,
        }
    }

    /// Evaluate and round half away from zero, for window-like outputs.
    pub fn eval_rounded(&self, len: u32) -> i64 {
        self.eval(len).round() as i64
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Piece<R> {
    pub band: Band,
    pub rule: R,
}

impl<R> Piece<R> {
    pub const fn new(band: Band, rule: R) -> Self {
        Self { band, rule }
    }
}

/// Ordered list of pieces; the last piece acts as the fallback.
#[derive(Debug, Clone, Copy)]
pub struct Piecewise<R: 'static>(pub &'static [Piece<R>]);

impl<R: 'static> Piecewise<R> {
    pub fn select(&self, len: u32) -> Option<&R> {
        self.0
            .iter()
            .find(|piece| piece.band.contains(len))
            .or_else(|| self.0.last())
            .map(|piece| &piece.rule)
    }
}

impl Piecewise<Law> {
    /// NaN when the table is empty.
    pub fn eval(&self, len: u32) -> f64 {
        self.select(len).map_or(f64::NAN, |law| law.eval(len))
    }
}
