//! The optimized multiply, as an injected capability.
//!
//! The benchmark compares the naive kernel against a BLAS-class `dgemm`.
//! That routine is consumed, not implemented, here: the driver only sees
//! the [`Gemm`] trait, so the timing logic is testable against any backend.
//! The default backend delegates to the `matrixmultiply` crate.

/// Whether an operand is used as stored or as its transpose.
///
/// Follows the CBLAS naming: `None` means op(X) = X, `Ordinary` means
/// op(X) = X^T.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    None,
    Ordinary,
}

/// A dense double-precision matrix-multiply primitive:
/// `C = alpha * op(A) * op(B) + beta * C`.
///
/// All buffers are row-major. op(A) is m × k (so A is stored m × k when
/// `transa` is `None`, k × m when `Ordinary`), op(B) is k × n, and C is
/// always m × n.
pub trait Gemm {
    /// # Panics
    ///
    /// Panics if the slice sizes don't match m, n, k.
    #[allow(clippy::too_many_arguments)]
    fn multiply(
        &self,
        a: &[f64],
        transa: Transpose,
        b: &[f64],
        transb: Transpose,
        alpha: f64,
        beta: f64,
        c: &mut [f64],
        m: usize,
        n: usize,
        k: usize,
    );
}

/// [`Gemm`] backend built on `matrixmultiply::dgemm`.
///
/// Transpose flags are handled by swapping strides - no operand is copied.
#[derive(Debug, Default, Clone, Copy)]
pub struct MatrixMultiply;

impl Gemm for MatrixMultiply {
    fn multiply(
        &self,
        a: &[f64],
        transa: Transpose,
        b: &[f64],
        transb: Transpose,
        alpha: f64,
        beta: f64,
        c: &mut [f64],
        m: usize,
        n: usize,
        k: usize,
    ) {
        assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
        assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
        assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

        // Row stride / column stride of op(A) and op(B) over the stored
        // row-major buffers. Transposing swaps which index moves by 1.
        let (rsa, csa) = match transa {
            Transpose::None => (k as isize, 1),
            Transpose::Ordinary => (1, m as isize),
        };
        let (rsb, csb) = match transb {
            Transpose::None => (n as isize, 1),
            Transpose::Ordinary => (1, k as isize),
        };

        // Lengths were checked above; matrixmultiply only needs the
        // pointers and strides to describe valid memory.
        unsafe {
            matrixmultiply::dgemm(
                m,
                k,
                n,
                alpha,
                a.as_ptr(),
                rsa,
                csa,
                b.as_ptr(),
                rsb,
                csb,
                beta,
                c.as_mut_ptr(),
                n as isize,
                1,
            );
        }
    }
}
