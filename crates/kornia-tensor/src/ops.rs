//! Operations for tensors.

use crate::tensor::{Tensor, TensorError};

/// Batched matrix multiplication.
///
/// Multiplies each matrix of `lhs` with the matrix of `rhs` at the same batch
/// index. A batch size of 1 on either side is broadcast against the other.
///
/// # Arguments
///
/// * `lhs` - Left-hand side tensor with shape (B, M, K).
/// * `rhs` - Right-hand side tensor with shape (B, K, N).
///
/// # Returns
///
/// A new tensor with shape (B, M, N).
///
/// # Example
///
/// ```
/// use kornia_tensor::{ops::bmm, Tensor3};
///
/// let a = Tensor3::<f32>::from_shape_vec([1, 2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let b = Tensor3::<f32>::from_shape_vec([1, 2, 1], vec![1.0, 1.0]).unwrap();
/// let c = bmm(&a, &b).unwrap();
/// assert_eq!(c.shape, [1, 2, 1]);
/// assert_eq!(c.as_slice(), &[3.0, 7.0]);
/// ```
pub fn bmm<T>(lhs: &Tensor<T, 3>, rhs: &Tensor<T, 3>) -> Result<Tensor<T, 3>, TensorError>
where
    T: num_traits::Zero + std::ops::Mul<Output = T> + Copy,
{
    let [lb, m, k] = lhs.shape;
    let [rb, k2, n] = rhs.shape;

    if k != k2 {
        return Err(TensorError::dimension_mismatch(
            "Inner dimensions of bmm operands must agree",
            &[rb, k, n],
            &rhs.shape,
        ));
    }

    let batch = match (lb, rb) {
        (l, r) if l == r => l,
        (1, r) => r,
        (l, 1) => l,
        _ => {
            return Err(TensorError::dimension_mismatch(
                "Batch sizes of bmm operands must agree or be 1",
                &[lb, k, n],
                &rhs.shape,
            ))
        }
    };

    let (lhs_data, rhs_data) = (lhs.as_slice(), rhs.as_slice());
    let mut out = vec![T::zero(); batch * m * n];

    for (b, out_mat) in out.chunks_exact_mut(m * n).enumerate() {
        let l_off = if lb == 1 { 0 } else { b * m * k };
        let r_off = if rb == 1 { 0 } else { b * k * n };
        for i in 0..m {
            for j in 0..n {
                let mut acc = T::zero();
                for p in 0..k {
                    acc = acc + lhs_data[l_off + i * k + p] * rhs_data[r_off + p * n + j];
                }
                out_mat[i * n + j] = acc;
            }
        }
    }

    Tensor::from_shape_vec([batch, m, n], out)
}
