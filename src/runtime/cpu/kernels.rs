//! Elementwise CPU kernels
//!
//! Kernels are generic over `T: Element` and work on typed slices borrowed
//! from tensor storage. The caller picks `T` with `dispatch_dtype!`.

use super::CpuClient;
use crate::dtype::Element;
use crate::tensor::Layout;

/// Multiply two equally sized contiguous slices
pub(crate) fn mul_contiguous<T: Element>(client: &CpuClient, a: &[T], b: &[T]) -> Vec<T> {
    debug_assert_eq!(a.len(), b.len());

    #[cfg(feature = "rayon")]
    {
        if client.should_parallelize(a.len()) {
            use rayon::prelude::*;

            let min_len = client.rayon_min_len();
            return client.install_parallelism(|| {
                a.par_iter()
                    .zip(b.par_iter())
                    .with_min_len(min_len)
                    .map(|(&x, &y)| x.wrapping_mul(y))
                    .collect()
            });
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = client;

    a.iter().zip(b).map(|(&x, &y)| x.wrapping_mul(y)).collect()
}

/// Multiply two strided views that share the same logical shape
///
/// Both layouts must have `len` elements; broadcast axes carry stride 0.
/// Output is in row-major order.
pub(crate) fn mul_strided<T: Element>(
    client: &CpuClient,
    a: &[T],
    a_layout: &Layout,
    b: &[T],
    b_layout: &Layout,
    len: usize,
) -> Vec<T> {
    debug_assert_eq!(a_layout.elem_count(), len);
    debug_assert_eq!(b_layout.elem_count(), len);

    #[cfg(feature = "rayon")]
    {
        if client.should_parallelize(len) {
            use rayon::prelude::*;

            let min_len = client.rayon_min_len();
            return client.install_parallelism(|| {
                (0..len)
                    .into_par_iter()
                    .with_min_len(min_len)
                    .map(|i| a[a_layout.offset_of(i)].wrapping_mul(b[b_layout.offset_of(i)]))
                    .collect()
            });
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = client;

    a_layout
        .offsets()
        .zip(b_layout.offsets())
        .map(|(i, j)| a[i].wrapping_mul(b[j]))
        .collect()
}
