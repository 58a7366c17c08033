//! Host-side helpers shared by the sparse formats

use crate::dispatch_dtype;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::tensor::{Layout, Tensor};

/// Index and pointer tensors must be 1-D I64
pub(crate) fn validate_index_tensor(t: &Tensor, name: &'static str) -> Result<()> {
    if t.dtype() != DType::I64 {
        return Err(Error::DTypeMismatch {
            lhs: DType::I64,
            rhs: t.dtype(),
        });
    }
    if t.ndim() != 1 {
        return Err(Error::InvalidArgument {
            arg: name,
            reason: format!("expected 1D tensor, got {}D", t.ndim()),
        });
    }
    Ok(())
}

/// Every index must lie in `0..size`
pub(crate) fn validate_bounds(indices: &[i64], size: usize, name: &'static str) -> Result<()> {
    for &i in indices {
        if i < 0 {
            return Err(Error::InvalidArgument {
                arg: name,
                reason: format!("negative index {i}"),
            });
        }
        if i as usize >= size {
            return Err(Error::IndexOutOfBounds {
                index: i as usize,
                size,
            });
        }
    }
    Ok(())
}

/// Compressed pointers start at 0, never decrease, and end at `nnz`
pub(crate) fn validate_ptrs(ptrs: &[i64], nnz: usize, name: &'static str) -> Result<()> {
    if ptrs.first().copied().unwrap_or(0) != 0 {
        return Err(Error::InvalidArgument {
            arg: name,
            reason: format!("first pointer must be 0, got {}", ptrs[0]),
        });
    }
    if let Some(w) = ptrs.windows(2).find(|w| w[0] > w[1]) {
        return Err(Error::InvalidArgument {
            arg: name,
            reason: format!("pointers must be non-decreasing, found {} then {}", w[0], w[1]),
        });
    }
    let last = ptrs.last().copied().unwrap_or(0);
    if last < 0 || last as usize != nnz {
        return Err(Error::ShapeMismatch {
            expected: vec![nnz],
            got: vec![last.max(0) as usize],
        });
    }
    Ok(())
}

/// Major index of every stored entry of a compressed format
///
/// `[0, 2, 2, 3]` expands to `[0, 0, 2]`.
pub(crate) fn expand_ptrs(ptrs: &[i64]) -> Vec<i64> {
    let nnz = ptrs.last().copied().unwrap_or(0).max(0) as usize;
    let mut out = Vec::with_capacity(nnz);
    for (major, w) in ptrs.windows(2).enumerate() {
        for _ in w[0]..w[1] {
            out.push(major as i64);
        }
    }
    out
}

/// Count entries per major index and prefix-sum into pointers
pub(crate) fn compress(major: &[i64], extent: usize) -> Vec<i64> {
    let mut ptrs = vec![0i64; extent + 1];
    for &m in major {
        ptrs[m as usize + 1] += 1;
    }
    for i in 1..=extent {
        ptrs[i] += ptrs[i - 1];
    }
    ptrs
}

/// Stable permutation ordering entries by `(primary, secondary)`
pub(crate) fn sort_permutation(primary: &[i64], secondary: &[i64]) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..primary.len()).collect();
    perm.sort_by_key(|&i| (primary[i], secondary[i]));
    perm
}

/// Whether entries are ordered by `(primary, secondary)`, duplicates allowed
pub(crate) fn is_ordered(primary: &[i64], secondary: &[i64]) -> bool {
    primary
        .iter()
        .zip(secondary)
        .zip(primary.iter().zip(secondary).skip(1))
        .all(|(a, b)| a <= b)
}

/// Per-entry flag: stored value is not zero
pub(crate) fn nonzero_mask(values: &Tensor) -> Result<Vec<bool>> {
    dispatch_dtype!(values.dtype(), T => {
        let vals: Vec<T> = values.try_to_vec()?;
        Ok(vals.iter().map(|&v| !v.is_zero()).collect())
    }, "nonzero")
}

/// Coordinates of the stored entries whose value is nonzero, in storage order
pub(crate) fn nonzero_coordinates(
    rows: &[i64],
    cols: &[i64],
    values: &Tensor,
) -> Result<(Tensor, Tensor)> {
    let mask = nonzero_mask(values)?;
    let rows = select(rows, &mask);
    let cols = select(cols, &mask);
    Ok((
        Tensor::try_from_slice(&rows, &[rows.len()])?,
        Tensor::try_from_slice(&cols, &[cols.len()])?,
    ))
}

/// Gather the 1-D `values` at `positions` into a new contiguous tensor
pub(crate) fn gather(values: &Tensor, positions: &[usize]) -> Tensor {
    let layout = values.layout();
    let storage = values
        .storage()
        .gather(positions.iter().map(|&i| layout.offset_of(i)));
    Tensor::from_parts(storage, Layout::contiguous(&[positions.len()]))
}

/// Keep the entries of `items` whose mask flag is set
pub(crate) fn select<T: Copy>(items: &[T], mask: &[bool]) -> Vec<T> {
    items
        .iter()
        .zip(mask)
        .filter_map(|(&x, &keep)| keep.then_some(x))
        .collect()
}

/// Positions whose mask flag is set
pub(crate) fn mask_positions(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &keep)| keep.then_some(i))
        .collect()
}

/// Row-major scan of a dense matrix, returning `(rows, cols, values)` of its nonzeros
pub(crate) fn dense_entries(dense: &Tensor) -> Result<(Vec<i64>, Vec<i64>, Tensor)> {
    let ncols = match *dense.shape() {
        [_, cols] => cols,
        _ => return Err(Error::not_matrix(dense.shape())),
    };

    dispatch_dtype!(dense.dtype(), T => {
        let data: Vec<T> = dense.try_to_vec()?;
        let mut rows = Vec::new();
        let mut cols = Vec::new();
        let mut vals: Vec<T> = Vec::new();
        for (pos, &v) in data.iter().enumerate() {
            if !v.is_zero() {
                rows.push((pos / ncols) as i64);
                cols.push((pos % ncols) as i64);
                vals.push(v);
            }
        }
        let values = Tensor::try_from_slice(&vals, &[vals.len()])?;
        Ok((rows, cols, values))
    }, "from_dense")
}

/// Scatter entries into a dense row-major matrix; duplicates are summed
pub(crate) fn scatter_to_dense(
    rows: &[i64],
    cols: &[i64],
    values: &Tensor,
    shape: [usize; 2],
) -> Result<Tensor> {
    let [nrows, ncols] = shape;
    dispatch_dtype!(values.dtype(), T => {
        let vals: Vec<T> = values.try_to_vec()?;
        let mut dense = vec![T::zero(); nrows * ncols];
        for ((&r, &c), &v) in rows.iter().zip(cols).zip(&vals) {
            let pos = r as usize * ncols + c as usize;
            dense[pos] = dense[pos].wrapping_add(v);
        }
        Tensor::try_from_slice(&dense, &[nrows, ncols])
    }, "to_dense")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_and_compress() {
        let ptrs = [0i64, 2, 2, 3];
        let major = expand_ptrs(&ptrs);
        assert_eq!(major, vec![0, 0, 2]);
        assert_eq!(compress(&major, 3), ptrs.to_vec());
        assert!(expand_ptrs(&[0]).is_empty());
    }

    #[test]
    fn test_validate_ptrs() {
        assert!(validate_ptrs(&[0, 1, 3], 3, "row_ptrs").is_ok());
        assert!(validate_ptrs(&[1, 1, 3], 3, "row_ptrs").is_err());
        assert!(validate_ptrs(&[0, 2, 1], 1, "row_ptrs").is_err());
        assert!(matches!(
            validate_ptrs(&[0, 1, 2], 3, "row_ptrs"),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds(&[0, 2], 3, "rows").is_ok());
        assert!(matches!(
            validate_bounds(&[0, 3], 3, "rows"),
            Err(Error::IndexOutOfBounds { index: 3, size: 3 })
        ));
        assert!(matches!(
            validate_bounds(&[-1], 3, "rows"),
            Err(Error::InvalidArgument { arg: "rows", .. })
        ));
    }

    #[test]
    fn test_sort_permutation_is_stable() {
        let rows = [1i64, 0, 1, 0];
        let cols = [0i64, 1, 0, 0];
        // Entries 0 and 2 are duplicates of (1, 0) and keep their relative order
        assert_eq!(sort_permutation(&rows, &cols), vec![3, 1, 0, 2]);
        assert!(!is_ordered(&rows, &cols));
        assert!(is_ordered(&[0, 0, 1], &[0, 2, 1]));
        assert!(is_ordered(&[], &[]));
    }

    #[test]
    fn test_nonzero_mask_and_gather() {
        let values = Tensor::from_slice(&[3.0f64, 0.0, -0.0, 4.0], &[4]);
        let mask = nonzero_mask(&values).unwrap();
        assert_eq!(mask, vec![true, false, false, true]);
        let kept = gather(&values, &mask_positions(&mask));
        assert_eq!(kept.to_vec::<f64>(), [3.0, 4.0]);
        assert_eq!(select(&[10, 20, 30, 40], &mask), vec![10, 40]);
    }

    #[test]
    fn test_dense_roundtrip_sums_duplicates() {
        let values = Tensor::from_slice(&[1i32, 2, 5], &[3]);
        let dense = scatter_to_dense(&[0, 0, 1], &[1, 1, 0], &values, [2, 2]).unwrap();
        assert_eq!(dense.to_vec::<i32>(), [0, 3, 5, 0]);

        let (rows, cols, vals) = dense_entries(&dense).unwrap();
        assert_eq!(rows, vec![0, 1]);
        assert_eq!(cols, vec![1, 0]);
        assert_eq!(vals.to_vec::<i32>(), [3, 5]);
    }

    #[test]
    fn test_nonzero_coordinates_skip_stored_zeros() {
        let values = Tensor::from_slice(&[0u8, 7, 0, 9], &[4]);
        let (rows, cols) = nonzero_coordinates(&[0, 0, 1, 2], &[1, 2, 0, 2], &values).unwrap();
        assert_eq!(rows.shape(), &[2]);
        assert_eq!(rows.to_vec::<i64>(), [0, 2]);
        assert_eq!(cols.to_vec::<i64>(), [2, 2]);

        let empty = Tensor::from_slice::<f32>(&[], &[0]);
        let (rows, cols) = nonzero_coordinates(&[], &[], &empty).unwrap();
        assert_eq!(rows.numel(), 0);
        assert_eq!(cols.numel(), 0);
    }

    #[test]
    fn test_scatter_wraps_integer_duplicates() {
        let values = Tensor::from_slice(&[200u8, 100], &[2]);
        let dense = scatter_to_dense(&[0, 0], &[0, 0], &values, [1, 1]).unwrap();
        assert_eq!(dense.to_vec::<u8>(), [44]);
    }
}
