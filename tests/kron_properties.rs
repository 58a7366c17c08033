//! Property tests for the Kronecker product
//!
//! Shape law, identity law and associativity over random matrices.

mod common;

use approx::assert_relative_eq;
use proptest::prelude::*;
use sparsekron::prelude::*;

/// Random matrix with dimensions in `1..=max_dim` and entries in [-10, 10]
fn matrix(max_dim: usize) -> impl Strategy<Value = (usize, usize, Vec<f64>)> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(|(m, n)| {
        prop::collection::vec(-10.0f64..10.0, m * n).prop_map(move |data| (m, n, data))
    })
}

fn to_tensor((m, n, data): &(usize, usize, Vec<f64>)) -> Tensor {
    Tensor::from_slice(data, &[*m, *n])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_kron_shape(a in matrix(5), b in matrix(5)) {
        let client = common::create_cpu_client();
        let c = client.kron(&to_tensor(&a), &to_tensor(&b)).unwrap();
        prop_assert_eq!(c.shape(), &[a.0 * b.0, a.1 * b.1]);
        prop_assert_eq!(c.numel(), a.2.len() * b.2.len());
    }

    #[test]
    fn prop_kron_identity(p in 1usize..6, q in 1usize..6) {
        let client = common::create_cpu_client();
        let ip = Tensor::eye(p, DType::F64).unwrap();
        let iq = Tensor::eye(q, DType::F64).unwrap();
        let c = client.kron(&ip, &iq).unwrap();
        let expected = Tensor::eye(p * q, DType::F64).unwrap();
        prop_assert_eq!(c.shape(), expected.shape());
        prop_assert_eq!(c.to_vec::<f64>(), expected.to_vec::<f64>());
    }

    #[test]
    fn prop_kron_associative(a in matrix(3), b in matrix(3), c in matrix(3)) {
        let client = common::create_cpu_client();
        let (ta, tb, tc) = (to_tensor(&a), to_tensor(&b), to_tensor(&c));

        let left = client.kron(&ta, &client.kron(&tb, &tc).unwrap()).unwrap();
        let right = client.kron(&client.kron(&ta, &tb).unwrap(), &tc).unwrap();
        prop_assert_eq!(left.shape(), right.shape());

        for (x, y) in left.to_vec::<f64>().iter().zip(right.to_vec::<f64>().iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-9, max_relative = 1e-12);
        }
    }

    #[test]
    fn prop_kron_matches_definition(a in matrix(4), b in matrix(4)) {
        let client = common::create_cpu_client();
        let (m1, n1, ref a_data) = a;
        let (m2, n2, ref b_data) = b;
        let out = client.kron(&to_tensor(&a), &to_tensor(&b)).unwrap().to_vec::<f64>();

        for i in 0..m1 {
            for j in 0..n1 {
                for k in 0..m2 {
                    for l in 0..n2 {
                        let got = out[(i * m2 + k) * (n1 * n2) + j * n2 + l];
                        prop_assert_eq!(got, a_data[i * n1 + j] * b_data[k * n2 + l]);
                    }
                }
            }
        }
    }
}
