//! Print the degree 7 -> 5 reduction matrix with interpolated endpoints.
//!
//! Run with: `cargo run --example print_matrix`

use degree_reduction::prelude::*;

fn main() -> Result<(), ReductionError> {
    let (n, m, r, s) = (7, 5, 1, 1);

    let mut q = vec![0.0; ((m + 1) * (n + 1)) as usize];
    reduction_matrix_into(n, m, r, s, &mut q)?;

    for i in 0..=m {
        for j in 0..=n {
            let index = (i * (n + 1) + j) as usize;
            print!("{:.4}\t", q[index]);
        }
        println!();
    }
    Ok(())
}
