//! Orthonormalize a fixed set of three 3-D vectors and print the result.
//!
//! Logging goes to stderr and is filtered by `RUST_LOG` (default `warn`).

use gram_schmidt::{orthonormalize, GramSchmidtError};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), GramSchmidtError> {
    init_logging();

    let vector_list = vec![
        vec![2.0, 1.0, -1.0],
        vec![1.0, 1.0, 0.0],
        vec![0.0, -1.0, 1.0],
    ];

    let results = orthonormalize(&vector_list)?;

    println!("Orthonormalized Vectors:");
    for result in &results {
        println!("{:?}", result);
    }

    Ok(())
}
