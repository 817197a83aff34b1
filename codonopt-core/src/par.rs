/// Parallel map: apply `$f` to each element of `$slice`, collecting into a Vec.
/// Order of the output always matches the input.
macro_rules! par_map {
    ($slice:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
            $slice.par_iter().map($f).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $slice.iter().map($f).collect()
        }
    }};
}

/// Parallel fallible map: apply `$f` returning Result to each element, collecting into Result<Vec>.
macro_rules! par_try_map {
    ($slice:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
            $slice.par_iter().map($f).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $slice.iter().map($f).collect()
        }
    }};
}

/// Run `$body` inside a pool of `$workers` threads (0 = rayon default).
macro_rules! with_workers {
    ($workers:expr, $body:expr) => {{
        #[cfg(feature = "parallel")]
        {
            match rayon::ThreadPoolBuilder::new().num_threads($workers).build() {
                Ok(pool) => Ok(pool.install($body)),
                Err(err) => Err($crate::error::CodonError::Config {
                    msg: format!("failed to start worker pool: {err}"),
                }),
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            let _ = $workers;
            Ok::<_, $crate::error::CodonError>(($body)())
        }
    }};
}
