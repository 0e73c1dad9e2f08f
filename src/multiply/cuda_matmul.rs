use crate::error::{MultiplyError, Result};
use crate::implementation::Implementation;
use crate::matrix::MatrixRef;

#[cfg(feature = "cuda")]
mod ffi {
    use libc::{c_int, c_longlong};

    #[link(name = "mat_mul_cuda", kind = "static")]
    extern "C" {
        pub fn launch_mat_mul(
            a: *const f32,
            b: *const f32,
            c: *mut f32,
            m: c_int,
            k: c_int,
            n: c_int,
            threads: *mut c_longlong,
        ) -> c_int;
    }
}

/// Offloads the product to the CUDA device and blocks until `c` is copied back.
#[cfg(feature = "cuda")]
pub fn multiply(a: MatrixRef<'_>, b: MatrixRef<'_>, c: &mut [f32]) -> Result<()> {
    use log::info;

    let m = to_c_int(a.rows)?;
    let k = to_c_int(a.cols)?;
    let n = to_c_int(b.cols)?;

    if c.is_empty() {
        return Ok(());
    }

    let mut threads: libc::c_longlong = 0;
    // SAFETY: the dispatcher checked a.len() == m*k, b.len() == k*n and c.len() == m*n,
    // which are exactly the extents the launcher copies.
    let code = unsafe {
        ffi::launch_mat_mul(
            a.data.as_ptr(),
            b.data.as_ptr(),
            c.as_mut_ptr(),
            m,
            k,
            n,
            &mut threads,
        )
    };

    if code != 0 {
        return Err(MultiplyError::Device { code });
    }

    info!("Number threads in {} : {}", Implementation::Cuda, threads);
    Ok(())
}

#[cfg(feature = "cuda")]
fn to_c_int(value: usize) -> Result<libc::c_int> {
    // cudaErrorInvalidValue
    libc::c_int::try_from(value).map_err(|_| MultiplyError::Device { code: 1 })
}

#[cfg(not(feature = "cuda"))]
pub fn multiply(_a: MatrixRef<'_>, _b: MatrixRef<'_>, _c: &mut [f32]) -> Result<()> {
    Err(MultiplyError::Unavailable(Implementation::Cuda))
}
