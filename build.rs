use std::process::Command;
use std::env;
use std::path::PathBuf;

fn main() {

    println!("cargo:rerun-if-changed=cuda/mat_mul_kernel.cu");
    println!("cargo:rerun-if-env-changed=CUDA_PATH");

    // Without the `cuda` feature the accelerator selector reports itself as unavailable,
    // so there is nothing to compile or link.
    if env::var_os("CARGO_FEATURE_CUDA").is_none() {
        return;
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = PathBuf::from(&out_dir);
    let cuda_path = env::var("CUDA_PATH").unwrap_or_else(|_| "/usr/local/cuda".to_string());

    // Compile the kernel and its host-side launcher to .o
    let obj_file = out_path.join("mat_mul_kernel.o");
    let status = Command::new("nvcc")
        .args(&[
            "-c", "cuda/mat_mul_kernel.cu",
            "-o", obj_file.to_str().unwrap(),
            "-Xcompiler", "-fPIC",
        ])
        .status()
        .expect("Failed to run nvcc. Make sure CUDA is installed and nvcc is in PATH");

    if !status.success() {
        panic!("nvcc compilation failed");
    }

    let lib_file = out_path.join("libmat_mul_cuda.a");
    let status = Command::new("ar")
        .args(&["rcs", lib_file.to_str().unwrap(), obj_file.to_str().unwrap()])
        .status()
        .expect("Failed to run ar");

    if !status.success() {
        panic!("ar archiving failed");
    }

    println!("cargo:rustc-link-search=native={}", out_dir);
    println!("cargo:rustc-link-lib=static=mat_mul_cuda");

    println!("cargo:rustc-link-lib=cudart");
    println!("cargo:rustc-link-search=native={}/lib64", cuda_path);
}
