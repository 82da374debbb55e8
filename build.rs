//! Build script for embedding frontend assets.
//!
//! In release mode this builds the frontend with Trunk so rust-embed can
//! include the dist/ output in the binary. In debug mode rust-embed reads
//! dist/ from the filesystem at runtime, so nothing is built here.

fn main() {
    #[cfg(not(debug_assertions))]
    {
        use std::process::Command;

        println!("cargo:rerun-if-changed=src/frontend");
        println!("cargo:rerun-if-changed=index.html");
        println!("cargo:rerun-if-changed=Trunk.toml");

        println!("cargo:warning=Building frontend with Trunk...");

        let status = Command::new("trunk")
            .args(["build", "--release", "--dist", "dist"])
            .env("CARGO_TARGET_DIR", "target/trunk")
            .status()
            .expect("Failed to execute trunk command. Is trunk installed?");

        if !status.success() {
            panic!(
                "Trunk build failed with exit code: {:?}. \
                 Ensure trunk is installed and the frontend builds successfully.",
                status.code()
            );
        }
    }

    #[cfg(debug_assertions)]
    {
        println!(
            "cargo:warning=Debug build: skipping frontend build (rust-embed reads dist/ at runtime)"
        );
    }
}
