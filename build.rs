fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let version = env!("CARGO_PKG_VERSION");
    println!("cargo:rustc-env=FULL_VERSION={}", full_version(version));
}

#[cfg(feature = "bin")]
fn full_version(version: &str) -> String {
    let date = chrono::Utc::now().format("%Y-%m-%d");
    format!("{version}_{date}")
}

#[cfg(not(feature = "bin"))]
fn full_version(version: &str) -> String {
    version.to_string()
}
