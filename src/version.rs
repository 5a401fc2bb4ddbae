//! Reports on the compiled version of the library. Both init paths (the wasm start hook and the
//! native logging setup) print one of these so a console or log capture can be matched back to
//! a build.

/// The full version along with the build profile and timestamp as a semi-structured string.
pub fn full_version() -> String {
    format!(
        "build-profile={} build-timestamp={} repo-version={}",
        env!("BUILD_PROFILE"),
        env!("BUILD_TIMESTAMP"),
        env!("REPO_VERSION"),
    )
}

/// Only the repository version, for when the extra build details are noise.
pub fn minimal_version() -> String {
    format!("repo-version={}", env!("REPO_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test(async))]
    #[cfg_attr(not(target_arch = "wasm32"), tokio::test)]
    async fn test_full_version_includes_minimal() {
        let full = full_version();

        assert!(full.starts_with("build-profile="));
        assert!(full.ends_with(&minimal_version()));
    }
}
