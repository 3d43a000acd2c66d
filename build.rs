fn main() {
    // Board features surface as CARGO_FEATURE_* env vars during the build.
    // Neither selected is not an error: fall back to NICEMCU with a warning.
    let nicemcu = std::env::var_os("CARGO_FEATURE_BOARD_NICEMCU").is_some();
    let bw16kit = std::env::var_os("CARGO_FEATURE_BOARD_BW16KIT").is_some();

    if !nicemcu && !bw16kit {
        println!(
            "cargo:warning=no board variant selected; defaulting to NICEMCU_8720_v1 \
             (enable feature board-nicemcu or board-bw16kit)"
        );
    }
}
