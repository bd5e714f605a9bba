//! ログ設定（tracing）
//!
//! 標準エラー出力に書き出す。レベルは `PLANT_TRACKER_LOG` で上書きできる。
//!
//! ```bash
//! PLANT_TRACKER_LOG=debug plant-tracker list
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "plant_tracker=debug,plant_tracker_common=debug,warn"
    } else {
        "plant_tracker=info,plant_tracker_common=info,warn"
    };

    let env_filter = EnvFilter::try_from_env("PLANT_TRACKER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time(),
        )
        .try_init();
}
