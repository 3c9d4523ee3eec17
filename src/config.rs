//! 設定
//!
//! 設定はコード内で完結する。ファイル・コマンドライン引数・環境変数は読まない。

/// Configuration types and settings
mod types;

pub use types::{
    ConfigError,
    DEFAULT_LOG_LEVEL,
    DEFAULT_NOTICE,
    Settings,
    ValidationError,
};
