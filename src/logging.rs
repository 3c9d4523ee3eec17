//! ログ出力の初期化
//!
//! 標準出力は案内メッセージ専用のため、ログはすべて標準エラー出力へ書き出す。

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log level directive: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install log subscriber: {0}")]
    Init(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// グローバルな tracing subscriber を設定する
///
/// フィルタは `Settings::log_level` から作成する（環境変数は参照しない）。
///
/// # Errors
/// - ログレベル指定のパースエラー
/// - subscriber が既に設定済み
pub fn init(settings: &Settings) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(&settings.log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(LoggingError::Init)
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    fn init_twice_fails() {
        let settings = Settings { log_level: "off".to_string(), ..Settings::default() };

        let _ = init(&settings);
        let second = init(&settings);

        assert!(matches!(second, Err(LoggingError::Init(_))));
    }

    #[rstest]
    fn init_rejects_malformed_directive() {
        let settings = Settings { log_level: "glossary=loud".to_string(), ..Settings::default() };

        assert!(matches!(init(&settings), Err(LoggingError::Filter(_))));
    }
}
