//! Program flow: validate settings, load the glossary, print the notice.

use std::io::Write;

use thiserror::Error;

use crate::config::{
    ConfigError,
    Settings,
};
use crate::glossary::{
    Glossary,
    GlossaryError,
};
use crate::logging::LoggingError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Glossary(#[from] GlossaryError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("Failed to write notice: {0}")]
    Io(#[from] std::io::Error),
}

/// 設定を検証し、用語集を読み込み、案内メッセージを 1 行だけ出力する
///
/// 用語集は参照用としてメモリに保持するだけで、入力には適用しない。
///
/// # Errors
/// - 設定のバリデーションエラー
/// - 用語集の不正（空の用語・重複など）
/// - 出力先への書き込みエラー
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<Glossary, AppError> {
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    let glossary = Glossary::builtin()?;
    tracing::debug!(
        source = %glossary.source(),
        target = %glossary.target(),
        terms = glossary.len(),
        "Glossary loaded"
    );

    writeln!(out, "{}", settings.notice)?;
    out.flush()?;

    Ok(glossary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;

    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn run_writes_single_notice_line() {
        let mut out = Vec::new();

        run(&Settings::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_that!(text.lines().count(), eq(1));
        assert_that!(text, eq("Skrypt do tłumaczenia będzie wykonany z poziomu edytora...\n"));
    }

    #[rstest]
    fn run_returns_builtin_glossary() {
        let glossary = run(&Settings::default(), &mut io::sink()).unwrap();

        assert_that!(glossary, eq(&Glossary::builtin().unwrap()));
    }

    #[rstest]
    fn run_uses_configured_notice() {
        let settings = Settings { notice: "Tłumaczenie ręczne".to_string(), ..Settings::default() };
        let mut out = Vec::new();

        run(&settings, &mut out).unwrap();

        assert_that!(String::from_utf8(out).unwrap(), eq("Tłumaczenie ręczne\n"));
    }

    #[rstest]
    fn run_rejects_invalid_settings_without_output() {
        let settings = Settings { notice: "a\nb".to_string(), ..Settings::default() };
        let mut out = Vec::new();

        let result = run(&settings, &mut out);

        assert!(matches!(result, Err(AppError::Config(ConfigError::ValidationErrors(_)))));
        assert!(out.is_empty());
    }

    /// 書き込みに常に失敗する出力先
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[rstest]
    fn run_reports_write_failure() {
        let result = run(&Settings::default(), &mut FailingWriter);

        assert!(matches!(result, Err(AppError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
