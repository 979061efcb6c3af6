//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_render_with_their_prefix() {
        assert_eq!(
            AppError::Config("missing [bot] section".into()).to_string(),
            "config error: missing [bot] section"
        );
        assert_eq!(
            AppError::Logger("bad level".into()).to_string(),
            "logger error: bad level"
        );
    }

    #[test]
    fn io_errors_convert_via_from() {
        let e = AppError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "config/default.toml",
        ));
        assert!(matches!(e, AppError::Io(_)));
        assert!(e.to_string().starts_with("io error"));
    }
}
