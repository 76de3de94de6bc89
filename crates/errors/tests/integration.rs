//! Integration tests for error types

#[cfg(test)]
mod tests {
    use ghverify_errors::*;

    #[test]
    fn test_error_conversion() {
        let net_err = NetworkError::InvalidUrl("ftp://example.com".into());
        let err: Error = net_err.into();
        assert!(matches!(err, Error::Network(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::NotFound {
            path: "answer_config.yaml".into(),
        };
        assert_eq!(err.to_string(), "config file not found: answer_config.yaml");
    }

    #[test]
    fn test_error_clone() {
        let err = ConfigError::InvalidValue {
            field: "target_repo".into(),
            value: "[a, b]".into(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_every_error_has_a_code() {
        let errors: Vec<Error> = vec![
            ConfigError::ParseError {
                path: ".env".into(),
                message: "bad line".into(),
            }
            .into(),
            ConfigError::EnvVarNotFound {
                var: "GITHUB_EVAL_ORG".into(),
            }
            .into(),
            NetworkError::ClientBuild("tls".into()).into(),
            NetworkError::InvalidHeader {
                header: "accept".into(),
            }
            .into(),
            Error::io_with_path(&std::io::Error::other("disk"), "answer_config.yaml"),
        ];

        for err in &errors {
            assert!(err.user_code().is_some(), "{err:?} has no code");
        }
    }
}
