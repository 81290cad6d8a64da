use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 语音合成错误
    #[error("TTS错误: {0}")]
    Tts(#[from] TtsError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 语音合成错误
#[derive(Debug, Error)]
pub enum TtsError {
    /// 文本为空
    #[error("No text to speak")]
    EmptyText,
    /// 文本只包含标点，分词后为空
    #[error("No text to send to TTS API")]
    NoTokens,
    /// 不支持的语言
    #[error("Language not supported: {lang}")]
    LanguageNotSupported { lang: String },
    /// 网络请求失败
    #[error("Failed to connect ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 接口返回错误状态码
    #[error("{status} ({reason}) from TTS API. Probable cause: {cause}")]
    BadStatus {
        status: u16,
        reason: String,
        cause: String,
    },
    /// 响应中包含 jQ1olc 行但没有音频
    #[error("No audio stream in response")]
    NoAudioStream,
    /// 整个响应没有任何音频
    #[error("No audio received. Probable cause: Unsupported language")]
    NoAudioReceived,
    /// 音频 base64 解码失败
    #[error("音频解码失败: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 删除文件失败
    #[error("删除文件失败 ({path}): {source}")]
    DeleteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 清理模式无法编译
    #[error("无效的清理模式 '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// HTTP 客户端构建失败
    #[error("无法创建 HTTP 客户端: {0}")]
    HttpClient(#[source] reqwest::Error),
}

// ========== 便捷构造函数 ==========

impl FileError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        FileError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        FileError::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建文件删除错误
    pub fn delete_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        FileError::DeleteFailed {
            path: path.into(),
            source,
        }
    }
}

impl TtsError {
    /// 按状态码推断失败原因
    pub fn from_status(status: reqwest::StatusCode, tld: &str) -> Self {
        let code = status.as_u16();
        let cause = if code == 403 {
            "Bad token or upstream API changes".to_string()
        } else if code == 404 && tld != "com" {
            format!("Unsupported tld '{}'", tld)
        } else if code >= 500 {
            "Upstream API error. Try again later.".to_string()
        } else {
            "Unknown".to_string()
        };

        TtsError::BadStatus {
            status: code,
            reason: status.canonical_reason().unwrap_or("").to_string(),
            cause,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_forbidden() {
        let err = TtsError::from_status(StatusCode::FORBIDDEN, "com");
        assert!(err.to_string().contains("Bad token"));
    }

    #[test]
    fn test_from_status_not_found_depends_on_tld() {
        let err = TtsError::from_status(StatusCode::NOT_FOUND, "de");
        assert!(err.to_string().contains("Unsupported tld 'de'"));

        let err = TtsError::from_status(StatusCode::NOT_FOUND, "com");
        assert!(err.to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_status_server_error() {
        let err = TtsError::from_status(StatusCode::BAD_GATEWAY, "com");
        assert!(err.to_string().contains("Upstream API error"));
    }

    #[test]
    fn test_app_error_wraps_config() {
        let source = regex::Regex::new("(").unwrap_err();
        let err: AppError = ConfigError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        }
        .into();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().starts_with("配置错误: 无效的清理模式 '('"));
    }

    #[test]
    fn test_app_error_wraps_language() {
        let err: AppError = TtsError::LanguageNotSupported {
            lang: "xx".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "TTS错误: Language not supported: xx");
    }
}
