/// 合成得到的音频
#[derive(Debug, Clone)]
pub struct AudioOutput {
    pub data: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioOutput {
    pub fn mp3(data: Vec<u8>) -> Self {
        Self {
            data,
            format: AudioFormat::Mp3,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// 音频格式（Google 翻译只返回 MP3）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
        }
    }
}

/// 语速
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    #[default]
    Normal,
    Slow,
}

impl Speed {
    pub fn from_slow_flag(slow: bool) -> Self {
        if slow {
            Speed::Slow
        } else {
            Speed::Normal
        }
    }

    /// 请求参数中的取值：正常为 null，慢速为 true
    pub fn as_json(self) -> serde_json::Value {
        match self {
            Speed::Normal => serde_json::Value::Null,
            Speed::Slow => serde_json::Value::Bool(true),
        }
    }
}
