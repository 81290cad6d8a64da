//! 语言表
//!
//! 与 Google 翻译 TTS 支持的语音列表保持一致，键一律小写

use crate::error::TtsError;
use phf::phf_map;

/// 小写代码 → (标准代码, 名称)
static LANGUAGES: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "af" => ("af", "Afrikaans"),
    "am" => ("am", "Amharic"),
    "ar" => ("ar", "Arabic"),
    "bg" => ("bg", "Bulgarian"),
    "bn" => ("bn", "Bengali"),
    "bs" => ("bs", "Bosnian"),
    "ca" => ("ca", "Catalan"),
    "cs" => ("cs", "Czech"),
    "cy" => ("cy", "Welsh"),
    "da" => ("da", "Danish"),
    "de" => ("de", "German"),
    "el" => ("el", "Greek"),
    "en" => ("en", "English"),
    "es" => ("es", "Spanish"),
    "et" => ("et", "Estonian"),
    "eu" => ("eu", "Basque"),
    "fi" => ("fi", "Finnish"),
    "fr" => ("fr", "French"),
    "fr-ca" => ("fr-CA", "French (Canada)"),
    "gl" => ("gl", "Galician"),
    "gu" => ("gu", "Gujarati"),
    "ha" => ("ha", "Hausa"),
    "hi" => ("hi", "Hindi"),
    "hr" => ("hr", "Croatian"),
    "hu" => ("hu", "Hungarian"),
    "id" => ("id", "Indonesian"),
    "is" => ("is", "Icelandic"),
    "it" => ("it", "Italian"),
    "iw" => ("iw", "Hebrew"),
    "ja" => ("ja", "Japanese"),
    "jw" => ("jw", "Javanese"),
    "km" => ("km", "Khmer"),
    "kn" => ("kn", "Kannada"),
    "ko" => ("ko", "Korean"),
    "la" => ("la", "Latin"),
    "lt" => ("lt", "Lithuanian"),
    "lv" => ("lv", "Latvian"),
    "ml" => ("ml", "Malayalam"),
    "mr" => ("mr", "Marathi"),
    "ms" => ("ms", "Malay"),
    "my" => ("my", "Myanmar (Burmese)"),
    "ne" => ("ne", "Nepali"),
    "nl" => ("nl", "Dutch"),
    "no" => ("no", "Norwegian"),
    "pa" => ("pa", "Punjabi (Gurmukhi)"),
    "pl" => ("pl", "Polish"),
    "pt" => ("pt", "Portuguese (Brazil)"),
    "pt-pt" => ("pt-PT", "Portuguese (Portugal)"),
    "ro" => ("ro", "Romanian"),
    "ru" => ("ru", "Russian"),
    "si" => ("si", "Sinhala"),
    "sk" => ("sk", "Slovak"),
    "sq" => ("sq", "Albanian"),
    "sr" => ("sr", "Serbian"),
    "su" => ("su", "Sundanese"),
    "sv" => ("sv", "Swedish"),
    "sw" => ("sw", "Swahili"),
    "ta" => ("ta", "Tamil"),
    "te" => ("te", "Telugu"),
    "th" => ("th", "Thai"),
    "tl" => ("tl", "Filipino"),
    "tr" => ("tr", "Turkish"),
    "uk" => ("uk", "Ukrainian"),
    "ur" => ("ur", "Urdu"),
    "vi" => ("vi", "Vietnamese"),
    "yue" => ("yue", "Cantonese"),
    "zh" => ("zh", "Chinese (Mandarin)"),
    "zh-cn" => ("zh-CN", "Chinese (Simplified)"),
    "zh-tw" => ("zh-TW", "Chinese (Traditional)"),
};

/// 旧版地区代码 → 标准代码
static ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "en-us" => "en",
    "en-ca" => "en",
    "en-uk" => "en",
    "en-gb" => "en",
    "en-au" => "en",
    "en-gh" => "en",
    "en-in" => "en",
    "en-ie" => "en",
    "en-nz" => "en",
    "en-ng" => "en",
    "en-ph" => "en",
    "en-za" => "en",
    "en-tz" => "en",
    "fr-fr" => "fr",
    "pt-br" => "pt",
    "es-es" => "es",
    "es-us" => "es",
    "zh-yue" => "yue",
};

/// 已校验的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
    name: &'static str,
}

impl Language {
    /// 查找语言（大小写不敏感，支持旧版别名）
    pub fn lookup(code: &str) -> Option<Self> {
        // 有意放宽：上游只认精确代码，这里 "DE"、" de " 也接受，调用方传大写不会失败
        let key = code.trim().to_lowercase();
        let key = ALIASES.get(key.as_str()).copied().unwrap_or(key.as_str());

        LANGUAGES
            .get(key)
            .map(|&(code, name)| Language { code, name })
    }

    /// 解析语言代码，不支持时返回错误
    pub fn parse(code: &str) -> Result<Self, TtsError> {
        Self::lookup(code).ok_or_else(|| TtsError::LanguageNotSupported {
            lang: code.to_string(),
        })
    }

    /// 发给接口的标准代码
    pub fn code(self) -> &'static str {
        self.code
    }

    pub fn name(self) -> &'static str {
        self.name
    }

    /// 全部支持的标准代码
    pub fn supported_codes() -> impl Iterator<Item = &'static str> {
        LANGUAGES.values().map(|&(code, _)| code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
