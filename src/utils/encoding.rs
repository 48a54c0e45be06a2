// 旧式文本编码工具
// 网关要求 email/company/contact 等文本字段使用单字节编码 (默认 windows-1255)

use encoding_rs::Encoding;
use std::fmt;

/// 网关默认的文本编码
pub const DEFAULT_TEXT_ENCODING: &str = "windows-1255";

/// 文本字段编码器
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    encoding: &'static Encoding,
}

impl TextEncoding {
    /// 根据编码标签查找编码
    ///
    /// # Arguments
    /// * `label` - WHATWG编码标签，例如 `windows-1255`、`iso-8859-8`
    ///
    /// # Returns
    /// * 无法识别的标签返回 `None`
    pub fn for_label(label: &str) -> Option<Self> {
        Encoding::for_label(label.trim().as_bytes()).map(|encoding| Self { encoding })
    }

    /// 编码名称
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// 把文本编码为字节
    ///
    /// # Arguments
    /// * `text` - 待编码文本
    ///
    /// # Returns
    /// * 目标编码无法表示其中的字符时返回 `None`。encoding_rs 会把这类字符
    ///   替换为 `&#NNN;` 形式的数字引用，其中的 `&` 会拆开报文字段，所以不能发送。
    pub fn encode(&self, text: &str) -> Option<Vec<u8>> {
        let (bytes, actual, had_errors) = self.encoding.encode(text);
        if had_errors {
            log::warn!("Text contains characters not representable in {}", actual.name());
            return None;
        }
        Some(bytes.into_owned())
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::WINDOWS_1255,
        }
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextEncoding").field(&self.name()).finish()
    }
}
