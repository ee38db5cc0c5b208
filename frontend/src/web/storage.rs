//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 替代 `gloo-storage`。

/// 浏览器 LocalStorage 的静态访问封装
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取字符串值；键不存在或底层出错时返回 None
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 写入字符串值，返回操作是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 布尔标记：键存在即视为 true（如一次性引导标记）
    pub fn has_flag(key: &str) -> bool {
        Self::get(key).is_some()
    }

    /// 置位布尔标记
    pub fn set_flag(key: &str) -> bool {
        Self::set(key, "1")
    }
}
