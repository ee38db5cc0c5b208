//! Supabase 项目配置
//!
//! 构建时可通过环境变量覆盖（`JUSESTUDO_SUPABASE_URL` /
//! `JUSESTUDO_SUPABASE_ANON_KEY`），否则使用默认项目。
//! anon key 是公开的行级安全密钥，不是机密。

pub const SUPABASE_URL: &str = match option_env!("JUSESTUDO_SUPABASE_URL") {
    Some(url) => url,
    None => "https://jusestudo.supabase.co",
};

pub const SUPABASE_ANON_KEY: &str = match option_env!("JUSESTUDO_SUPABASE_ANON_KEY") {
    Some(key) => key,
    None => "sb_publishable_jusestudo_dev_key",
};

/// 一次性引导浮层的 LocalStorage 标记
pub const STORAGE_INTRO_KEY: &str = "intro_seen_v1";
