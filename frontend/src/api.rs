//! Supabase 客户端
//!
//! 认证走 `auth/v1`（密码授权），数据走 `rest/v1` 表读取。
//! 所有方法在组件边界返回 `Result<_, String>`，错误消息可直接展示。

use crate::config::{SUPABASE_ANON_KEY, SUPABASE_URL};
use crate::web::HttpClient;
use jusestudo_shared::{
    FunctionRecord, HEADER_API_KEY, ProfileType, TABLE_APP, TABLE_PERFIS, TABLE_USER_SETTINGS,
    UserProfile,
};
use serde::Deserialize;
use serde_json::json;

/// 认证响应里的用户对象
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

/// 密码授权成功后的会话
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

/// 认证接口的错误负载（字段名因端点而异）
#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl AuthErrorBody {
    fn into_message(self, status: u16) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .unwrap_or_else(|| format!("erro de autenticação ({})", status))
    }
}

/// `perfis` 表的一行
#[derive(Debug, Deserialize)]
struct PerfilRow {
    id: String,
    #[serde(default)]
    nome_completo: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// `user_settings` 表的投影
#[derive(Debug, Deserialize)]
struct SettingsRow {
    #[serde(default)]
    profile_type: Option<String>,
}

/// Supabase 客户端实例
///
/// `access_token` 为 None 时以 anon key 的身份访问。
#[derive(Clone, Debug, PartialEq)]
pub struct SupabaseApi {
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl SupabaseApi {
    pub fn new() -> Self {
        Self {
            base_url: SUPABASE_URL.trim_end_matches('/').to_string(),
            anon_key: SUPABASE_ANON_KEY.to_string(),
            access_token: None,
        }
    }

    /// 以已认证会话访问的副本
    pub fn with_access_token(&self, token: &str) -> Self {
        Self {
            access_token: Some(token.to_string()),
            ..self.clone()
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 当前会话的令牌；未登录时用 anon key
    fn token(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.anon_key)
    }

    // ---------------------------------------------------------
    // auth/v1
    // ---------------------------------------------------------

    /// 邮箱 + 密码登录
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, String> {
        let url = self.url("/auth/v1/token?grant_type=password");
        let body = json!({ "email": email, "password": password });

        let res = HttpClient::post(&url)
            .header(HEADER_API_KEY, &self.anon_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            let status = res.status();
            let err: AuthErrorBody = res.json().await.map_err(|e| e.to_string())?;
            return Err(err.into_message(status));
        }

        res.json::<AuthSession>().await.map_err(|e| e.to_string())
    }

    /// 注册新用户；全名与学习方向作为 user_metadata 传递
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        nome_completo: &str,
        profile_type: ProfileType,
    ) -> Result<(), String> {
        let url = self.url("/auth/v1/signup");
        let body = json!({
            "email": email,
            "password": password,
            "data": {
                "nome_completo": nome_completo,
                "profile_type": profile_type.as_str(),
            }
        });

        let res = HttpClient::post(&url)
            .header(HEADER_API_KEY, &self.anon_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            let status = res.status();
            let err: AuthErrorBody = res.json().await.map_err(|e| e.to_string())?;
            return Err(err.into_message(status));
        }

        Ok(())
    }

    // ---------------------------------------------------------
    // rest/v1
    // ---------------------------------------------------------

    async fn table_get<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        context: &str,
    ) -> Result<T, String> {
        let url = self.url(&format!("/rest/v1/{}", query));
        let res = HttpClient::get(&url)
            .header(HEADER_API_KEY, &self.anon_key)
            .bearer(self.token())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("falha ao carregar {}: {}", context, res.status()));
        }

        res.json::<T>().await.map_err(|e| e.to_string())
    }

    /// 功能目录：`app` 表的全部记录，按 id 升序
    pub async fn list_functions(&self) -> Result<Vec<FunctionRecord>, String> {
        self.table_get(
            &format!("{}?select=*&order=id.asc", TABLE_APP),
            "o catálogo de funções",
        )
        .await
    }

    /// 更新 `perfis` 表中的显示名
    pub async fn update_profile_name(
        &self,
        user_id: &str,
        nome_completo: &str,
    ) -> Result<(), String> {
        let url = self.url(&format!("/rest/v1/{}?id=eq.{}", TABLE_PERFIS, user_id));
        let body = json!({ "nome_completo": nome_completo });

        let res = HttpClient::patch(&url)
            .header(HEADER_API_KEY, &self.anon_key)
            .bearer(self.token())
            .header("Prefer", "return=minimal")
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("falha ao salvar o perfil: {}", res.status()));
        }
        Ok(())
    }

    /// 合并 `perfis` + `user_settings` 为用户档案
    ///
    /// 任一表读取失败时退化为认证元数据里的基础档案，
    /// 登录流程不因档案缺失而中断。
    pub async fn fetch_profile(&self, user: &AuthUser) -> UserProfile {
        let fallback_email = user.email.clone().unwrap_or_default();

        let perfil: Option<PerfilRow> = self
            .table_get::<Vec<PerfilRow>>(
                &format!("{}?select=*&id=eq.{}", TABLE_PERFIS, user.id),
                "o perfil",
            )
            .await
            .ok()
            .and_then(|rows| rows.into_iter().next());

        let profile_type = self
            .table_get::<Vec<SettingsRow>>(
                &format!(
                    "{}?select=profile_type&id=eq.{}",
                    TABLE_USER_SETTINGS, user.id
                ),
                "as configurações",
            )
            .await
            .ok()
            .and_then(|rows| rows.into_iter().next())
            .and_then(|row| row.profile_type)
            .and_then(|s| ProfileType::from_key(&s))
            .or_else(|| {
                // 退化到注册时写入的 user_metadata
                user.user_metadata
                    .get("profile_type")
                    .and_then(|v| v.as_str())
                    .and_then(ProfileType::from_key)
            });

        match perfil {
            Some(row) => UserProfile {
                id: row.id,
                nome_completo: row.nome_completo,
                email: row.email.unwrap_or(fallback_email),
                profile_type,
            },
            None => UserProfile {
                id: user.id.clone(),
                nome_completo: user
                    .user_metadata
                    .get("nome_completo")
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
                email: fallback_email,
                profile_type,
            },
        }
    }
}

impl Default for SupabaseApi {
    fn default() -> Self {
        Self::new()
    }
}
