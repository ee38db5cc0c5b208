//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦：
//! 路由服务只消费注入的认证信号。会话只保存在内存中，
//! 刷新页面即回到登录页（不做持久化是刻意的）。

use crate::api::SupabaseApi;
use jusestudo_shared::{ProfileType, UserProfile};
use leptos::prelude::*;

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 已认证的 API 客户端（仅在登录成功后存在）
    pub api: Option<SupabaseApi>,
    /// 当前用户档案
    pub profile: Option<UserProfile>,
    /// 是否已认证
    pub is_authenticated: bool,
    /// 是否正在初始化
    pub is_loading: bool,
}

/// 认证上下文
///
/// 读写信号对，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            is_loading: true,
            ..AuthState::default()
        });
        Self { state, set_state }
    }

    /// 认证状态信号（注入路由服务用）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 没有持久化会话可恢复，初始化只是结束 loading 态。
pub fn init_auth(ctx: &AuthContext) {
    ctx.set_state.update(|state| {
        state.is_loading = false;
    });
}

/// 登录：密码授权 + 档案加载
///
/// 档案读取失败不阻断登录，退化为认证元数据里的基础档案。
pub async fn sign_in(ctx: &AuthContext, email: String, password: String) -> Result<(), String> {
    let api = SupabaseApi::new();
    let session = api.sign_in(&email, &password).await?;

    let authed = api.with_access_token(&session.access_token);
    let profile = authed.fetch_profile(&session.user).await;

    ctx.set_state.update(|state| {
        state.api = Some(authed);
        state.profile = Some(profile);
        state.is_authenticated = true;
    });
    Ok(())
}

/// 注册新账号；Supabase 要求邮箱确认时不会自动登录
pub async fn sign_up(
    email: String,
    password: String,
    nome_completo: String,
    profile_type: ProfileType,
) -> Result<(), String> {
    SupabaseApi::new()
        .sign_up(&email, &password, &nome_completo, profile_type)
        .await
}

/// 注销并清除状态
///
/// 不需要手动导航：路由服务监听认证信号并自动重定向。
pub fn logout(ctx: &AuthContext) {
    ctx.set_state.update(|state| {
        state.api = None;
        state.profile = None;
        state.is_authenticated = false;
    });
}
