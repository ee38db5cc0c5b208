//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。
//! 注意：当前功能的选择不是路由，而是导航状态（无历史栈），
//! 路由只区分认证前后的两个页面。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录/注册页面 (默认路由)
    #[default]
    Entrar,
    /// 主目录页面 (需要认证)
    Inicio,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/entrar" => Self::Entrar,
            "/inicio" => Self::Inicio,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Entrar => "/",
            Self::Inicio => "/inicio",
            Self::NotFound => "/404",
        }
    }

    /// 核心守卫逻辑：该路由是否需要认证
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Inicio)
    }

    /// 已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Entrar)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Entrar
    }

    /// 认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Inicio
    }

    /// 守卫求值：给定认证状态，返回实际允许停留的路由
    ///
    /// 导航、popstate 和认证信号变化都经过这一个入口，
    /// 保证三条路径的重定向行为一致。
    pub fn guarded(self, is_authenticated: bool) -> Self {
        if self.requires_auth() && !is_authenticated {
            return Self::auth_failure_redirect();
        }
        if self.should_redirect_when_authenticated() && is_authenticated {
            return Self::auth_success_redirect();
        }
        self
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        for route in [AppRoute::Entrar, AppRoute::Inicio] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path("/qualquer-coisa"), AppRoute::NotFound);
    }

    #[test]
    fn guard_flags() {
        assert!(AppRoute::Inicio.requires_auth());
        assert!(!AppRoute::Entrar.requires_auth());
        assert!(AppRoute::Entrar.should_redirect_when_authenticated());
    }

    #[test]
    fn guarded_redirects_both_directions() {
        // 未认证访问受保护页 → 登录页
        assert_eq!(AppRoute::Inicio.guarded(false), AppRoute::Entrar);
        // 已认证停留在登录页 → 主页
        assert_eq!(AppRoute::Entrar.guarded(true), AppRoute::Inicio);
        // 其余情况原样放行
        assert_eq!(AppRoute::Inicio.guarded(true), AppRoute::Inicio);
        assert_eq!(AppRoute::Entrar.guarded(false), AppRoute::Entrar);
        assert_eq!(AppRoute::NotFound.guarded(false), AppRoute::NotFound);
    }
}
