//! JusEstudo 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由定义与路由服务（认证守卫）
//! - `auth`: 认证状态管理（Supabase Identity）
//! - `catalog`: 功能目录 Provider（Supabase `app` 表）
//! - `navigation`: 当前功能选择状态（无历史栈）
//! - `components`: UI 组件层；功能解析核心在 `jusestudo-shared`

mod api;
mod auth;
mod catalog;
mod config;
mod navigation;
mod components {
    pub mod app_function;
    pub mod features;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod settings;
}

use crate::auth::{AuthContext, init_auth};
use crate::catalog::CatalogContext;
use crate::components::home::IndexPage;
use crate::components::login::AuthPage;
use crate::navigation::NavigationContext;

use leptos::prelude::*;
use leptos::task::spawn_local;

// 原生 Web API 封装模块
// 轻量封装浏览器原生 API，替代 gloo-* 系列 crate 以减小 WASM 体积。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::HttpClient;
    pub use storage::LocalStorage;
    pub use timer::Interval;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet, use_router};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Entrar => view! { <AuthPage /> }.into_any(),
        AppRoute::Inicio => view! { <IndexPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Página não encontrada"</p>
                    <button
                        class="btn btn-primary mt-6"
                        on:click=move |_| use_router().navigate("/")
                    >
                        "Voltar ao início"
                    </button>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 2. 导航选择与功能目录
    let nav = NavigationContext::new();
    provide_context(nav);
    let catalog = CatalogContext::new();
    provide_context(catalog);

    // 3. 认证成功后加载一次目录；目录加载未结束前功能视图不做解析
    Effect::new(move |_| {
        let state = auth_ctx.state.get();
        if state.is_authenticated && !catalog.started() {
            if let Some(api) = state.api.clone() {
                spawn_local(async move {
                    catalog.load(&api).await;
                });
            }
        }
    });

    // 4. 注销时清除功能选择，回到目录视图
    Effect::new(move |_| {
        if !auth_ctx.state.get().is_authenticated {
            nav.clear();
        }
    });

    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
