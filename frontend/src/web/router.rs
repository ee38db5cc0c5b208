//! 路由服务模块 - 核心引擎
//!
//! 封装 History API；路由状态通过 Signal 驱动界面更新。
//! 认证信号由外部注入，守卫判定集中在 [`AppRoute::guarded`]：
//! 主动导航、浏览器前进后退、认证状态翻转三条路径共用同一规则。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 同步浏览器地址栏；`push` 为 false 时替换当前条目（重定向用）
fn sync_history(path: &str, push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if result.is_err() {
        web_sys::console::warn_1(&format!("[Router] history indisponível para {}", path).into());
    }
}

/// 路由器服务
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));
        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// 当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航入口：经过守卫后加载目标路由
    pub fn navigate(&self, path: &str) {
        let target = AppRoute::from_path(path);
        let destination = target.guarded(self.is_authenticated.get_untracked());
        if destination != target {
            web_sys::console::log_1(
                &format!("[Router] {} bloqueado, indo para {}", target, destination).into(),
            );
        }
        sync_history(destination.to_path(), true);
        self.set_route.set(destination);
    }

    /// 浏览器后退/前进按钮也要经过守卫
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let destination = target.guarded(is_authenticated.get_untracked());
            if destination != target {
                sync_history(destination.to_path(), false);
            }
            set_route.set(destination);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与应用同生命周期，闭包交给 JS 侧持有
        closure.forget();
    }

    /// 认证信号翻转时重新对当前路由做守卫求值
    fn watch_session(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();
            let destination = route.guarded(is_auth);

            if destination != route {
                web_sys::console::log_1(
                    &format!("[Router] sessão mudou, indo para {}", destination).into(),
                );
                sync_history(destination.to_path(), true);
                set_route.set(destination);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.watch_session();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口：根据当前路由状态渲染对应视图
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
