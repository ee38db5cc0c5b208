//! 定时器封装模块
//!
//! 使用 `web_sys` 的原生 `setInterval` 替代 `gloo-timers`。
//! 助手聊天的逐字打字动画依赖这里的周期回调。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// 周期性定时器
///
/// Drop 时自动清除底层 interval。
pub struct Interval {
    handle: i32,
    #[allow(dead_code)]
    closure: Closure<dyn Fn()>,
}

impl Interval {
    /// 创建周期性定时器，每 `millis` 毫秒触发一次回调
    ///
    /// # Panics
    /// 无法获取 window 对象或注册定时器失败时 panic
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let closure = Closure::new(callback);
        let window = web_sys::window().expect("window indisponível");

        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .expect("falha ao registrar o interval");

        Self { handle, closure }
    }

    /// 取消定时器；通常不需要手动调用
    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}
