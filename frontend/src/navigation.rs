//! 导航选择状态
//!
//! 进程级的单一可变状态：当前选中的功能名，None 表示目录视图。
//! 没有历史栈、没有撤销；清除选择即返回目录。
//! 会话期内存活，不做持久化。

use leptos::prelude::*;

/// 导航选择上下文
///
/// 解析器是该值的纯函数，从不反向修改它。
#[derive(Clone, Copy)]
pub struct NavigationContext {
    selection: ReadSignal<Option<String>>,
    set_selection: WriteSignal<Option<String>>,
}

impl NavigationContext {
    pub fn new() -> Self {
        let (selection, set_selection) = signal(None);
        Self {
            selection,
            set_selection,
        }
    }

    /// 当前选择（只读信号）
    pub fn selection(&self) -> ReadSignal<Option<String>> {
        self.selection
    }

    /// 是否正处于某个功能内
    pub fn is_in_function(&self) -> Signal<bool> {
        let selection = self.selection;
        Signal::derive(move || selection.get().is_some())
    }

    /// 选中一个功能
    pub fn select(&self, name: &str) {
        web_sys::console::log_1(&format!("[Navigation] selecionada: {}", name).into());
        self.set_selection.set(Some(name.to_string()));
    }

    /// 清除选择，返回目录视图
    pub fn clear(&self) {
        self.set_selection.set(None);
    }
}

impl Default for NavigationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取导航状态
pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>().expect("NavigationContext should be provided")
}
