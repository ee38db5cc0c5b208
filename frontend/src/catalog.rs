//! 功能目录 Provider
//!
//! 持有 `app` 表的记录列表与加载状态。目录在认证后加载一次；
//! `loading` 为 true 期间功能出口不做解析，避免把"仍在加载"
//! 误判成"目录无此记录"。

use crate::api::SupabaseApi;
use jusestudo_shared::{FunctionRecord, find_record};
use leptos::prelude::*;

/// 目录上下文
#[derive(Clone, Copy)]
pub struct CatalogContext {
    functions: ReadSignal<Vec<FunctionRecord>>,
    set_functions: WriteSignal<Vec<FunctionRecord>>,
    loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
    started: ReadSignal<bool>,
    set_started: WriteSignal<bool>,
}

impl CatalogContext {
    pub fn new() -> Self {
        // 加载结束前 loading 恒为 true（含尚未发起的阶段）
        let (functions, set_functions) = signal(Vec::new());
        let (loading, set_loading) = signal(true);
        let (started, set_started) = signal(false);
        Self {
            functions,
            set_functions,
            loading,
            set_loading,
            started,
            set_started,
        }
    }

    /// 目录记录（只读信号）
    pub fn functions(&self) -> ReadSignal<Vec<FunctionRecord>> {
        self.functions
    }

    /// 是否仍在加载（含未发起）
    pub fn loading(&self) -> ReadSignal<bool> {
        self.loading
    }

    /// 是否已经发起过加载（非响应式，用于只加载一次）
    pub fn started(&self) -> bool {
        self.started.get_untracked()
    }

    /// 目录侧查找：先精确后子串，参见 `jusestudo_shared::find_record`
    pub fn find(&self, name: &str) -> Option<FunctionRecord> {
        self.functions
            .with(|records| find_record(records, name).cloned())
    }

    /// 拉取目录
    ///
    /// 失败时保留空目录并结束 loading：功能解析会据此
    /// 走规则表或占位分支，不向用户抛错。
    pub async fn load(&self, api: &SupabaseApi) {
        self.set_started.set(true);
        self.set_loading.set(true);

        match api.list_functions().await {
            Ok(records) => {
                web_sys::console::log_1(
                    &format!("[Catalog] {} funções carregadas", records.len()).into(),
                );
                self.set_functions.set(records);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[Catalog] falha ao carregar: {}", e).into());
            }
        }

        self.set_loading.set(false);
    }
}

impl Default for CatalogContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取目录
pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext should be provided")
}
