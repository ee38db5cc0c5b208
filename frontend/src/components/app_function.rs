//! 功能出口组件
//!
//! 读取导航选择与目录记录，调用 `jusestudo_shared::resolve` 得到
//! 渲染决策，再分发到内部视图注册表 / 内嵌页面 / 占位视图。
//! 解析本身是纯函数；本组件只负责把决策变成界面。

use crate::catalog::use_catalog;
use crate::components::features::{FeatureView, Loading};
use crate::components::icons::ArrowLeft;
use crate::navigation::use_navigation;
use jusestudo_shared::{RenderDecision, resolve};
use leptos::prelude::*;

/// 统一的功能页头：返回按钮 + 标题
#[component]
pub fn FunctionHeader(#[prop(into)] title: String) -> impl IntoView {
    let nav = use_navigation();

    view! {
        <div class="fixed top-0 left-0 right-0 z-50 bg-base-100/95 backdrop-blur-sm border-b border-base-300 h-14">
            <div class="flex items-center h-full px-4">
                <button
                    class="btn btn-ghost btn-sm gap-2"
                    on:click=move |_| nav.clear()
                >
                    <ArrowLeft attr:class="h-4 w-4" />
                    "Voltar"
                </button>
                <h1 class="ml-4 text-lg font-semibold truncate">{title}</h1>
            </div>
        </div>
    }
}

/// 内嵌外部页面视图（iframe 全屏 + 页头）
#[component]
fn EmbeddedPage(url: String, title: String) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-base-100">
            <FunctionHeader title=title.clone() />
            <div class="pt-14 h-full">
                <iframe
                    {leptos::attr::loading("lazy")}
                    src=url
                    class="w-full h-full border-0"
                    title=title
                ></iframe>
            </div>
        </div>
    }
}

/// 开发中占位视图
#[component]
fn UnderDevelopment(title: String) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <FunctionHeader title=title />
            <div class="flex-1 flex items-center justify-center p-8 pt-22">
                <div class="text-center">
                    <h2 class="text-xl font-semibold mb-2">"Funcionalidade em Desenvolvimento"</h2>
                    <p class="text-base-content/70">
                        "Esta funcionalidade está sendo desenvolvida e estará disponível em breve."
                    </p>
                </div>
            </div>
        </div>
    }
}

/// 功能出口
///
/// 目录加载未结束时只显示加载指示器，不做解析：
/// 此时的 None 记录无法与"目录里确实没有"区分。
#[component]
pub fn AppFunctionPage() -> impl IntoView {
    let nav = use_navigation();
    let catalog = use_catalog();

    move || {
        if catalog.loading().get() {
            return view! { <Loading /> }.into_any();
        }

        let Some(selected) = nav.selection().get() else {
            // 无选择时由目录视图接管，这里不渲染任何内容
            return ().into_any();
        };

        let record = catalog.find(&selected);
        let decision = resolve(&selected, record.as_ref());

        web_sys::console::log_1(
            &format!("[AppFunction] '{}' -> {:?}", selected, decision).into(),
        );

        match decision {
            RenderDecision::Internal(feature) => {
                view! { <FeatureView feature=feature /> }.into_any()
            }
            RenderDecision::Embedded { url, title } => {
                view! { <EmbeddedPage url=url title=title /> }.into_any()
            }
            RenderDecision::UnderDevelopment { title } => {
                view! { <UnderDevelopment title=title /> }.into_any()
            }
        }
    }
}
