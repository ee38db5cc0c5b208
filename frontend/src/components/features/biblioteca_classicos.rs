use crate::components::app_function::FunctionHeader;
use jusestudo_shared::Feature;
use leptos::prelude::*;

const BIBLIOTECA_URL: &str = "https://biblioteca-classicos-direito.vercel.app/";

/// 固定地址的内嵌阅读器（与目录无关）
#[component]
pub fn BibliotecaClassicos() -> impl IntoView {
    let title = Feature::BibliotecaClassicos.title();

    view! {
        <div class="fixed inset-0 bg-base-100">
            <FunctionHeader title=title />
            <div class="pt-14 h-full">
                <iframe
                    {leptos::attr::loading("lazy")}
                    src=BIBLIOTECA_URL
                    class="w-full h-full border-0"
                    title=title
                ></iframe>
            </div>
        </div>
    }
}
