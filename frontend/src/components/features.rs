//! 功能视图注册表
//!
//! 解析器只产出 `Feature` 键；这里把键映射到具体的内部视图。
//! 即"组件加载器"：解析逻辑与视图构造由此解耦，
//! 加载中的过渡由 [`Loading`] 统一承担。

mod assistente_ia;
mod banco_questoes;
mod biblioteca_classicos;
mod downloads;
mod flashcards;
mod loja;
mod noticias_juridicas;
mod plano_estudo;
mod plataforma_desktop;
mod redacao;
mod videoaulas;

use jusestudo_shared::Feature;
use leptos::prelude::*;

/// 加载指示器（目录或视图就绪前的过渡内容）
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="w-full h-64 flex items-center justify-center animate-pulse">
            <div class="text-base-content/60">"Carregando..."</div>
        </div>
    }
}

/// 按键解析内部功能视图
#[component]
pub fn FeatureView(feature: Feature) -> impl IntoView {
    match feature {
        Feature::Downloads => view! { <downloads::Downloads /> }.into_any(),
        Feature::PlataformaDesktop => {
            view! { <plataforma_desktop::PlataformaDesktop /> }.into_any()
        }
        Feature::Videoaulas => view! { <videoaulas::Videoaulas /> }.into_any(),
        Feature::NoticiasJuridicas => {
            view! { <noticias_juridicas::NoticiasJuridicas /> }.into_any()
        }
        Feature::BancoQuestoes => view! { <banco_questoes::BancoQuestoes /> }.into_any(),
        Feature::Flashcards => view! { <flashcards::Flashcards /> }.into_any(),
        Feature::BibliotecaClassicos => {
            view! { <biblioteca_classicos::BibliotecaClassicos /> }.into_any()
        }
        Feature::Loja => view! { <loja::Loja /> }.into_any(),
        Feature::AssistenteIa => view! { <assistente_ia::AssistenteIa /> }.into_any(),
        Feature::PlanoEstudo => view! { <plano_estudo::PlanoEstudo /> }.into_any(),
        Feature::Redacao => view! { <redacao::Redacao /> }.into_any(),
    }
}
