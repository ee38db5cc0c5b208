//! 目录视图（首页)
//!
//! 认证后的主界面：分类入口 + 目录功能网格 + 学习计划页脚。
//! 当导航选择了某个功能时，整页让位给功能出口组件。

use crate::auth::{logout, use_auth};
use crate::catalog::use_catalog;
use crate::components::app_function::AppFunctionPage;
use crate::components::icons::{
    BookOpen, Bot, ChevronRight, Download, GraduationCap, Library, LogOut, Monitor, Newspaper,
    Play, Scale, ShoppingBag, Sparkles, Target, User, Wrench, X, Zap,
};
use crate::components::settings::UserSettings;
use crate::config::STORAGE_INTRO_KEY;
use crate::navigation::use_navigation;
use crate::web::LocalStorage;
use leptos::prelude::*;

struct Category {
    title: &'static str,
    description: &'static str,
    functions: &'static [&'static str],
}

const CATEGORIES: &[Category] = &[
    Category {
        title: "Estudar Agora",
        description: "Comece seus estudos de forma prática",
        functions: &["Cursos Preparatórios", "Resumos Jurídicos", "Flashcards"],
    },
    Category {
        title: "Biblioteca e Leituras",
        description: "Acesse conteúdos e materiais completos",
        functions: &[
            "Biblioteca Clássicos",
            "Biblioteca de Estudos",
            "Indicações de Livros",
            "Artigos Comentados",
        ],
    },
    Category {
        title: "Minhas Ferramentas",
        description: "Utilize recursos para organizar e facilitar",
        functions: &[
            "Vade Mecum Digital",
            "Plataforma Desktop",
            "Notícias Comentadas",
            "Videoaulas",
            "Áudio-aulas",
            "Mapas Mentais",
        ],
    },
    Category {
        title: "Simulado e Questões",
        description: "Treine e avalie seu conhecimento adquirido",
        functions: &["Banco de Questões", "Simulados OAB"],
    },
];

/// 分类卡片的图标（按位置固定）
fn category_icon(index: usize) -> AnyView {
    match index {
        0 => view! { <GraduationCap attr:class="h-8 w-8 text-white" /> }.into_any(),
        1 => view! { <Library attr:class="h-8 w-8 text-white" /> }.into_any(),
        2 => view! { <Wrench attr:class="h-8 w-8 text-white" /> }.into_any(),
        _ => view! { <Target attr:class="h-8 w-8 text-white" /> }.into_any(),
    }
}

/// 目录记录的图标：按名称子串挑选，兜底用天平
fn function_icon(name: &str) -> AnyView {
    let lower = name.to_lowercase();
    if lower.contains("assistente") || lower.contains("ia") {
        view! { <Bot attr:class="h-6 w-6" /> }.into_any()
    } else if lower.contains("video") || lower.contains("vídeo") || lower.contains("aula") {
        view! { <Play attr:class="h-6 w-6" /> }.into_any()
    } else if lower.contains("notícia") || lower.contains("noticia") {
        view! { <Newspaper attr:class="h-6 w-6" /> }.into_any()
    } else if lower.contains("flashcard") {
        view! { <Zap attr:class="h-6 w-6" /> }.into_any()
    } else if lower.contains("download") {
        view! { <Download attr:class="h-6 w-6" /> }.into_any()
    } else if lower.contains("desktop") || lower.contains("plataforma") {
        view! { <Monitor attr:class="h-6 w-6" /> }.into_any()
    } else if lower.contains("biblioteca") {
        view! { <Library attr:class="h-6 w-6" /> }.into_any()
    } else if lower.contains("livro") || lower.contains("resumo") || lower.contains("vade") {
        view! { <BookOpen attr:class="h-6 w-6" /> }.into_any()
    } else if lower.contains("questõ") || lower.contains("questo") || lower.contains("simulado") {
        view! { <Target attr:class="h-6 w-6" /> }.into_any()
    } else if lower.contains("loja") {
        view! { <ShoppingBag attr:class="h-6 w-6" /> }.into_any()
    } else {
        view! { <Scale attr:class="h-6 w-6" /> }.into_any()
    }
}

/// 首次访问的引导浮层；"Começar" 写入本地标记后不再出现
#[component]
fn IntroOnboarding(on_complete: WriteSignal<bool>) -> impl IntoView {
    let comecar = move |_| {
        LocalStorage::set_flag(STORAGE_INTRO_KEY);
        on_complete.set(false);
    };

    view! {
        <div class="fixed inset-0 z-[60] bg-base-100 flex items-center justify-center p-6">
            <div class="max-w-md text-center space-y-6">
                <div class="inline-flex p-5 bg-primary/10 rounded-3xl text-primary">
                    <Scale attr:class="h-12 w-12" />
                </div>
                <h1 class="text-3xl font-bold">"Direito na Palma da Mão"</h1>
                <p class="text-base-content/70">
                    "Videoaulas, questões comentadas, flashcards, biblioteca e muito mais — "
                    "tudo o que você precisa para estudar direito em um só lugar."
                </p>
                <button class="btn btn-primary btn-wide" on:click=comecar>
                    "Começar"
                </button>
            </div>
        </div>
    }
}

/// 顶部导航栏：用户名 + 注销
#[component]
fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let (settings_open, set_settings_open) = signal(false);

    let display_name = move || {
        auth.state
            .get()
            .profile
            .map(|p| p.display_name().to_string())
            .unwrap_or_else(|| "Estudante".to_string())
    };

    view! {
        <div class="navbar bg-base-100 border-b border-base-300 px-4">
            <div class="flex-1 flex items-center gap-2">
                <Scale attr:class="h-6 w-6 text-primary" />
                <span class="font-bold text-lg">"JusEstudo"</span>
            </div>
            <div class="flex-none flex items-center gap-3">
                <span class="text-sm text-base-content/70 hidden sm:inline">
                    {display_name}
                </span>
                <button
                    class="btn btn-ghost btn-sm btn-square"
                    on:click=move |_| set_settings_open.set(true)
                >
                    <User attr:class="h-4 w-4" />
                </button>
                <button
                    class="btn btn-ghost btn-sm gap-2"
                    on:click=move |_| logout(&auth)
                >
                    <LogOut attr:class="h-4 w-4" />
                    "Sair"
                </button>
            </div>
        </div>
        <Show when=move || settings_open.get()>
            <UserSettings set_open=set_settings_open />
        </Show>
    }
}

/// 分类入口区 + 功能选择对话框
#[component]
fn CategoryAccessSection() -> impl IntoView {
    let nav = use_navigation();
    let (selected_category, set_selected_category) = signal(None::<usize>);

    view! {
        <div class="bg-gradient-to-br from-primary to-primary/80 rounded-b-3xl px-4 pt-8 pb-10 mb-6">
            <div class="text-center mb-8">
                <h2 class="text-2xl sm:text-3xl font-bold mb-3 text-primary-content">
                    "Direito na Palma da Mão"
                </h2>
                <p class="text-primary-content/90">
                    "Sua plataforma completa de estudos jurídicos"
                </p>
            </div>

            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 max-w-5xl mx-auto">
                {CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(i, category)| {
                        view! {
                            <button
                                class="group bg-white/10 hover:bg-white/20 transition-colors rounded-2xl p-5 h-44 flex flex-col items-center justify-between text-primary-content"
                                on:click=move |_| set_selected_category.set(Some(i))
                            >
                                <div class="w-14 h-14 bg-white/20 rounded-xl flex items-center justify-center">
                                    {category_icon(i)}
                                </div>
                                <h3 class="font-semibold text-center leading-tight">
                                    {category.title}
                                </h3>
                                <p class="text-xs text-center opacity-80">{category.description}</p>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>

        // 分类对话框：点击功能名即进入对应功能
        <Show when=move || selected_category.get().is_some()>
            {move || {
                let Some(i) = selected_category.get() else {
                    return ().into_any();
                };
                let category = &CATEGORIES[i];
                view! {
                    <div class="modal modal-open">
                        <div class="modal-box">
                            <div class="flex items-center justify-between mb-4">
                                <h3 class="font-bold text-lg">{category.title}</h3>
                                <button
                                    class="btn btn-ghost btn-sm btn-square"
                                    on:click=move |_| set_selected_category.set(None)
                                >
                                    <X attr:class="h-4 w-4" />
                                </button>
                            </div>
                            <div class="space-y-2">
                                {category
                                    .functions
                                    .iter()
                                    .map(|name| {
                                        let name = *name;
                                        view! {
                                            <button
                                                class="btn btn-ghost btn-block justify-between"
                                                on:click=move |_| {
                                                    nav.select(name);
                                                    set_selected_category.set(None);
                                                }
                                            >
                                                {name}
                                                <ChevronRight attr:class="h-4 w-4" />
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div
                            class="modal-backdrop"
                            on:click=move |_| set_selected_category.set(None)
                        ></div>
                    </div>
                }
                    .into_any()
            }}
        </Show>
    }
}

/// 目录功能网格：渲染 `app` 表的全部记录
#[component]
fn FeaturesGrid() -> impl IntoView {
    let nav = use_navigation();
    let catalog = use_catalog();

    view! {
        <div class="px-4 mb-8 max-w-5xl mx-auto">
            <h2 class="text-xl font-bold mb-4">"Todas as funcionalidades"</h2>
            <Show
                when=move || !catalog.loading().get()
                fallback=|| {
                    view! {
                        <div class="flex justify-center py-12">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                }
            >
                <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-3">
                    <For
                        each=move || catalog.functions().get()
                        key=|record| record.id
                        children=move |record| {
                            let nome = record.funcao.clone();
                            let on_click = {
                                let nome = nome.clone();
                                move |_| nav.select(&nome)
                            };
                            view! {
                                <button class="card bg-base-200 hover:bg-base-300 transition-colors" on:click=on_click>
                                    <div class="card-body items-center text-center p-4 gap-2">
                                        <div class="text-primary">{function_icon(&record.funcao)}</div>
                                        <h3 class="text-sm font-semibold leading-tight">
                                            {record.funcao.clone()}
                                        </h3>
                                        {record
                                            .descricao
                                            .clone()
                                            .map(|d| {
                                                view! {
                                                    <p class="text-xs text-base-content/60 line-clamp-2">{d}</p>
                                                }
                                            })}
                                    </div>
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

/// 学习计划入口页脚
#[component]
fn StudyPlanFooter() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <div class="px-4 pb-10 max-w-5xl mx-auto">
            <div class="card bg-base-200">
                <div class="card-body sm:flex-row items-center justify-between gap-4">
                    <div class="flex items-center gap-3">
                        <Sparkles attr:class="h-6 w-6 text-primary" />
                        <div>
                            <h3 class="font-semibold">"Monte seu plano de estudo"</h3>
                            <p class="text-sm text-base-content/70">
                                "Um cronograma semanal sob medida para o seu objetivo."
                            </p>
                        </div>
                    </div>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| nav.select("Plano de Estudo")
                    >
                        "Plano de Estudo"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// 首页
///
/// 选择了功能时整页切换到功能出口；否则渲染目录内容。
#[component]
pub fn IndexPage() -> impl IntoView {
    let nav = use_navigation();
    let (show_intro, set_show_intro) = signal(!LocalStorage::has_flag(STORAGE_INTRO_KEY));

    view! {
        <Show
            when=move || !nav.is_in_function().get()
            fallback=|| view! { <AppFunctionPage /> }
        >
            <div class="min-h-screen bg-base-100">
                <Show when=move || show_intro.get()>
                    <IntroOnboarding on_complete=set_show_intro />
                </Show>
                <Navbar />
                <CategoryAccessSection />
                <FeaturesGrid />
                <StudyPlanFooter />
            </div>
        </Show>
    }
}
