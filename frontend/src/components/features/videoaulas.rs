use crate::components::app_function::FunctionHeader;
use crate::components::icons::{ArrowLeft, Play};
use leptos::prelude::*;

/// 视频课程的法律领域划分（模块数为当前已发布的数量）
const AREAS: &[(&str, &str, u32)] = &[
    (
        "Direito Constitucional",
        "Princípios, direitos fundamentais e controle de constitucionalidade",
        24,
    ),
    (
        "Direito Civil",
        "Parte geral, obrigações, contratos e responsabilidade civil",
        32,
    ),
    ("Direito Penal", "Teoria do crime, penas e legislação especial", 28),
    ("Processo Civil", "Procedimento comum, recursos e execução", 22),
    ("Processo Penal", "Inquérito, ação penal e provas", 18),
    (
        "Direito Administrativo",
        "Atos, licitações, contratos e servidores públicos",
        20,
    ),
    (
        "Direito do Trabalho",
        "Contrato de trabalho, verbas e justiça do trabalho",
        16,
    ),
    (
        "Direito Tributário",
        "Sistema tributário, obrigação e crédito tributário",
        14,
    ),
];

/// 领域九宫格 + 领域内的模块列表（本地状态，不产生导航）
#[component]
pub fn Videoaulas() -> impl IntoView {
    let (selected_area, set_selected_area) = signal(Option::<usize>::None);

    view! {
        <div class="fixed inset-0 bg-base-100 overflow-y-auto">
            <FunctionHeader title="Videoaulas" />
            <div class="pt-14 max-w-4xl mx-auto p-4">
                {move || match selected_area.get() {
                    None => {
                        view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 py-4">
                                {AREAS
                                    .iter()
                                    .enumerate()
                                    .map(|(idx, (area, desc, modulos))| {
                                        view! {
                                            <button
                                                class="card bg-base-200 hover:bg-base-300 transition-colors text-left"
                                                on:click=move |_| set_selected_area.set(Some(idx))
                                            >
                                                <div class="card-body flex-row items-center gap-4">
                                                    <div class="p-3 bg-primary/10 rounded-xl text-primary">
                                                        <Play attr:class="h-6 w-6" />
                                                    </div>
                                                    <div>
                                                        <h3 class="card-title text-base">{*area}</h3>
                                                        <p class="text-sm text-base-content/70">{*desc}</p>
                                                        <span class="badge badge-ghost badge-sm mt-1">
                                                            {*modulos} " módulos"
                                                        </span>
                                                    </div>
                                                </div>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                    Some(idx) => {
                        let (area, _, modulos) = AREAS[idx];
                        view! {
                            <div class="py-4 space-y-4">
                                <button
                                    class="btn btn-ghost btn-sm gap-2"
                                    on:click=move |_| set_selected_area.set(None)
                                >
                                    <ArrowLeft attr:class="h-4 w-4" />
                                    "Todas as áreas"
                                </button>
                                <h2 class="text-xl font-semibold">{area}</h2>
                                <div class="space-y-2">
                                    {(1..=modulos.min(10))
                                        .map(|n| {
                                            view! {
                                                <div class="flex items-center gap-3 p-3 bg-base-200 rounded-lg">
                                                    <Play attr:class="h-4 w-4 text-primary" />
                                                    <span>{format!("Módulo {:02} — {}", n, area)}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
