use crate::components::app_function::FunctionHeader;
use crate::components::icons::{GraduationCap, Target};
use jusestudo_shared::ProfileType;
use leptos::prelude::*;

/// 每个档位对应的周计划摘要
const HORAS: &[(&str, &str)] = &[
    ("1h", "1 hora por dia"),
    ("2h", "2 horas por dia"),
    ("4h", "4 horas ou mais por dia"),
];

fn plano_resumo(perfil: ProfileType, horas: &str) -> Vec<(&'static str, String)> {
    let base = match perfil {
        ProfileType::Faculdade => "disciplinas do semestre",
        ProfileType::Concurso => "matérias do edital",
        ProfileType::Oab => "disciplinas da 1ª fase da OAB",
        ProfileType::Advogado => "atualização profissional",
    };
    let (teoria, questoes, revisao) = match horas {
        "1h" => ("30 min", "20 min", "10 min"),
        "2h" => ("1h", "40 min", "20 min"),
        _ => ("2h", "1h30", "30 min"),
    };
    vec![
        ("Teoria", format!("{teoria} de videoaulas e leitura ({base})")),
        ("Questões", format!("{questoes} de questões comentadas")),
        ("Revisão", format!("{revisao} de flashcards e resumos")),
    ]
}

/// 两步式学习计划生成器：选档案 → 选每日时长 → 出周计划。
/// 纯前端演示，不持久化。
#[component]
pub fn PlanoEstudo() -> impl IntoView {
    let (perfil, set_perfil) = signal(None::<ProfileType>);
    let (horas, set_horas) = signal(None::<&'static str>);

    let reiniciar = move |_| {
        set_perfil.set(None);
        set_horas.set(None);
    };

    view! {
        <div class="fixed inset-0 bg-base-100 overflow-y-auto">
            <FunctionHeader title="Plano de Estudo" />
            <div class="pt-14 max-w-2xl mx-auto p-4">
                {move || match (perfil.get(), horas.get()) {
                    (None, _) => {
                        view! {
                            <div class="py-4 space-y-3">
                                <h2 class="text-lg font-semibold flex items-center gap-2">
                                    <GraduationCap attr:class="h-5 w-5 text-primary" />
                                    "Qual é o seu objetivo?"
                                </h2>
                                {ProfileType::ALL
                                    .iter()
                                    .map(|p| {
                                        let p = *p;
                                        view! {
                                            <button
                                                class="btn btn-outline btn-block justify-start"
                                                on:click=move |_| set_perfil.set(Some(p))
                                            >
                                                {p.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                    (Some(_), None) => {
                        view! {
                            <div class="py-4 space-y-3">
                                <h2 class="text-lg font-semibold flex items-center gap-2">
                                    <Target attr:class="h-5 w-5 text-primary" />
                                    "Quanto tempo você tem por dia?"
                                </h2>
                                {HORAS
                                    .iter()
                                    .map(|(chave, rotulo)| {
                                        let chave = *chave;
                                        view! {
                                            <button
                                                class="btn btn-outline btn-block justify-start"
                                                on:click=move |_| set_horas.set(Some(chave))
                                            >
                                                {*rotulo}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                    (Some(p), Some(h)) => {
                        view! {
                            <div class="py-4 space-y-4">
                                <div class="alert alert-success">
                                    "Seu plano semanal para " <b>{p.label()}</b> " está pronto!"
                                </div>
                                <div class="space-y-3">
                                    {plano_resumo(p, h)
                                        .into_iter()
                                        .map(|(etapa, detalhe)| {
                                            view! {
                                                <div class="card bg-base-200">
                                                    <div class="card-body py-4">
                                                        <h3 class="font-semibold">{etapa}</h3>
                                                        <p class="text-sm text-base-content/70">{detalhe}</p>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <button class="btn btn-ghost btn-block" on:click=reiniciar>
                                    "Refazer plano"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
