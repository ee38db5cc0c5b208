use crate::components::app_function::FunctionHeader;
use crate::components::icons::Target;
use leptos::prelude::*;

const TRILHAS: &[(&str, &str, u32)] = &[
    ("Simulado OAB — 1ª fase", "80 questões no formato da prova", 80),
    ("Direito Constitucional", "Questões comentadas por tema", 350),
    ("Direito Civil", "Questões comentadas por tema", 420),
    ("Direito Penal", "Questões comentadas por tema", 310),
    ("Processo Civil", "Questões comentadas por tema", 280),
    ("Ética Profissional", "Estatuto da OAB e código de ética", 150),
];

#[component]
pub fn BancoQuestoes() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-base-100 overflow-y-auto">
            <FunctionHeader title="Banco de Questões" />
            <div class="pt-14 max-w-3xl mx-auto p-4">
                <div class="space-y-3 py-4">
                    {TRILHAS
                        .iter()
                        .map(|(nome, desc, total)| {
                            view! {
                                <div class="card bg-base-200">
                                    <div class="card-body flex-row items-center justify-between py-4">
                                        <div class="flex items-center gap-4">
                                            <Target attr:class="h-6 w-6 text-primary shrink-0" />
                                            <div>
                                                <h3 class="font-semibold">{*nome}</h3>
                                                <p class="text-sm text-base-content/70">{*desc}</p>
                                            </div>
                                        </div>
                                        <span class="badge badge-ghost">{*total} " questões"</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
