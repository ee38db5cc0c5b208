use crate::components::app_function::FunctionHeader;
use crate::components::icons::Download;
use leptos::prelude::*;

const PACOTES: &[(&str, &str, &str)] = &[
    ("Aplicativo Android", "APK para instalação direta", "#android"),
    ("Aplicativo Desktop", "Windows, macOS e Linux", "#desktop"),
    ("Vade Mecum em PDF", "Edição compilada para leitura offline", "#vademecum"),
    ("Resumos Jurídicos", "Coletânea em PDF por disciplina", "#resumos"),
];

#[component]
pub fn Downloads() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-base-100 overflow-y-auto">
            <FunctionHeader title="Downloads" />
            <div class="pt-14 max-w-3xl mx-auto p-4">
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 py-4">
                    {PACOTES
                        .iter()
                        .map(|(nome, desc, href)| {
                            view! {
                                <a href=*href class="card bg-base-200 hover:bg-base-300 transition-colors">
                                    <div class="card-body items-center text-center gap-2">
                                        <Download attr:class="h-8 w-8 text-primary" />
                                        <h3 class="card-title text-base">{*nome}</h3>
                                        <p class="text-sm text-base-content/70">{*desc}</p>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
