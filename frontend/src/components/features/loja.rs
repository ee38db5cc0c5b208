use crate::components::app_function::FunctionHeader;
use crate::components::icons::ShoppingBag;
use leptos::prelude::*;

const PRODUTOS: &[(&str, &str)] = &[
    ("Curso OAB Completo", "R$ 497,00"),
    ("Combo Resumos + Mapas Mentais", "R$ 97,00"),
    ("Vade Mecum Impresso 2026", "R$ 189,00"),
    ("Assinatura Premium Anual", "R$ 29,90/mês"),
];

#[component]
pub fn Loja() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-base-100 overflow-y-auto">
            <FunctionHeader title="Loja" />
            <div class="pt-14 max-w-3xl mx-auto p-4">
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 py-4">
                    {PRODUTOS
                        .iter()
                        .map(|(nome, preco)| {
                            view! {
                                <div class="card bg-base-200">
                                    <div class="card-body items-center text-center gap-2">
                                        <ShoppingBag attr:class="h-8 w-8 text-primary" />
                                        <h3 class="card-title text-base">{*nome}</h3>
                                        <p class="text-primary font-bold">{*preco}</p>
                                        <button class="btn btn-outline btn-sm">"Ver detalhes"</button>
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
