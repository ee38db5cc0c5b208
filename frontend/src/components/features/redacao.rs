use crate::components::app_function::FunctionHeader;
use crate::components::icons::Sparkles;
use leptos::prelude::*;

const TIPOS: &[(&str, &str)] = &[
    ("dissertativa", "Questão dissertativa"),
    ("parecer", "Parecer jurídico"),
    ("peca", "Peça processual"),
];

const DICAS: &[(&str, &str)] = &[
    (
        "Estruture antes de escrever",
        "Separe introdução, fundamentação e conclusão antes de redigir o primeiro parágrafo.",
    ),
    (
        "Fundamente com a norma",
        "Cite o dispositivo legal aplicável (artigo, lei) em toda tese que sustentar.",
    ),
    (
        "Linguagem técnica, frases curtas",
        "Prefira períodos curtos e vocabulário jurídico preciso. Evite adjetivos desnecessários.",
    ),
    (
        "Revise a ortografia",
        "Erros de português descontam pontos em qualquer banca. Reserve tempo para revisão final.",
    ),
];

#[derive(Clone, Copy, PartialEq)]
enum Aba {
    Escrever,
    Dicas,
}

/// 写作练习：文本 + 类型选择，提交后给出固定格式的演示反馈
#[component]
pub fn Redacao() -> impl IntoView {
    let (aba, set_aba) = signal(Aba::Escrever);
    let (texto, set_texto) = signal(String::new());
    let (tipo, set_tipo) = signal("dissertativa".to_string());
    let (analisado, set_analisado) = signal(false);

    let analisar = move |_| {
        if texto.with(|t| t.trim().is_empty()) {
            return;
        }
        set_analisado.set(true);
    };

    let tab_class = move |t: Aba| {
        if aba.get() == t {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <div class="fixed inset-0 bg-base-100 overflow-y-auto">
            <FunctionHeader title="Redação" />
            <div class="pt-14 max-w-2xl mx-auto p-4">
                <div role="tablist" class="tabs tabs-boxed my-4">
                    <a role="tab" class=move || tab_class(Aba::Escrever) on:click=move |_| set_aba.set(Aba::Escrever)>
                        "Escrever"
                    </a>
                    <a role="tab" class=move || tab_class(Aba::Dicas) on:click=move |_| set_aba.set(Aba::Dicas)>
                        "Dicas"
                    </a>
                </div>

                <Show
                    when=move || aba.get() == Aba::Escrever
                    fallback=move || {
                        view! {
                            <div class="space-y-3">
                                {DICAS
                                    .iter()
                                    .map(|(titulo, corpo)| {
                                        view! {
                                            <div class="card bg-base-200">
                                                <div class="card-body py-4">
                                                    <h3 class="font-semibold">{*titulo}</h3>
                                                    <p class="text-sm text-base-content/70">{*corpo}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    }
                >
                    <div class="space-y-4">
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| set_tipo.set(event_target_value(&ev))
                        >
                            {TIPOS
                                .iter()
                                .map(|(valor, rotulo)| {
                                    view! {
                                        <option value=*valor selected=move || tipo.get() == *valor>
                                            {*rotulo}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>

                        <textarea
                            class="textarea textarea-bordered w-full min-h-48"
                            placeholder="Cole ou escreva seu texto aqui..."
                            prop:value=texto
                            on:input=move |ev| {
                                set_texto.set(event_target_value(&ev));
                                set_analisado.set(false);
                            }
                        ></textarea>

                        <button class="btn btn-primary btn-block" on:click=analisar>
                            <Sparkles attr:class="h-4 w-4" />
                            "Analisar redação"
                        </button>

                        <Show when=move || analisado.get()>
                            <div class="card bg-base-200">
                                <div class="card-body gap-2">
                                    <h3 class="card-title text-base">"Análise demonstrativa"</h3>
                                    <p class="text-sm text-base-content/70">
                                        "✅ Estrutura: texto com parágrafos identificados."
                                    </p>
                                    <p class="text-sm text-base-content/70">
                                        {move || {
                                            format!(
                                                "📝 Extensão: {} palavras.",
                                                texto.with(|t| t.split_whitespace().count()),
                                            )
                                        }}
                                    </p>
                                    <p class="text-sm text-base-content/70">
                                        "💡 A correção completa por banca especializada estará disponível em breve. Enquanto isso, confira a aba Dicas."
                                    </p>
                                </div>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>
        </div>
    }
}
