use crate::components::app_function::FunctionHeader;
use crate::components::icons::Zap;
use leptos::prelude::*;

/// 演示卡组（完整卡组由目录侧的外部功能提供）
const CARDS: &[(&str, &str)] = &[
    (
        "O que é o princípio da legalidade?",
        "Ninguém será obrigado a fazer ou deixar de fazer alguma coisa senão em virtude de lei (CF, art. 5º, II).",
    ),
    (
        "Qual o prazo prescricional geral das pretensões pessoais no Código Civil?",
        "Dez anos, quando a lei não fixar prazo menor (CC, art. 205).",
    ),
    (
        "O que caracteriza o flagrante delito?",
        "Quem está cometendo a infração, acabou de cometê-la, ou é perseguido/encontrado logo após em situação que faça presumir a autoria (CPP, art. 302).",
    ),
    (
        "O que é coisa julgada formal?",
        "A imutabilidade da decisão dentro do processo em que foi proferida, por esgotamento dos recursos.",
    ),
];

#[component]
pub fn Flashcards() -> impl IntoView {
    let (index, set_index) = signal(0usize);
    let (revealed, set_revealed) = signal(false);

    let advance = move |_| {
        if revealed.get() {
            set_revealed.set(false);
            set_index.update(|i| *i = (*i + 1) % CARDS.len());
        } else {
            set_revealed.set(true);
        }
    };

    view! {
        <div class="fixed inset-0 bg-base-100">
            <FunctionHeader title="Flashcards" />
            <div class="pt-14 h-full flex flex-col items-center justify-center gap-6 p-6">
                <div class="badge badge-ghost">
                    <Zap attr:class="h-3 w-3 mr-1" />
                    {move || format!("{} / {}", index.get() + 1, CARDS.len())}
                </div>

                <button class="card bg-base-200 w-full max-w-lg min-h-48 shadow-lg" on:click=advance>
                    <div class="card-body items-center justify-center text-center">
                        {move || {
                            let (pergunta, resposta) = CARDS[index.get()];
                            if revealed.get() {
                                view! {
                                    <p class="text-base-content">{resposta}</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <p class="font-semibold text-lg">{pergunta}</p>
                                    <p class="text-sm text-base-content/50 mt-4">
                                        "Toque para ver a resposta"
                                    </p>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </button>

                <button class="btn btn-primary btn-wide" on:click=advance>
                    {move || if revealed.get() { "Próximo cartão" } else { "Mostrar resposta" }}
                </button>
            </div>
        </div>
    }
}
