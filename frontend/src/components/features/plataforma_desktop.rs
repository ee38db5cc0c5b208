use crate::components::app_function::FunctionHeader;
use crate::components::icons::Monitor;
use leptos::prelude::*;

#[component]
pub fn PlataformaDesktop() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-base-100">
            <FunctionHeader title="Plataforma Desktop" />
            <div class="pt-14 h-full flex items-center justify-center p-8">
                <div class="card bg-base-200 max-w-md">
                    <div class="card-body items-center text-center gap-4">
                        <div class="p-4 bg-primary/10 rounded-2xl text-primary">
                            <Monitor attr:class="h-10 w-10" />
                        </div>
                        <h2 class="card-title">"Estude no computador"</h2>
                        <p class="text-base-content/70">
                            "Acesse a plataforma completa pelo navegador do seu computador, "
                            "com todo o conteúdo sincronizado com o aplicativo."
                        </p>
                        <a
                            href="https://app.jusestudo.com.br"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary"
                        >
                            "Abrir plataforma"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
